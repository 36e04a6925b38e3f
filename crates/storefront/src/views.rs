//! View descriptions for the catalog and cart regions.
//!
//! Rendering is a pure projection of state into a fresh view. Every control
//! that triggers a state change carries a [`Binding`]: the action, the
//! endpoint it posts to and the region the response replaces. Templates emit
//! bindings as form and `hx-*` attributes, so a re-render replaces the whole
//! region and its controls together.

use std::sync::Arc;

use deskgear_core::{Product, ProductId, SortMode};

use crate::cart::Cart;

/// Text shown in the cart region when the cart holds nothing.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// A state change a control can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append one unit of the product to the cart.
    AddToCart(ProductId),
    /// Remove one unit of the product from the cart.
    RemoveFromCart(ProductId),
}

impl Action {
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        match self {
            Self::AddToCart(id) | Self::RemoveFromCart(id) => *id,
        }
    }

    /// Path the control posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "/cart/add",
            Self::RemoveFromCart(_) => "/cart/remove",
        }
    }

    /// Button text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "Add to Cart",
            Self::RemoveFromCart(_) => "Remove",
        }
    }

    /// Region re-rendered after the action runs.
    #[must_use]
    pub const fn target(&self) -> Region {
        match self {
            Self::AddToCart(_) | Self::RemoveFromCart(_) => Region::Cart,
        }
    }
}

/// Addressable regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ProductList,
    Cart,
}

impl Region {
    /// Element id of the region.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ProductList => "product-list",
            Self::Cart => "cart",
        }
    }

    /// CSS selector for `hx-target`.
    #[must_use]
    pub fn selector(&self) -> String {
        format!("#{}", self.id())
    }
}

/// An action attached to a rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub action: Action,
    /// Element id of the control, unique within a render.
    pub control_id: String,
}

impl Binding {
    fn new(action: Action) -> Self {
        let prefix = match action {
            Action::AddToCart(_) => "add-to-cart",
            Action::RemoveFromCart(_) => "remove-from-cart",
        };
        Self {
            control_id: format!("{prefix}-{}", action.product_id()),
            action,
        }
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.action.product_id()
    }

    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        self.action.endpoint()
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.action.label()
    }

    #[must_use]
    pub fn target(&self) -> String {
        self.action.target().selector()
    }
}

/// The sort selector.
///
/// Changing it fetches the product list for the chosen mode and replaces the
/// product list region. The cart is not involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortControl {
    /// Element id of the `<select>`.
    pub control_id: &'static str,
    /// Path the selector issues a `GET` to.
    pub endpoint: &'static str,
    pub region: Region,
}

impl SortControl {
    #[must_use]
    pub fn target(&self) -> String {
        self.region.selector()
    }
}

/// The page's only sort selector.
pub const SORT_CONTROL: SortControl = SortControl {
    control_id: "sort-by",
    endpoint: "/products",
    region: Region::ProductList,
};

/// Image display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

/// Product card display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: ImageView,
    pub add: Binding,
}

/// One entry of the sort selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Product list display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub sort: SortMode,
    pub cards: Vec<ProductCardView>,
}

impl CatalogView {
    /// Element id of the product list region.
    #[must_use]
    pub const fn region_id(&self) -> &'static str {
        Region::ProductList.id()
    }

    #[must_use]
    pub const fn sort_control(&self) -> SortControl {
        SORT_CONTROL
    }

    /// Options for the sort selector with the current mode selected.
    #[must_use]
    pub fn sort_options(&self) -> Vec<SortOptionView> {
        SortMode::ALL
            .iter()
            .map(|mode| SortOptionView {
                value: mode.as_str(),
                label: mode.label(),
                selected: *mode == self.sort,
            })
            .collect()
    }

    /// Every control binding in this render, in display order.
    #[must_use]
    pub fn bindings(&self) -> Vec<&Binding> {
        self.cards.iter().map(|card| &card.add).collect()
    }
}

/// Cart line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub line_price: String,
    pub remove: Binding,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Sort mode of the page the cart is shown on, sent back with every
    /// cart action so a plain form post returns to the same order.
    pub sort: SortMode,
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: usize,
}

impl CartView {
    /// Element id of the cart region.
    #[must_use]
    pub const fn region_id(&self) -> &'static str {
        Region::Cart.id()
    }

    /// Returns true when there are no lines to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        EMPTY_CART_MESSAGE
    }

    /// Every control binding in this render, in display order.
    #[must_use]
    pub fn bindings(&self) -> Vec<&Binding> {
        self.items.iter().map(|item| &item.remove).collect()
    }
}

/// Project products, already in display order, into the product list region.
#[must_use]
pub fn render_catalog(products: &[Arc<Product>], sort: SortMode) -> CatalogView {
    let cards = products
        .iter()
        .map(|product| ProductCardView {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image: ImageView {
                src: format!("/{}", product.image.trim_start_matches('/')),
                alt: product.name.clone(),
            },
            add: Binding::new(Action::AddToCart(product.id)),
        })
        .collect();

    CatalogView { sort, cards }
}

/// Project the cart into the cart region of a page shown in `sort` order.
#[must_use]
pub fn render_cart(cart: &Cart, sort: SortMode) -> CartView {
    let items = cart
        .lines()
        .into_iter()
        .map(|line| CartItemView {
            product_id: line.product_id,
            title: format!("{} ({})", line.name, line.quantity),
            quantity: line.quantity,
            line_price: line.subtotal.display(),
            remove: Binding::new(Action::RemoveFromCart(line.product_id)),
        })
        .collect();

    CartView {
        sort,
        items,
        subtotal: cart.total().display(),
        item_count: cart.len(),
    }
}
