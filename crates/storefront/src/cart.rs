//! In-memory cart store.
//!
//! The cart is an ordered list of references to catalog products. Adding the
//! same product twice stores two entries; quantities only exist in the
//! grouped [`CartLine`]s computed for display.

use std::sync::Arc;

use deskgear_core::{CurrencyCode, Price, Product, ProductId};
use indexmap::IndexMap;

use crate::catalog::Catalog;

/// One display line of the cart: every entry for a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub subtotal: Price,
}

/// Products the shopper intends to buy, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<Arc<Product>>,
    currency: CurrencyCode,
}

impl Cart {
    /// Create an empty cart whose totals are expressed in `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            entries: Vec::new(),
            currency,
        }
    }

    /// Create an empty cart for products of `catalog`.
    #[must_use]
    pub const fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.currency())
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Arc<Product>] {
        &self.entries
    }

    /// Number of entries (units), not distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one unit of the catalog product with `id`.
    ///
    /// Returns `false` and leaves the cart untouched when the catalog has no
    /// such product.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId) -> bool {
        let Some(product) = catalog.find(id) else {
            return false;
        };
        self.entries.push(Arc::clone(product));
        true
    }

    /// Remove one unit of the product with `id`.
    ///
    /// The first matching entry in insertion order is removed. Returns
    /// `false` and leaves the cart untouched when nothing matches.
    pub fn remove_one(&mut self, id: ProductId) -> bool {
        let Some(index) = self.entries.iter().position(|p| p.id == id) else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    /// Number of units of the product with `id`.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> usize {
        self.entries.iter().filter(|p| p.id == id).count()
    }

    /// Entries grouped by product, in the order each product was first added.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        let mut grouped: IndexMap<ProductId, CartLine> = IndexMap::new();
        for product in &self.entries {
            grouped
                .entry(product.id)
                .and_modify(|line| {
                    line.quantity = line.quantity.saturating_add(1);
                    line.subtotal = line.subtotal + product.price;
                })
                .or_insert_with(|| CartLine {
                    product_id: product.id,
                    name: product.name.clone(),
                    quantity: 1,
                    subtotal: product.price,
                });
        }
        grouped.into_values().collect()
    }

    /// Sum of the prices of every entry.
    #[must_use]
    pub fn total(&self) -> Price {
        self.entries
            .iter()
            .fold(Price::zero(self.currency), |total, p| total + p.price)
    }
}
