//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog is read-only; the
/// cart is the only mutable state and sits behind a lock so each cart action
/// and the render that follows it run without interleaving.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: RwLock<Cart>,
}

impl AppState {
    /// Create a new application state with an empty cart.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let cart = Cart::for_catalog(&catalog);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: RwLock::new(cart),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the cart lock.
    #[must_use]
    pub fn cart(&self) -> &RwLock<Cart> {
        &self.inner.cart
    }
}
