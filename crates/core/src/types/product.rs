//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable product.
///
/// Products are immutable once the catalog is built; the cart only ever holds
/// shared references to catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identity, unique within a catalog.
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(rename = "desc")]
    pub description: String,
    /// Image path relative to the storefront root, e.g. `images/ssd.jpg`.
    #[serde(rename = "img")]
    pub image: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
            image: image.into(),
        }
    }
}
