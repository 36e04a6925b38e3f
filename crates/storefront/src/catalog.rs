//! Catalog store and sort service.
//!
//! The catalog is built once at startup and never mutated. Sorting always
//! works on a copy of the product list.

use std::collections::HashSet;
use std::sync::Arc;

use deskgear_core::{CurrencyCode, Price, Product, ProductId, SortMode};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A product has a price below zero.
    #[error("product {id} has a negative price ({price})")]
    NegativePrice { id: ProductId, price: Price },

    /// Products are priced in more than one currency.
    #[error("product {id} is priced in {found}, catalog currency is {expected}")]
    MixedCurrency {
        id: ProductId,
        expected: &'static str,
        found: &'static str,
    },
}

/// The fixed, ordered set of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    currency: CurrencyCode,
}

impl Catalog {
    /// Build a catalog from products in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if ids repeat, a price is negative, or the
    /// products do not share a single currency.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let currency = products
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency_code);

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if product.price.currency_code != currency {
                return Err(CatalogError::MixedCurrency {
                    id: product.id,
                    expected: currency.code(),
                    found: product.price.currency_code.code(),
                });
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
            currency,
        })
    }

    /// The built-in desk gear catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the built-in product list is inconsistent.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_products())
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Currency every product is priced in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    /// A copy of the catalog in the order given by `mode`.
    ///
    /// Products with equal prices keep their catalog order.
    #[must_use]
    pub fn sorted(&self, mode: SortMode) -> Vec<Arc<Product>> {
        let mut products = self.products.clone();
        match mode {
            SortMode::None => {}
            SortMode::Ascending => {
                products.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
            }
            SortMode::Descending => {
                products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
            }
        }
        products
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(
            ProductId::new(1),
            "27-inch Monitor",
            Price::usd(Decimal::new(35000, 2)),
            "4K resolution display with high refresh rate for professional design.",
            "images/monitor.jpg",
        ),
        Product::new(
            ProductId::new(2),
            "Headphone",
            Price::usd(Decimal::new(19999, 2)),
            "Block out distractions for deep focus during study or coding sessions.",
            "images/headphone.jpg",
        ),
        Product::new(
            ProductId::new(3),
            "Mechanical Keyboard",
            Price::usd(Decimal::new(12000, 2)),
            "Tactile, clicky keys for the ultimate coding and typing experience.",
            "images/keyboard.jpg",
        ),
        Product::new(
            ProductId::new(4),
            "SSD 1TB",
            Price::usd(Decimal::new(8999, 2)),
            "Lightning-fast solid-state drive for quick boot times and storage.",
            "images/ssd.jpg",
        ),
        Product::new(
            ProductId::new(5),
            "Webcam 1080P",
            Price::usd(Decimal::new(6500, 2)),
            "Full HD streaming for video conferences and online lectures.",
            "images/webcam.jpg",
        ),
        Product::new(
            ProductId::new(6),
            "Wireless Mouse",
            Price::usd(Decimal::new(4550, 2)),
            "Ergonomic design and adjustable DPI for comfort and precision.",
            "images/mouse.jpg",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(products: &[Arc<Product>]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    fn product(id: i32, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Price::usd(Decimal::new(cents, 2)),
            "",
            format!("images/{id}.jpg"),
        )
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.currency(), CurrencyCode::USD);
        assert_eq!(ids(catalog.products()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_find_existing_product() {
        let catalog = Catalog::builtin().unwrap();
        let keyboard = catalog.find(ProductId::new(3)).unwrap();
        assert_eq!(keyboard.name, "Mechanical Keyboard");
        assert_eq!(keyboard.price.display(), "$120.00");
    }

    #[test]
    fn test_find_missing_product() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.find(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_sort_none_preserves_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(ids(&catalog.sorted(SortMode::None)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sort_ascending() {
        let catalog = Catalog::builtin().unwrap();
        let sorted = catalog.sorted(SortMode::Ascending);
        assert_eq!(ids(&sorted), vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(sorted.first().unwrap().price.display(), "$45.50");
        assert_eq!(sorted.last().unwrap().price.display(), "$350.00");
    }

    #[test]
    fn test_sort_descending() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            ids(&catalog.sorted(SortMode::Descending)),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_sort_does_not_mutate_catalog() {
        let catalog = Catalog::new(vec![product(1, 500), product(2, 100)]).unwrap();
        let sorted = catalog.sorted(SortMode::Ascending);
        assert_eq!(ids(&sorted), vec![2, 1]);
        assert_eq!(ids(catalog.products()), vec![1, 2]);
    }

    #[test]
    fn test_sort_keeps_ties_in_catalog_order() {
        let catalog =
            Catalog::new(vec![product(1, 500), product(2, 100), product(3, 500)]).unwrap();
        assert_eq!(ids(&catalog.sorted(SortMode::Ascending)), vec![2, 1, 3]);
        assert_eq!(ids(&catalog.sorted(SortMode::Descending)), vec![1, 3, 2]);
    }

    #[test]
    fn test_sorted_entries_share_catalog_products() {
        let catalog = Catalog::builtin().unwrap();
        let sorted = catalog.sorted(SortMode::Ascending);
        let mouse = catalog.find(ProductId::new(6)).unwrap();
        assert!(Arc::ptr_eq(sorted.first().unwrap(), mouse));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.sorted(SortMode::Descending).is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, 100), product(1, 200)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(ProductId::new(1)));
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = Catalog::new(vec![product(1, 100), product(2, -1)]).unwrap_err();
        assert!(matches!(err, CatalogError::NegativePrice { id, .. } if id == ProductId::new(2)));
    }

    #[test]
    fn test_rejects_mixed_currency() {
        let mut euro = product(2, 100);
        euro.price.currency_code = CurrencyCode::EUR;
        let err = Catalog::new(vec![product(1, 100), euro]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::MixedCurrency {
                id: ProductId::new(2),
                expected: "USD",
                found: "EUR",
            }
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::DuplicateId(ProductId::new(4)).to_string(),
            "duplicate product id 4"
        );
    }
}
