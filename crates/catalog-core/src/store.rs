//! # Product Store
//!
//! In-memory, insertion-ordered product collection with a monotonically
//! increasing id counter. The store owns all product state for the lifetime
//! of the process; nothing is persisted.

use crate::error::{CatalogError, CatalogResult};
use crate::product::{NewProduct, Product, ProductId};
use serde::Deserialize;
use std::collections::HashSet;

/// First id handed out by an empty store
const FIRST_ID: ProductId = 1;

/// Ordered products plus the next id to assign.
///
/// Every stored id is strictly less than `next_id`, and `next_id` only ever
/// grows, by exactly one per [`ProductStore::create`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: ProductId,
}

/// Seed file layout (`[[products]]` tables)
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<Product>,
}

impl ProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Create the store with the built-in seed data
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product::new(1, "Laptop", 1200.0),
                Product::new(2, "Keyboard", 75.0),
            ],
            next_id: 3,
        }
    }

    /// Build a store from existing products. Ids must be unique and
    /// positive, names non-empty, prices finite and non-negative. The
    /// counter starts one past the highest id.
    pub fn with_products(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id < FIRST_ID {
                return Err(CatalogError::Seed(format!(
                    "product id must be positive: {}",
                    product.name
                )));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::Seed(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::Seed(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::Seed(format!(
                    "product {} has an invalid price: {}",
                    product.id, product.price
                )));
            }
        }

        let next_id = products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(FIRST_ID, |max| max + 1);

        Ok(Self { products, next_id })
    }

    /// Load seed products from a TOML string
    pub fn from_toml(toml_str: &str) -> CatalogResult<Self> {
        let seed: SeedFile = toml::from_str(toml_str)?;
        Self::with_products(seed.products)
    }

    /// All products in insertion order
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Append a product with the next id and return it.
    /// Input is expected to be validated already.
    pub fn create(&mut self, input: NewProduct) -> Product {
        let product = Product::new(self.next_id, input.name, input.price);
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    /// The id the next create will assign
    pub fn next_id(&self) -> ProductId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = ProductStore::seeded();
        let products = store.list_all();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0], Product::new(1, "Laptop", 1200.0));
        assert_eq!(products[1], Product::new(2, "Keyboard", 75.0));
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_create_appends_with_next_id() {
        let mut store = ProductStore::seeded();
        let created = store.create(NewProduct::new("Mouse", 25.0));

        assert_eq!(created, Product::new(3, "Mouse", 25.0));
        assert_eq!(store.list_all()[2], created);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_ids_increase_by_one() {
        let mut store = ProductStore::seeded();
        let ids: Vec<_> = (0..5)
            .map(|i| store.create(NewProduct::new(format!("Item {}", i), 1.0)).id)
            .collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_list_is_idempotent() {
        let store = ProductStore::seeded();
        assert_eq!(store.list_all(), store.list_all());
    }

    #[test]
    fn test_empty_store() {
        let mut store = ProductStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
        assert_eq!(store.create(NewProduct::new("First", 1.0)).id, 1);
    }

    #[test]
    fn test_from_toml() {
        let store = ProductStore::from_toml(
            r#"
            [[products]]
            id = 10
            name = "Monitor"
            price = 300

            [[products]]
            id = 4
            name = "Cable"
            price = 9.5
            "#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.list_all()[0].name, "Monitor");
        assert_eq!(store.list_all()[1].price, 9.5);
        assert_eq!(store.next_id(), 11);
    }

    #[test]
    fn test_from_toml_rejects_duplicate_ids() {
        let result = ProductStore::from_toml(
            r#"
            [[products]]
            id = 1
            name = "A"
            price = 1

            [[products]]
            id = 1
            name = "B"
            price = 2
            "#,
        );
        assert!(matches!(result, Err(CatalogError::Seed(_))));
    }

    #[test]
    fn test_from_toml_rejects_zero_id() {
        let result = ProductStore::from_toml("[[products]]\nid = 0\nname = \"A\"\nprice = 1\n");
        assert!(matches!(result, Err(CatalogError::Seed(_))));
    }

    #[test]
    fn test_from_toml_rejects_empty_name() {
        let result = ProductStore::from_toml("[[products]]\nid = 4\nname = \"\"\nprice = 10\n");
        assert!(matches!(result, Err(CatalogError::Seed(_))));
    }

    #[test]
    fn test_from_toml_rejects_bad_price() {
        for price in ["nan", "inf", "-5"] {
            let seed = format!("[[products]]\nid = 4\nname = \"Mouse\"\nprice = {}\n", price);
            let result = ProductStore::from_toml(&seed);
            assert!(matches!(result, Err(CatalogError::Seed(_))), "price: {}", price);
        }
    }

    #[test]
    fn test_from_toml_parse_error() {
        let result = ProductStore::from_toml("products = 5");
        assert!(matches!(result, Err(CatalogError::Seed(_))));
    }
}
