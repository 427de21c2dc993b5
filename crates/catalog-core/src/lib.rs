//! # catalog-core
//!
//! Core types for the catalog-rs products API.
//!
//! This crate provides:
//! - `Product` and `NewProduct` records
//! - `ProductStore`, the in-memory ordered store with id assignment
//! - Create-request validation (`validate_new_product`, `ValidationMode`)
//! - `CatalogError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::{validate_new_product, ProductStore, ValidationMode};
//! use serde_json::json;
//!
//! let mut store = ProductStore::seeded();
//! let input = validate_new_product(&json!({"name": "Mouse", "price": 25}), ValidationMode::Compatible)?;
//! let product = store.create(input);
//!
//! assert_eq!(product.id, 3);
//! assert_eq!(store.list_all().len(), 3);
//! # Ok::<(), catalog_core::CatalogError>(())
//! ```

pub mod error;
pub mod product;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult, INVALID_PRICE_MESSAGE, MISSING_FIELDS_MESSAGE};
pub use product::{NewProduct, Product, ProductId};
pub use store::ProductStore;
pub use validation::{validate_new_product, ValidationMode};
