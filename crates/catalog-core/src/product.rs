//! # Product Types
//!
//! The product record served by the catalog API and the validated input
//! used to create one.

use serde::{Deserialize, Serialize, Serializer};

/// Store-assigned product identifier
pub type ProductId = u64;

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store and never reused
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Price as a plain number. May be NaN when a non-numeric price was
    /// accepted in compatible mode.
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Validated input for [`crate::ProductStore::create`]
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Whole prices are written as JSON integers (`25`, not `25.0`) and
/// non-finite prices as `null`.
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !price.is_finite() {
        return serializer.serialize_none();
    }
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        return serializer.serialize_i64(*price as i64);
    }
    serializer.serialize_f64(*price)
}
