//! # Catalog Error Types
//!
//! Typed error handling for the product catalog.
//! Store and validation operations return `Result<T, CatalogError>`.

use thiserror::Error;

/// Message returned when a create request lacks a name or a price
pub const MISSING_FIELDS_MESSAGE: &str = "Product name and price are required.";

/// Message returned when strict validation rejects a price
pub const INVALID_PRICE_MESSAGE: &str = "Product price must be a non-negative number.";

/// Core error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Required fields missing from a create request
    #[error("Product name and price are required.")]
    Validation,

    /// Price present but rejected by strict validation
    #[error("Product price must be a non-negative number.")]
    InvalidPrice,

    /// Seed data could not be loaded
    #[error("Seed error: {0}")]
    Seed(String),

    /// Configuration errors (unknown mode, bad values)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CatalogError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation => 400,
            CatalogError::InvalidPrice => 400,
            CatalogError::Seed(_) => 500,
            CatalogError::Configuration(_) => 500,
        }
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Seed(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
