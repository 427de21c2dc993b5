//! # Request Handlers
//!
//! Axum request handlers for the products API.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use catalog_core::{validate_new_product, CatalogError, Product};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Error body: `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ErrorReply = (StatusCode, Json<MessageResponse>);

fn catalog_error_to_response(err: CatalogError) -> ErrorReply {
    let code = err.status_code();
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(MessageResponse::new(err.to_string())),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.store.read().await.len();
    Json(serde_json::json!({
        "status": "healthy",
        "service": "catalog-rs",
        "version": env!("CARGO_PKG_VERSION"),
        "products": products
    }))
}

/// List every product in insertion order
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    info!("GET request received for all products");
    let store = state.store.read().await;
    Json(store.list_all().to_vec())
}

/// Create a product from `{name, price}`
#[instrument(skip(state, body))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Product>), ErrorReply> {
    info!("POST request received. Data: {}", body);

    let input = validate_new_product(&body, state.validation_mode()).map_err(|e| {
        warn!("Rejected create request: {}", e);
        catalog_error_to_response(e)
    })?;

    // Id assignment and append happen under one write guard.
    let product = state.store.write().await.create(input);

    info!(id = product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}
