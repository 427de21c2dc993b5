//! # Routes
//!
//! Axum router configuration for the products API.

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

/// Create the main application router
///
/// Routes:
/// - GET  /api/products - List all products
/// - POST /api/products - Create a product
/// - GET  /health - Health check
///
/// Any other path falls through to the static asset directory when it
/// exists on disk.
pub fn create_router(state: AppState) -> Router {
    // Browser clients may call the API from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().route(
        "/products",
        get(handlers::list_products).post(handlers::create_product),
    );

    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes);

    let static_dir = &state.config.static_dir;
    if static_dir.is_dir() {
        info!("Serving static files from {}", static_dir.display());
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
