//! # catalog-api
//!
//! HTTP API layer for catalog-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for listing and creating products
//! - Static asset fallback for a bundled front-end
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/products` | List products |
//! | POST | `/api/products` | Create product |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, SharedStore};
