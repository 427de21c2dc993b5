//! # catalog-rs
//!
//! In-memory products API.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export PORT=3000
//! export VALIDATION_MODE=compatible
//! export STATIC_DIR=public
//!
//! # Run the server
//! catalog-server
//! ```

use catalog_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Validation mode: {}", state.config.validation_mode);
    info!("Products loaded: {}", state.store.read().await.len());

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server is running on http://{}", addr);

    if !is_prod {
        info!("Products: GET/POST http://{}/api/products", addr);
        info!("Health: GET http://{}/health", addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  catalog-rs
  ━━━━━━━━━━━━━━━━━━━━━━━
  In-memory products API
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
