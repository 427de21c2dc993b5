//! # Application State
//!
//! Shared state for the Axum application: configuration and the product
//! store. The store sits behind an async `RwLock` so that creates are
//! serialized and lists never see a half-applied create.

use anyhow::Context;
use catalog_core::{ProductStore, ValidationMode};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Product store shared between request handlers
pub type SharedStore = Arc<RwLock<ProductStore>>;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Directory of static assets served for non-API paths
    pub static_dir: PathBuf,
    /// Create-request validation mode
    pub validation_mode: ValidationMode,
    /// Optional TOML file replacing the built-in seed products
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", p))?,
            None => defaults.port,
        };

        let validation_mode = match lookup("VALIDATION_MODE") {
            Some(mode) => mode.parse::<ValidationMode>()?,
            None => defaults.validation_mode,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            validation_mode,
            seed_file: lookup("CATALOG_SEED_FILE").map(PathBuf::from),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: "development".to_string(),
            static_dir: PathBuf::from("public"),
            validation_mode: ValidationMode::Compatible,
            seed_file: None,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product store
    pub store: SharedStore,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create the state from environment configuration
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let store = load_store(config.seed_file.as_deref())?;
        Ok(Self::with_store(store, config))
    }

    /// Create the state around an existing store
    pub fn with_store(store: ProductStore, config: AppConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }

    /// Validation mode for create requests
    pub fn validation_mode(&self) -> ValidationMode {
        self.config.validation_mode
    }
}

/// Load the seed file if one is configured, else the built-in seed
fn load_store(seed_file: Option<&Path>) -> anyhow::Result<ProductStore> {
    let Some(path) = seed_file else {
        return Ok(ProductStore::seeded());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let store = ProductStore::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded {} products from {}", store.len(), path.display());
    Ok(store)
}
