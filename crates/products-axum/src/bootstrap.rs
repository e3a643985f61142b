//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use products_core::AppCore;
use products_core::paths::database_path;
use products_db::{CoreFactory, setup_database};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Database file. `None` resolves to the default under the data root.
    pub database_path: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default port, database location and CORS.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Use an explicit database file.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap an already composed `AppCore`.
    pub const fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_path = match &config.database_path {
        Some(path) => path.clone(),
        None => database_path()?,
    };

    tracing::info!(
        target: "products.paths",
        database_path = %db_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    let core = Arc::new(CoreFactory::build_app_core(pool));

    Ok(AxumContext::new(core))
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("products server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
