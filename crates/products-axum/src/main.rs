//! `products-server` entry point.

use std::path::PathBuf;

use clap::Parser;
use products_axum::{ServerConfig, bootstrap::DEFAULT_PORT, start_server};
use tracing_subscriber::EnvFilter;

/// HTTP server for the product catalogue.
#[derive(Debug, Parser)]
#[command(name = "products-server", version, about)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PRODUCTS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// SQLite database file (defaults to `<data dir>/data/products.db`).
    #[arg(long, env = "PRODUCTS_DATABASE_PATH")]
    database: Option<PathBuf>,

    /// Allowed CORS origin; repeat or comma-separate. Omit to allow any origin.
    #[arg(
        long = "allowed-origin",
        env = "PRODUCTS_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    allowed_origins: Vec<String>,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        let mut config = ServerConfig::with_defaults().with_port(self.port);
        if let Some(path) = self.database {
            config = config.with_database_path(path);
        }
        if !self.allowed_origins.is_empty() {
            config = config.with_allowed_origins(self.allowed_origins);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    start_server(cli.into_config()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use products_axum::CorsConfig;

    #[test]
    fn parses_comma_separated_origins() {
        let cli = Cli::try_parse_from([
            "products-server",
            "--port",
            "9100",
            "--allowed-origin",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        let config = cli.into_config();
        assert_eq!(config.port, 9100);
        assert!(config.database_path.is_none());
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o.len() == 2));
    }
}
