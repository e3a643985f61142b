//! Axum web adapter for the products service.
//!
//! Exposes the product CRUD and listing routes over HTTP, wired to
//! `products-core` services backed by `products-db`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the integration test harness
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

// Used by main.rs binary
use clap as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
