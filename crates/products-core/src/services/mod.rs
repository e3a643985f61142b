//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod product_service;

pub use app_core::AppCore;
pub use product_service::ProductService;
