//! Core domain types, ports and services for the products service.
//!
//! This crate knows nothing about `SQLite` or HTTP. Storage adapters
//! implement [`ProductRepository`]; web adapters drive [`AppCore`].
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DEFAULT_PAGE_SIZE, NewProduct, PageRequest, PageRequestError, Product, ProductOrder,
    ProductSortField, SortDirection, SortOrder, SortSpec, SortSpecError,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{CoreError, ProductRepository, Repos, RepositoryError};
pub use services::{AppCore, ProductService};

// Re-exported so adapters name the same decimal type
pub use rust_decimal::Decimal;
