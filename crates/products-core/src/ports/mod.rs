//! Ports: the storage interface the core depends on, and its error types.
//!
//! Signatures use domain types only; `sqlx` never appears here.

pub mod product_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::{PageRequestError, SortSpecError};

pub use product_repository::ProductRepository;

/// Repository handles passed to [`AppCore`](crate::AppCore) at startup.
#[derive(Clone)]
pub struct Repos {
    pub products: Arc<dyn ProductRepository>,
}

impl Repos {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

/// Failures reported by a [`ProductRepository`].
///
/// Messages are plain strings so that no storage driver type leaks into
/// the core.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A row with the same key is already stored.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The backend failed to run the query.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded (e.g. a malformed price).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backend rejected the row (NOT NULL, CHECK, ...).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Errors returned by core services.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Malformed or unresolvable `sortBy` value.
    #[error(transparent)]
    Sort(#[from] SortSpecError),

    /// Listing parameters out of range.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PageRequestError> for CoreError {
    fn from(err: PageRequestError) -> Self {
        match err {
            PageRequestError::Sort(sort) => Self::Sort(sort),
            other @ PageRequestError::ZeroSize => Self::Validation(other.to_string()),
        }
    }
}
