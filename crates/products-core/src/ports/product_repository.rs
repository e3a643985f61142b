//! Product repository trait definition.
//!
//! This port defines the interface for product persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::RepositoryError;
use crate::domain::{NewProduct, PageRequest, Product};

/// Repository for product persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Listing order is ascending by id unless a `PageRequest` says otherwise
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return it with its assigned ID.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Insert or overwrite the product stored under `product.id`.
    ///
    /// Never fails because the ID is unknown; a missing row is created.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;

    /// Get a product by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;

    /// Delete a product by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// List every product.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// List products whose price lies in `[from, to]`.
    async fn list_by_price_between(
        &self,
        from: Decimal,
        to: Decimal,
    ) -> Result<Vec<Product>, RepositoryError>;

    /// List one page of products in the order the request specifies.
    async fn list_page(&self, request: &PageRequest) -> Result<Vec<Product>, RepositoryError>;
}
