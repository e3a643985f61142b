//! Product service - orchestrates product CRUD operations.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::{NewProduct, PageRequest, Product, SortSpec};
use crate::ports::{CoreError, ProductRepository};

/// Service for product operations.
///
/// A thin facade over the injected `ProductRepository`. The only logic it
/// owns is building page requests from raw listing parameters.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service with the given repository.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Build a page request from a page index, a page size and a raw sort
    /// specification such as `name:asc;price:desc`.
    pub fn page_request(page: u32, count: u32, sort_by: &str) -> Result<PageRequest, CoreError> {
        let spec = SortSpec::parse(sort_by)?;
        Ok(PageRequest::of(page, count, &spec)?)
    }

    /// Create a product and return it with its assigned ID.
    pub async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        let created = self.repo.insert(&product).await?;
        tracing::debug!(target: "products.service", id = created.id, "product created");
        Ok(created)
    }

    /// Get a product by ID.
    pub async fn get(&self, id: i64) -> Result<Product, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Store `product` under `id`, overwriting any existing row.
    ///
    /// No existence check is made: updating an unknown ID creates it.
    pub async fn update(&self, id: i64, product: NewProduct) -> Result<Product, CoreError> {
        let saved = self.repo.save(&product.with_id(id)).await?;
        tracing::debug!(target: "products.service", id, "product saved");
        Ok(saved)
    }

    /// Delete a product by ID.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        tracing::debug!(target: "products.service", id, "product deleted");
        Ok(())
    }

    /// List every product, unpaged, in ascending ID order.
    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// List one page of products.
    pub async fn list_page(&self, request: &PageRequest) -> Result<Vec<Product>, CoreError> {
        self.repo.list_page(request).await.map_err(CoreError::from)
    }

    /// List products priced within `[from, to]`.
    ///
    /// The page request is accepted for parity with `list_page` but is not
    /// applied: results come back in storage order (ascending ID), unpaged.
    pub async fn list_by_price_range(
        &self,
        from: Decimal,
        to: Decimal,
        request: &PageRequest,
    ) -> Result<Vec<Product>, CoreError> {
        tracing::debug!(
            target: "products.service",
            %from,
            %to,
            page = request.page(),
            size = request.size(),
            "price range listing ignores paging"
        );
        self.repo
            .list_by_price_between(from, to)
            .await
            .map_err(CoreError::from)
    }
}
