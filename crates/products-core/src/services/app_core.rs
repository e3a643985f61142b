//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters receive an
//! `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::ProductService;

/// The core application facade.
///
/// Constructed at the adapter's composition root (`bootstrap.rs`) with
/// concrete repository implementations.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let product = core.products().get(1).await?;
/// ```
pub struct AppCore {
    products: ProductService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            products: ProductService::new(repos.products),
        }
    }

    /// Access the product service.
    pub const fn products(&self) -> &ProductService {
        &self.products
    }
}
