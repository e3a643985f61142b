//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use products_core::{AppCore, Repos};

use crate::repositories::SqliteProductRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteProductRepository::new(pool)))
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build an `AppCore` backed by this test database.
    pub fn app_core(&self) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone())
    }
}
