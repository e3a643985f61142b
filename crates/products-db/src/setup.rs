//! Database setup and initialization.
//!
//! Entry points call `setup_database()` with the resolved database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

use crate::repositories::row_mappers::{price_from_text, price_sort_key};

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// Creates the parent directory and the database file when missing, then
/// creates all tables and indexes.
///
/// # Example
///
/// ```rust,no_run
/// use products_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/products/products.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;

    tracing::debug!(path = %db_path.display(), "database schema ready");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool holds exactly one connection that never expires: every
/// `:memory:` connection is a separate database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // `price` is the exact decimal text; `price_key` is its order-preserving
    // encoding used for sorting and range filters
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price TEXT NOT NULL,
            price_key TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Migration: add price_key to databases created before it existed
    let _ = sqlx::query("ALTER TABLE products ADD COLUMN price_key TEXT NOT NULL DEFAULT ''")
        .execute(pool)
        .await;
    // Ignore error if column already exists

    backfill_price_keys(pool).await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_name ON products(name)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_price_key ON products(price_key)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Fill in `price_key` for rows written before the column existed.
async fn backfill_price_keys(pool: &SqlitePool) -> Result<()> {
    let rows: Vec<(i64, String)> =
        sqlx::query_as("SELECT id, price FROM products WHERE price_key = ''")
            .fetch_all(pool)
            .await?;

    for (id, raw) in &rows {
        let price = price_from_text(raw)?;
        sqlx::query("UPDATE products SET price_key = ? WHERE id = ?")
            .bind(price_sort_key(price))
            .bind(*id)
            .execute(pool)
            .await?;
    }

    if !rows.is_empty() {
        tracing::info!(rows = rows.len(), "backfilled product price keys");
    }

    Ok(())
}
