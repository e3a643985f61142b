//! Product domain types.
//!
//! These types represent products in the system, independent of any
//! infrastructure concerns (database, HTTP, etc.).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product that exists in the system with a database ID.
///
/// Use `NewProduct` for products that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Database ID of the product (always present for persisted products).
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unit price. Non-negative by convention; not enforced.
    pub price: Decimal,
}

/// A product to be inserted into the system (no ID yet).
///
/// After insertion, the repository returns a `Product` with the assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Attach an identifier, producing an entity suitable for an upsert.
    ///
    /// Whatever identity the caller supplied elsewhere is discarded; `id` wins.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
