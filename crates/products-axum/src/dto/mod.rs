//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the wire format and decouple the core domain types
//! from their external representation.

pub mod product;
pub mod query;

pub use product::{ProductRequestDto, ProductResponseDto};
pub use query::{ListProductsQuery, PriceRangeQuery};
