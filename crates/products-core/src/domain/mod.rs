//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `product` - Product types (`Product`, `NewProduct`)
//! - `sort` - Sort specification parsing and resolution
//! - `page` - Page requests for paginated listings

mod page;
mod product;
pub mod sort;

pub use page::{DEFAULT_PAGE_SIZE, PageRequest, PageRequestError};
pub use product::{NewProduct, Product};
pub use sort::{ProductOrder, ProductSortField, SortDirection, SortOrder, SortSpec, SortSpecError};
