//! Path utilities for the products data directory and database file.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - OS-specific logic is kept private in `platform`

mod database;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use database::database_path;
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
