use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve or prepare the data directory.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("No platform data directory; set PRODUCTS_DATA_DIR")]
    NoDataDir,

    #[error("Cannot create {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}
