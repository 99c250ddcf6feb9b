//! File-backed storage for Rotafin.
//!
//! This crate provides:
//! - [`JsonDirStore`], one JSON document per collection key
//! - [`connect`], which opens (and creates) the data directory

mod dir;

pub use dir::JsonDirStore;

use std::path::Path;

use rotafin_core::store::StoreError;

/// Opens the store rooted at `data_dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns `StoreError::Configuration` if the path exists but is not a
/// directory or cannot be created.
pub fn connect(data_dir: impl AsRef<Path>) -> Result<JsonDirStore, StoreError> {
    JsonDirStore::open(data_dir)
}
