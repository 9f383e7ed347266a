//! Flat-file persistence for the three JSON collections.
//!
//! # Data files
//!
//! - `customers.json` - Registered customers
//! - `products.json` - The product catalogue
//! - `orders.json` - Orders, with invoice and shipment nested
//!
//! Each file is a single JSON array rewritten wholesale on every mutating
//! operation. Every repository call independently opens, reads or writes,
//! and releases its file; nothing is held across operations and there is no
//! isolation between concurrent writers (single-user scope).
//!
//! Reads of a missing, empty, or corrupt file degrade to an empty
//! collection rather than failing: the store always starts usable.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

pub mod customers;
pub mod orders;
pub mod products;

pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;

/// Persistence errors.
///
/// Only the write side surfaces errors; unreadable data is recovered locally
/// by treating the collection as empty.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing file could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One JSON-array collection at a fixed path.
///
/// The typed repositories wrap this with their key semantics; this type only
/// knows how to load and rewrite the whole array.
#[derive(Debug, Clone)]
pub(crate) struct JsonCollection<T> {
    path: PathBuf,
    _marker: std::marker::PhantomData<T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Load every record.
    ///
    /// A missing or empty file yields an empty vector. A malformed file is
    /// logged and also yields an empty vector; the next write replaces it.
    pub(crate) fn load(&self) -> Vec<T> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };
        if content.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt collection, treating as empty");
                Vec::new()
            }
        }
    }

    /// Rewrite the whole collection.
    ///
    /// Creates the parent directory on first write. Indentation is cosmetic.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if serialization or the file write fails.
    pub(crate) fn store(&self, records: &[T]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
