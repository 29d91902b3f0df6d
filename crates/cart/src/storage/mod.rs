//! Durable key-value storage used to persist the cart.
//!
//! The cart only needs the capability a browser's local storage offers: read
//! a text value by key and overwrite it. [`KeyValueStore`] captures exactly
//! that so the cart logic can be exercised without a real browser.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - Shared in-process map with an optional byte quota
//! - [`FileStorage`] - One JSON file per key inside a directory

mod file;
mod memory;

pub use file::FileStorage;
pub(crate) use file::is_valid_key;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend failed to read or write.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// Writing the value would exceed the backend's capacity.
    #[error("storage quota of {limit} bytes exceeded writing key {key}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Capacity in bytes.
        limit: usize,
    },

    /// The value could not be serialized to text.
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous text key-value store.
///
/// Methods take `&self`: like browser local storage, a store is a shared
/// handle and any interior mutation is the backend's business.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
