//! Read/write-through bridge between a typed value and a storage key.
//!
//! On construction the value is read from its key and parsed from JSON. A
//! missing key, an unreadable store, or text that does not parse all fall
//! back to a caller-supplied default; none of these are surfaced. Every
//! change is serialized and written back to the same key.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::storage::{KeyValueStore, StorageError};

/// A typed value mirrored to one key of a [`KeyValueStore`].
#[derive(Debug)]
pub struct PersistentValue<T, S> {
    storage: S,
    key: String,
    value: T,
}

impl<T, S> PersistentValue<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    /// Load the value stored under `key`, or `default()` if there is none
    /// usable.
    #[instrument(skip(storage, default))]
    pub fn load(storage: S, key: &str, default: impl FnOnce() -> T) -> Self {
        let value = match storage.read(key) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(error = %e, "Stored value does not parse, using default");
                    default()
                }
            },
            Ok(None) => {
                tracing::debug!("No stored value, using default");
                default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read storage, using default");
                default()
            }
        };

        Self {
            storage,
            key: key.to_owned(),
            value,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Key the value is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the value and write it through.
    ///
    /// The in-memory value is replaced even if the write fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or stored.
    pub fn set(&mut self, value: T) -> Result<(), StorageError> {
        self.value = value;
        self.flush()
    }

    /// Change the value in place. `change` returns whether it modified
    /// anything; the value is written only when it did.
    ///
    /// Returns whether a change was made. The in-memory change stands even
    /// if the write fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or stored.
    pub fn update(&mut self, change: impl FnOnce(&mut T) -> bool) -> Result<bool, StorageError> {
        if !change(&mut self.value) {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Write the current value to storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or stored.
    pub fn flush(&self) -> Result<(), StorageError> {
        let text = serde_json::to_string(&self.value)?;
        self.storage.write(&self.key, &text)
    }
}
