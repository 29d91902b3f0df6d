//! In-process storage backend.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{KeyValueStore, StorageError};

/// In-memory key-value store.
///
/// Clones share the same contents, so a test can hand one clone to a cart,
/// drop the cart, and build a new one from another clone to simulate an
/// application restart.
///
/// An optional quota caps the total bytes of keys and values, mirroring the
/// capacity limit of browser local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes past `limit` bytes.
    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: Rc::default(),
            quota: Some(limit),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_bytes_without(entries: &BTreeMap<String, String>, key: &str) -> usize {
        entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.borrow_mut();
        if let Some(limit) = self.quota {
            let needed = Self::used_bytes_without(&entries, key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_owned(),
                    limit,
                });
            }
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
