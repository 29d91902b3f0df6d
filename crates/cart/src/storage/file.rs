//! File-backed storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes land in a sibling temp file
//! first and are renamed into place, so a crash mid-write leaves the previous
//! value intact.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::{KeyValueStore, StorageError};

/// Directory of JSON files, one per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the storage root. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] if the key is empty or contains
    /// anything other than ASCII alphanumerics, `-`, `_`, or `.`, or starts
    /// with a dot.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Whether `key` can be used as a file stem without escaping the directory.
#[must_use]
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl KeyValueStore for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let io_err = |source| StorageError::Io {
            key: key.to_owned(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(io_err)?;
        std::fs::rename(&tmp, &path).map_err(io_err)?;

        tracing::trace!(key, path = %path.display(), bytes = value.len(), "Wrote storage file");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.read("shopping-cart").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        storage.write("shopping-cart", "[]").unwrap();
        storage
            .write("shopping-cart", r#"[{"id":1,"quantity":2}]"#)
            .unwrap();

        assert_eq!(
            storage.read("shopping-cart").unwrap().as_deref(),
            Some(r#"[{"id":1,"quantity":2}]"#)
        );
        assert!(dir.path().join("nested/shopping-cart.json").exists());
        assert!(!dir.path().join("nested/shopping-cart.json.tmp").exists());
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.write("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.read("k").unwrap(), None);
        // Removing again is fine.
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        for key in ["", "../escape", "a/b", ".hidden", "with space"] {
            assert!(
                matches!(storage.write(key, "x"), Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes reads fail with a non-NotFound error.
        std::fs::create_dir(dir.path().join("k.json")).unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(matches!(storage.read("k"), Err(StorageError::Io { .. })));
    }
}
