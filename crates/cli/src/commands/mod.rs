//! Command implementations.
//!
//! Each command loads a [`Session`] (config, catalog, and the file-backed
//! cart), does its work, and writes human-readable output to `out`.

pub mod cart;
pub mod store;

use shopping_cart::{CartConfig, CartStore, FileStorage};
use shopping_cart_core::{Catalog, CurrencyCode};

/// Everything a command needs, loaded once per invocation.
pub struct Session {
    pub catalog: Catalog,
    pub currency: CurrencyCode,
    pub store: CartStore<FileStorage>,
}

impl Session {
    /// Load the catalog and the persisted cart described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or parsed. A missing or
    /// unreadable cart is not an error; the cart starts empty.
    pub fn open(config: &CartConfig) -> shopping_cart::Result<Self> {
        let catalog = Catalog::load(&config.catalog_path)?;
        tracing::debug!(
            path = %config.catalog_path.display(),
            items = catalog.len(),
            "Catalog loaded"
        );

        let storage = FileStorage::new(&config.storage_dir);
        let store = CartStore::load_with_key(storage, &config.storage_key);

        Ok(Self {
            catalog,
            currency: config.currency,
            store,
        })
    }

    /// Surface a failed write from the last mutation.
    ///
    /// Mutations keep going when storage rejects a write; a one-shot command
    /// retries once and reports the failure instead of exiting as if the
    /// change had been saved.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the retry also fails.
    pub fn persist(&mut self) -> shopping_cart::Result<()> {
        if self.store.is_dirty() {
            self.store.flush()?;
        }
        Ok(())
    }
}
