//! Shopping cart library.
//!
//! Holds the shopper's cart selection, persists it through a pluggable
//! key-value store, and exposes the read/mutate API that UI components use.
//!
//! # Architecture
//!
//! - [`storage`] - `KeyValueStore` trait with in-memory and file backends
//! - [`persisted`] - Read/write-through bridge between a typed value and a store key
//! - [`store`] - The cart state container and its mutation rules
//! - [`handle`] - Cloneable handle passed to components, with change subscriptions
//! - [`view`] - Display models joining cart entries with the catalog
//!
//! Everything runs on a single thread. [`handle::CartHandle`] is `!Send` on
//! purpose; each UI tree owns its own cart.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod handle;
pub mod persisted;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{CartConfig, ConfigError, LogFormat};
pub use error::{CartError, Result};
pub use handle::{CartHandle, CartSnapshot, SubscriptionId};
pub use persisted::PersistentValue;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use store::{CartStore, DEFAULT_STORAGE_KEY};
pub use view::{CartLineView, CartView, StoreItemView, StoreView};
