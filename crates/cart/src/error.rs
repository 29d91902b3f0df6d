//! Unified error type for callers driving the cart.
//!
//! Cart operations themselves never fail; these errors come from loading
//! configuration and the catalog, and from explicit flushes.

use shopping_cart_core::CatalogError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
