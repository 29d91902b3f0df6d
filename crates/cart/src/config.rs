//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_DIR` - Directory for persisted state (default: .cart)
//! - `CART_STORAGE_KEY` - Key the cart is stored under (default: shopping-cart)
//! - `CART_CATALOG_PATH` - Catalog JSON file (default: data/items.json)
//! - `CART_CURRENCY` - ISO 4217 display currency (default: USD)
//! - `CART_LOG_FORMAT` - `text` or `json` (default: text)

use std::path::PathBuf;

use shopping_cart_core::CurrencyCode;
use thiserror::Error;

use crate::storage::is_valid_key;
use crate::store::DEFAULT_STORAGE_KEY;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Cart application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory holding persisted cart files
    pub storage_dir: PathBuf,
    /// Storage key for the cart entry list
    pub storage_key: String,
    /// Path of the read-only catalog
    pub catalog_path: PathBuf,
    /// Currency prices are displayed in
    pub currency: CurrencyCode,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".cart"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            catalog_path: PathBuf::from("data/items.json"),
            currency: CurrencyCode::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_key = lookup("CART_STORAGE_KEY").unwrap_or(defaults.storage_key);
        if !is_valid_key(&storage_key) {
            return Err(ConfigError::InvalidEnvVar(
                "CART_STORAGE_KEY".to_string(),
                "must be non-empty ASCII letters, digits, '-', '_' or '.', not starting with '.'"
                    .to_string(),
            ));
        }

        let currency = match lookup("CART_CURRENCY") {
            Some(code) => code.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("CART_CURRENCY".to_string(), e.to_string())
            })?,
            None => defaults.currency,
        };

        let log_format = match lookup("CART_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "CART_LOG_FORMAT".to_string(),
                    format!("expected 'text' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            storage_dir: lookup("CART_STORAGE_DIR").map_or(defaults.storage_dir, PathBuf::from),
            storage_key,
            catalog_path: lookup("CART_CATALOG_PATH").map_or(defaults.catalog_path, PathBuf::from),
            currency,
            log_format,
        })
    }
}
