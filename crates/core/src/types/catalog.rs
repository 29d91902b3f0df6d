//! Read-only catalog of purchasable items.
//!
//! The catalog is supplied externally as a JSON array:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Book", "price": 10.99, "imgUrl": "/imgs/book.jpg" }
//! ]
//! ```
//!
//! The cart never validates its entries against the catalog; the catalog is
//! only consulted when building display views.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ItemId;

/// Errors that can occur when loading a [`Catalog`].
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog text is not a valid item list.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two catalog entries share an ID.
    #[error("duplicate catalog item id {0}")]
    DuplicateId(ItemId),
}

/// A purchasable item as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreItem {
    /// Catalog identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Image reference for listings.
    pub img_url: String,
}

/// Ordered, read-only list of store items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<StoreItem>,
}

impl Catalog {
    /// Build a catalog from already parsed items.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two items share an ID.
    pub fn new(items: Vec<StoreItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog from its JSON text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON item array or contains
    /// duplicate IDs.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<StoreItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&StoreItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Iterate items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &StoreItem> {
        self.items.iter()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ITEMS: &str = r#"[
        { "id": 1, "name": "Book", "price": 10.99, "imgUrl": "/imgs/book.jpg" },
        { "id": 2, "name": "Computer", "price": "1199", "imgUrl": "/imgs/computer.jpg" }
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(ITEMS).unwrap();
        assert_eq!(catalog.len(), 2);

        let book = catalog.get(ItemId::new(1)).unwrap();
        assert_eq!(book.name, "Book");
        assert_eq!(book.price, Decimal::new(1099, 2));
        assert_eq!(book.img_url, "/imgs/book.jpg");

        let computer = catalog.get(ItemId::new(2)).unwrap();
        assert_eq!(computer.price, Decimal::new(1199, 0));
    }

    #[test]
    fn test_get_missing() {
        let catalog = Catalog::from_json(ITEMS).unwrap();
        assert!(catalog.get(ItemId::new(99)).is_none());
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::from_json(ITEMS).unwrap();
        let ids: Vec<i32> = catalog.iter().map(|item| item.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_duplicate_id() {
        let json = r#"[
            { "id": 1, "name": "A", "price": 1, "imgUrl": "a" },
            { "id": 1, "name": "B", "price": 2, "imgUrl": "b" }
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(id)) if id == ItemId::new(1)
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load(Path::new("/definitely/not/here/items.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
