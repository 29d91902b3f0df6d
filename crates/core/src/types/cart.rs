//! Cart entry type.

use serde::{Deserialize, Serialize};

use crate::ItemId;

/// A single product line in the cart.
///
/// `quantity` is always at least 1 while the entry is held by a cart store;
/// an entry that would drop to 0 is removed instead. The JSON form is
/// `{"id": 42, "quantity": 2}`, which is also the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog item this line refers to.
    pub id: ItemId,
    /// Number of units in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// A fresh line holding a single unit.
    #[must_use]
    pub const fn new(id: ItemId) -> Self {
        Self { id, quantity: 1 }
    }

    /// A line with an explicit quantity.
    #[must_use]
    pub const fn with_quantity(id: ItemId, quantity: u32) -> Self {
        Self { id, quantity }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_one() {
        let item = CartItem::new(ItemId::new(3));
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_json_shape() {
        let item = CartItem::with_quantity(ItemId::new(42), 2);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":42,"quantity":2}"#);
    }

    #[test]
    fn test_rejects_negative_quantity() {
        let parsed = serde_json::from_str::<CartItem>(r#"{"id":1,"quantity":-1}"#);
        assert!(parsed.is_err());
    }
}
