//! Integration tests for the shopping cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopping-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Restarts against memory and file storage
//! - `cart_properties` - Invariants over arbitrary operation sequences
//!
//! This library holds the helpers those tests share.

use shopping_cart::{CartStore, KeyValueStore};
use shopping_cart_core::ItemId;

/// One cart operation, as a UI event would trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Increase(i32),
    Decrease(i32),
    Remove(i32),
    Open,
    Close,
}

impl CartOp {
    /// Apply this operation to `store`.
    pub fn apply<S: KeyValueStore>(self, store: &mut CartStore<S>) {
        match self {
            Self::Increase(id) => {
                store.increase_cart_quantity(ItemId::new(id));
            }
            Self::Decrease(id) => {
                store.decrease_cart_quantity(ItemId::new(id));
            }
            Self::Remove(id) => {
                store.remove_from_cart(ItemId::new(id));
            }
            Self::Open => store.open_cart(),
            Self::Close => store.close_cart(),
        }
    }
}

/// Cart lines as `(id, quantity)` pairs, for compact assertions.
#[must_use]
pub fn lines<S: KeyValueStore>(store: &CartStore<S>) -> Vec<(i32, u32)> {
    store
        .cart_items()
        .iter()
        .map(|item| (item.id.as_i32(), item.quantity))
        .collect()
}
