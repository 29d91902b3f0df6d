//! The cart state container.
//!
//! [`CartStore`] owns the list of cart entries and the drawer-visibility flag
//! and is the only place either changes. Entries are kept in insertion order,
//! hold at most one line per item, and never hold a zero quantity.
//!
//! Every mutation that changes the entry list is written through a
//! [`PersistentValue`] before it returns. A failed write never fails the
//! mutation: the new state stays in memory, a warning is logged, and the store
//! is marked dirty until a later write succeeds (see [`CartStore::flush`]).

use shopping_cart_core::{CartItem, ItemId};

use crate::persisted::PersistentValue;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key the cart is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "shopping-cart";

/// Shopping cart state: entries plus the drawer-visibility flag.
#[derive(Debug)]
pub struct CartStore<S> {
    items: PersistentValue<Vec<CartItem>, S>,
    is_open: bool,
    dirty: bool,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart persisted under [`DEFAULT_STORAGE_KEY`].
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Load the cart persisted under `key`.
    ///
    /// Starts empty if nothing usable is stored. Stored entries with a zero
    /// quantity are dropped and repeated IDs are merged into the first line.
    pub fn load_with_key(storage: S, key: &str) -> Self {
        let items = PersistentValue::load(storage, key, Vec::new);
        let mut store = Self {
            items,
            is_open: false,
            dirty: false,
        };

        match store.items.update(normalize) {
            Ok(true) => tracing::warn!(key, "Stored cart violated entry rules and was repaired"),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to persist repaired cart");
                store.dirty = true;
            }
        }

        tracing::debug!(
            key,
            lines = store.cart_items().len(),
            quantity = store.cart_quantity(),
            "Cart loaded"
        );
        store
    }

    /// Quantity of `id` in the cart, or 0 if it is not there.
    #[must_use]
    pub fn get_item_quantity(&self, id: ItemId) -> u32 {
        self.items
            .get()
            .iter()
            .find(|item| item.id == id)
            .map_or(0, |item| item.quantity)
    }

    /// Add one unit of `id`, appending a new line if it is not in the cart.
    ///
    /// Returns `true`; the cart always changes.
    pub fn increase_cart_quantity(&mut self, id: ItemId) -> bool {
        self.mutate("increase", id, |items| {
            match items.iter_mut().find(|item| item.id == id) {
                Some(item) => item.quantity = item.quantity.saturating_add(1),
                None => items.push(CartItem::new(id)),
            }
            true
        })
    }

    /// Remove one unit of `id`, dropping the line when its last unit goes.
    ///
    /// Does nothing if `id` is not in the cart. Returns whether the cart
    /// changed.
    pub fn decrease_cart_quantity(&mut self, id: ItemId) -> bool {
        self.mutate("decrease", id, |items| {
            let Some(item) = items.iter_mut().find(|item| item.id == id) else {
                return false;
            };
            if item.quantity > 1 {
                item.quantity -= 1;
            } else {
                items.retain(|item| item.id != id);
            }
            true
        })
    }

    /// Remove the line for `id` whatever its quantity.
    ///
    /// Does nothing if `id` is not in the cart. Returns whether the cart
    /// changed.
    pub fn remove_from_cart(&mut self, id: ItemId) -> bool {
        self.mutate("remove", id, |items| {
            let before = items.len();
            items.retain(|item| item.id != id);
            items.len() != before
        })
    }

    /// Total units across all lines.
    ///
    /// Computed from the entry list on every call.
    #[must_use]
    pub fn cart_quantity(&self) -> u64 {
        self.items
            .get()
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart_items(&self) -> &[CartItem] {
        self.items.get()
    }

    /// Show the cart drawer.
    pub const fn open_cart(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart drawer.
    pub const fn close_cart(&mut self) {
        self.is_open = false;
    }

    /// Whether the cart drawer is shown. Not persisted.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the in-memory cart is newer than what storage holds.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Key the cart is persisted under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.items.key()
    }

    /// Write the current cart to storage.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write fails; the store stays dirty.
    pub fn flush(&mut self) -> Result<(), StorageError> {
        self.items.flush()?;
        self.dirty = false;
        Ok(())
    }

    fn mutate(
        &mut self,
        op: &'static str,
        id: ItemId,
        change: impl FnOnce(&mut Vec<CartItem>) -> bool,
    ) -> bool {
        let changed = match self.items.update(change) {
            Ok(changed) => {
                if changed {
                    self.dirty = false;
                }
                changed
            }
            Err(e) => {
                tracing::warn!(
                    op,
                    item_id = %id,
                    key = self.items.key(),
                    error = %e,
                    "Failed to persist cart, keeping in-memory state"
                );
                self.dirty = true;
                true
            }
        };

        tracing::debug!(
            op,
            item_id = %id,
            quantity = self.get_item_quantity(id),
            changed,
            "Cart updated"
        );
        changed
    }
}

/// Drop zero-quantity lines and merge repeated IDs into their first line.
fn normalize(items: &mut Vec<CartItem>) -> bool {
    let original_len = items.len();
    let mut merged: Vec<CartItem> = Vec::with_capacity(original_len);
    let mut changed = false;

    for item in items.drain(..) {
        if item.quantity == 0 {
            changed = true;
            continue;
        }
        if let Some(existing) = merged.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            changed = true;
        } else {
            merged.push(item);
        }
    }

    *items = merged;
    changed
}
