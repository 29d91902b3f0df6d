//! Shared cart handle passed to UI components.
//!
//! Components receive a [`CartHandle`] when they are constructed instead of
//! reaching for a global. Clones point at the same cart. Components that
//! render derived values register a listener and are called with a fresh
//! [`CartSnapshot`] whenever the cart changes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use shopping_cart_core::{CartItem, ItemId};

use crate::storage::{KeyValueStore, StorageError};
use crate::store::CartStore;

/// Identifies a registered change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Read-only copy of the cart state handed to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Cart lines in insertion order.
    pub items: Vec<CartItem>,
    /// Total units across all lines.
    pub cart_quantity: u64,
    /// Whether the drawer is shown.
    pub is_open: bool,
}

type Listener = Rc<dyn Fn(&CartSnapshot)>;

struct HandleInner<S> {
    store: RefCell<CartStore<S>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// Cloneable handle to one cart.
///
/// Single-threaded by construction (`Rc`), matching the event-driven UI it
/// serves.
pub struct CartHandle<S> {
    inner: Rc<HandleInner<S>>,
}

impl<S> Clone for CartHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> fmt::Debug for CartHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartHandle")
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> CartHandle<S> {
    /// Wrap a loaded store.
    #[must_use]
    pub fn new(store: CartStore<S>) -> Self {
        Self {
            inner: Rc::new(HandleInner {
                store: RefCell::new(store),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Load the cart from `storage` under the default key and wrap it.
    #[must_use]
    pub fn load(storage: S) -> Self {
        Self::new(CartStore::load(storage))
    }

    /// Quantity of `id` in the cart, or 0.
    #[must_use]
    pub fn get_item_quantity(&self, id: ItemId) -> u32 {
        self.inner.store.borrow().get_item_quantity(id)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn cart_quantity(&self) -> u64 {
        self.inner.store.borrow().cart_quantity()
    }

    /// Copy of the cart lines.
    #[must_use]
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.inner.store.borrow().cart_items().to_vec()
    }

    /// Whether the drawer is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.store.borrow().is_open()
    }

    /// Whether the last write to storage failed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.inner.store.borrow().is_dirty()
    }

    /// Snapshot of the whole cart.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        let store = self.inner.store.borrow();
        CartSnapshot {
            items: store.cart_items().to_vec(),
            cart_quantity: store.cart_quantity(),
            is_open: store.is_open(),
        }
    }

    /// Add one unit of `id`.
    pub fn increase_cart_quantity(&self, id: ItemId) {
        self.apply(|store| store.increase_cart_quantity(id));
    }

    /// Remove one unit of `id`; no-op if it is absent.
    pub fn decrease_cart_quantity(&self, id: ItemId) {
        self.apply(|store| store.decrease_cart_quantity(id));
    }

    /// Remove the line for `id`; no-op if it is absent.
    pub fn remove_from_cart(&self, id: ItemId) {
        self.apply(|store| store.remove_from_cart(id));
    }

    /// Show the drawer.
    pub fn open_cart(&self) {
        self.apply(|store| {
            let was_open = store.is_open();
            store.open_cart();
            !was_open
        });
    }

    /// Hide the drawer.
    pub fn close_cart(&self) {
        self.apply(|store| {
            let was_open = store.is_open();
            store.close_cart();
            was_open
        });
    }

    /// Retry writing the cart to storage.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write fails again.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.inner.store.borrow_mut().flush()
    }

    /// Call `listener` after every change to the cart.
    pub fn subscribe(&self, listener: impl Fn(&CartSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        let listener: Listener = Rc::new(listener);
        self.inner.listeners.borrow_mut().push((id, listener));
        id
    }

    /// Stop calling the listener registered as `id`. Returns whether it was
    /// registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    fn apply(&self, change: impl FnOnce(&mut CartStore<S>) -> bool) {
        let changed = change(&mut *self.inner.store.borrow_mut());
        if changed {
            self.notify();
        }
    }

    fn notify(&self) {
        // Listeners may read through the handle or (un)subscribe, so neither
        // borrow can be held while they run.
        let snapshot = self.snapshot();
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn recorder<S: KeyValueStore>(
        handle: &CartHandle<S>,
    ) -> (SubscriptionId, Rc<RefCell<Vec<u64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = handle.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.cart_quantity));
        (id, seen)
    }

    #[test]
    fn test_clones_share_state() {
        let cart = CartHandle::load(MemoryStorage::new());
        let other = cart.clone();

        cart.increase_cart_quantity(ItemId::new(1));
        other.increase_cart_quantity(ItemId::new(1));

        assert_eq!(cart.get_item_quantity(ItemId::new(1)), 2);
        assert_eq!(other.cart_quantity(), 2);
    }

    #[test]
    fn test_listeners_see_each_change() {
        let cart = CartHandle::load(MemoryStorage::new());
        let (_, seen) = recorder(&cart);

        cart.increase_cart_quantity(ItemId::new(42));
        cart.increase_cart_quantity(ItemId::new(42));
        cart.increase_cart_quantity(ItemId::new(7));
        cart.decrease_cart_quantity(ItemId::new(42));

        assert_eq!(*seen.borrow(), vec![1, 2, 3, 2]);
    }

    #[test]
    fn test_noops_do_not_notify() {
        let cart = CartHandle::load(MemoryStorage::new());
        let (_, seen) = recorder(&cart);

        cart.decrease_cart_quantity(ItemId::new(99));
        cart.remove_from_cart(ItemId::new(99));
        cart.close_cart();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_drawer_flag_notifies_on_flip() {
        let cart = CartHandle::load(MemoryStorage::new());
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        cart.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.is_open));

        cart.open_cart();
        cart.open_cart();
        cart.close_cart();

        assert_eq!(*opened.borrow(), vec![true, false]);
    }

    #[test]
    fn test_unsubscribe() {
        let cart = CartHandle::load(MemoryStorage::new());
        let (id, seen) = recorder(&cart);

        cart.increase_cart_quantity(ItemId::new(1));
        assert!(cart.unsubscribe(id));
        assert!(!cart.unsubscribe(id));
        cart.increase_cart_quantity(ItemId::new(1));

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_listener_can_read_through_handle() {
        let cart = CartHandle::load(MemoryStorage::new());
        let reader = cart.clone();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        cart.subscribe(move |_| sink.set(reader.get_item_quantity(ItemId::new(5))));

        cart.increase_cart_quantity(ItemId::new(5));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_snapshot() {
        let cart = CartHandle::load(MemoryStorage::new());
        cart.increase_cart_quantity(ItemId::new(2));
        cart.open_cart();

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.items, vec![CartItem::new(ItemId::new(2))]);
        assert_eq!(snapshot.cart_quantity, 1);
        assert!(snapshot.is_open);
    }
}
