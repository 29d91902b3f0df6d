//! Property tests: cart invariants hold for any sequence of operations.

use std::collections::HashSet;

use proptest::prelude::*;
use shopping_cart::{CartStore, MemoryStorage};
use shopping_cart_core::ItemId;
use shopping_cart_integration_tests::{CartOp, lines};

/// A small ID range so operations frequently hit the same lines.
fn arb_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        4 => (0..6_i32).prop_map(CartOp::Increase),
        3 => (0..6_i32).prop_map(CartOp::Decrease),
        1 => (0..6_i32).prop_map(CartOp::Remove),
        1 => Just(CartOp::Open),
        1 => Just(CartOp::Close),
    ]
}

proptest! {
    /// The total always equals the sum of the lines, no line is empty, and
    /// no ID appears twice.
    #[test]
    fn entry_rules_hold_after_every_op(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut store = CartStore::load(MemoryStorage::new());

        for op in ops {
            op.apply(&mut store);

            let sum: u64 = store.cart_items().iter().map(|item| u64::from(item.quantity)).sum();
            prop_assert_eq!(store.cart_quantity(), sum);
            prop_assert!(store.cart_items().iter().all(|item| item.quantity >= 1));

            let ids: HashSet<ItemId> = store.cart_items().iter().map(|item| item.id).collect();
            prop_assert_eq!(ids.len(), store.cart_items().len());
        }
    }

    /// Reloading from storage reproduces the same lines in the same order.
    #[test]
    fn restart_reproduces_lines(ops in prop::collection::vec(arb_op(), 0..64)) {
        let storage = MemoryStorage::new();
        let mut store = CartStore::load(storage.clone());
        for op in ops {
            op.apply(&mut store);
        }

        let reloaded = CartStore::load(storage);
        prop_assert_eq!(lines(&reloaded), lines(&store));
    }

    /// n increases on a fresh cart give one line of quantity n.
    #[test]
    fn repeated_increase_makes_one_line(id in any::<i32>(), n in 1_u32..50) {
        let mut store = CartStore::load(MemoryStorage::new());
        for _ in 0..n {
            store.increase_cart_quantity(ItemId::new(id));
        }
        prop_assert_eq!(lines(&store), vec![(id, n)]);
    }

    /// Remove always leaves a zero quantity behind, whatever came before.
    #[test]
    fn remove_zeroes_quantity(
        ops in prop::collection::vec(arb_op(), 0..32),
        id in 0..6_i32,
    ) {
        let mut store = CartStore::load(MemoryStorage::new());
        for op in ops {
            op.apply(&mut store);
        }
        store.remove_from_cart(ItemId::new(id));
        prop_assert_eq!(store.get_item_quantity(ItemId::new(id)), 0);
    }

    /// Decrease changes one line by at most one unit and leaves the rest alone.
    #[test]
    fn decrease_touches_one_line(
        ops in prop::collection::vec(arb_op(), 0..32),
        id in 0..6_i32,
    ) {
        let mut store = CartStore::load(MemoryStorage::new());
        for op in ops {
            op.apply(&mut store);
        }
        let before = lines(&store);
        let before_total = store.cart_quantity();
        let had = store.get_item_quantity(ItemId::new(id));

        store.decrease_cart_quantity(ItemId::new(id));

        prop_assert_eq!(store.get_item_quantity(ItemId::new(id)), had.saturating_sub(1));
        prop_assert_eq!(store.cart_quantity(), before_total - u64::from(had.min(1)));
        let others_before: Vec<_> = before.into_iter().filter(|(i, _)| *i != id).collect();
        let others_after: Vec<_> = lines(&store).into_iter().filter(|(i, _)| *i != id).collect();
        prop_assert_eq!(others_before, others_after);
    }
}
