//! Unit tests for order relocation.

use draglist::order::{relocate, relocated};
use proptest::prelude::*;
use proptest::sample::Index;

#[test]
fn test_relocate_to_end() {
    let mut order = vec!["a", "b", "c", "d", "e"];
    assert!(relocate(&mut order, 2, 4));
    assert_eq!(order, vec!["a", "b", "d", "e", "c"]);
}

#[test]
fn test_empty_order_is_noop() {
    let mut order: Vec<u8> = Vec::new();
    assert!(!relocate(&mut order, 0, 0));
    assert!(relocated(&order, 0, 1).is_empty());
}

proptest! {
    #[test]
    fn prop_relocate_is_permutation(
        mut order in prop::collection::vec(any::<u16>(), 2..64),
        from in any::<Index>(),
        to in any::<Index>(),
    ) {
        let from = from.index(order.len());
        let to = to.index(order.len());
        let mut expected = order.clone();
        expected.sort_unstable();

        relocate(&mut order, from, to);
        order.sort_unstable();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn prop_relocate_round_trip(
        order in prop::collection::vec(any::<u16>(), 2..64),
        from in any::<Index>(),
        to in any::<Index>(),
    ) {
        let from = from.index(order.len());
        let to = to.index(order.len());

        let moved = relocated(&order, from, to);
        prop_assert_eq!(moved[to], order[from]);
        prop_assert_eq!(relocated(&moved, to, from), order);
    }

    #[test]
    fn prop_relocate_preserves_relative_order_of_others(
        order in prop::collection::vec(any::<u16>(), 2..64),
        from in any::<Index>(),
        to in any::<Index>(),
    ) {
        let from = from.index(order.len());
        let to = to.index(order.len());
        let mut others = order.clone();
        others.remove(from);

        let mut moved = relocated(&order, from, to);
        moved.remove(to);
        prop_assert_eq!(moved, others);
    }
}
