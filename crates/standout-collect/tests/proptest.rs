//! Property-based tests for collect using proptest.

use std::collections::BTreeMap;

use proptest::prelude::*;
use standout_collect::{
    filter, find, flatten, keys, last_n, map, normalize, reduce, size, sort_by, values, Nested,
};

// ============================================================================
// Strategies
// ============================================================================

fn nested_strategy() -> impl Strategy<Value = Nested<i32>> {
    let leaf = any::<i32>().prop_map(Nested::Leaf);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Nested::List)
    })
}

fn count_leaves(node: &Nested<i32>) -> usize {
    match node {
        Nested::Leaf(_) => 1,
        Nested::List(items) => items.iter().map(count_leaves).sum(),
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Size always agrees with the length of an identity map.
    #[test]
    fn size_matches_identity_map(items in prop::collection::vec(any::<i64>(), 0..100)) {
        prop_assert_eq!(size(&items), map(&items, |n| *n).len());
    }

    /// Filter keeps exactly the matching elements, in order.
    #[test]
    fn filter_keeps_matches_in_order(
        items in prop::collection::vec(any::<i32>(), 0..100),
        threshold in any::<i32>(),
    ) {
        let kept = filter(&items, |n| *n > threshold);
        prop_assert!(kept.iter().all(|n| **n > threshold));

        let expected: Vec<&i32> = items.iter().filter(|n| **n > threshold).collect();
        prop_assert_eq!(kept, expected);
    }

    /// Filter over a mapping follows the mapping's value order.
    #[test]
    fn filter_mapping_preserves_view_order(
        map_input in prop::collection::btree_map("[a-z]{1,6}", any::<u8>(), 0..30),
    ) {
        let kept = filter(&map_input, |n| n % 2 == 0);
        let expected: Vec<&u8> = normalize(&map_input).into_iter().filter(|n| *n % 2 == 0).collect();
        prop_assert_eq!(kept, expected);
    }

    /// Find returns the lowest-index match.
    #[test]
    fn find_returns_first_match(
        items in prop::collection::vec(0u8..10, 0..50),
        target in 0u8..10,
    ) {
        let found = find(&items, |n| *n == target);
        let position = items.iter().position(|n| *n == target);

        match position {
            Some(index) => prop_assert!(std::ptr::eq(found.unwrap(), &items[index])),
            None => prop_assert!(found.is_none()),
        }
    }

    /// Normalizing a normalized sequence keeps the same elements.
    #[test]
    fn normalize_is_stable(items in prop::collection::vec(any::<i16>(), 0..50)) {
        let once = normalize(&items);
        let twice: Vec<&i16> = normalize(&once).into_iter().copied().collect();
        prop_assert_eq!(once, twice);
    }

    /// Without nested lists, both flatten modes return the input.
    #[test]
    fn flatten_is_identity_on_flat_input(items in prop::collection::vec(any::<i32>(), 0..50)) {
        let tree: Vec<Nested<i32>> = items.into_iter().map(Nested::Leaf).collect();
        let expected: Vec<&Nested<i32>> = tree.iter().collect();

        prop_assert_eq!(flatten(&tree, true), expected.clone());
        prop_assert_eq!(flatten(&tree, false), expected);
    }

    /// Deep flatten keeps every leaf and nothing else.
    #[test]
    fn deep_flatten_counts_leaves(tree in prop::collection::vec(nested_strategy(), 0..8)) {
        let flat = flatten(&tree, false);
        prop_assert!(flat.iter().all(|node| !node.is_list()));
        prop_assert_eq!(flat.len(), tree.iter().map(count_leaves).sum::<usize>());
    }

    /// Reduce without a seed equals a seeded reduce from the first element.
    #[test]
    fn reduce_seeds_from_first(items in prop::collection::vec(-1000i64..1000, 1..50)) {
        let unseeded = reduce(&items, |acc, n, _| acc + n, None);
        let seeded = reduce(&items[1..], |acc, n, _| acc + n, Some(items[0]));
        prop_assert_eq!(unseeded, seeded);
        prop_assert_eq!(unseeded, Some(items.iter().sum::<i64>()));
    }

    /// Sorting yields non-decreasing keys and a permutation of the input.
    #[test]
    fn sort_by_orders_keys(items in prop::collection::vec(any::<i32>(), 0..100)) {
        let sorted = sort_by(&items, |n| *n);
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(sorted.into_iter().copied().collect::<Vec<_>>(), expected);
    }

    /// Keys and values line up entry by entry.
    #[test]
    fn keys_index_values(
        map_input in prop::collection::btree_map("[a-z]{1,6}", any::<i32>(), 0..30),
    ) {
        let ks = keys(&map_input);
        let vs = values(&map_input);
        prop_assert_eq!(ks.len(), vs.len());
        for (key, value) in ks.into_iter().zip(vs) {
            prop_assert_eq!(&map_input[key], value);
        }
    }

    /// Asking for more trailing elements than exist returns everything.
    #[test]
    fn last_n_saturates(
        items in prop::collection::vec(any::<u8>(), 0..30),
        extra in 0usize..10,
    ) {
        prop_assert_eq!(last_n(&items, items.len() + extra), items.as_slice());
    }
}

#[test]
fn mapping_size_counts_entries() {
    let map_input: BTreeMap<String, ()> = (0..5).map(|i| (i.to_string(), ())).collect();
    assert_eq!(size(&map_input), 5);
}
