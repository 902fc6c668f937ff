#![cfg(test)]

use std::cmp::Ordering;
use std::collections::BTreeMap;

use proptest::prelude::*;

use super::*;
use crate::collections::order::{Compare, Reverse, by_key};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

/// Checks the AVL invariants of every node and returns the height of the branch.
fn check_balanced<K, V>(branch: &Branch<K, V>) -> usize {
    match &branch.0 {
        Some(node) => {
            let left = check_balanced(&node.left);
            let right = check_balanced(&node.right);
            assert!(left.abs_diff(right) <= 1, "Subtrees should differ in height by at most 1.");
            assert_eq!(node.height, 1 + left.max(right), "Stored heights should be accurate.");
            node.height
        },
        None => 0,
    }
}

#[test]
fn test_lookup_does_not_insert() {
    let mut ages = TreeMap::new();
    ages.insert(String::from("Bill"), 38);
    ages.insert(String::from("Brian"), 40);

    assert_eq!(ages.get("Jen"), None, "A missing key should be reported as not found.");
    assert!(!ages.contains_key("Jen"));
    assert_eq!(ages.len(), 2, "Looking up a missing key shouldn't change the size.");

    assert_panics!({
        let ages: TreeMap<String, i32> = TreeMap::new();
        let _age = ages["Jen"];
    }, "Indexing with a missing key should panic rather than insert.");

    assert_eq!(*ages.get_or_insert_default(String::from("Jen")), 0);
    assert_eq!(ages.len(), 3, "Opting in to insertion should add the entry.");

    *ages.get_or_insert_with(String::from("Bill"), || unreachable!()) += 1;
    assert_eq!(ages["Bill"], 39, "Existing entries should be returned without calling default.");
    assert_eq!(ages.len(), 3);
}

#[test]
fn test_ascending_iteration() {
    let mut map = TreeMap::new();
    for key in [50, 20, 80, 10, 30, 70, 90, 25, 5, 1] {
        assert_eq!(map.insert(key, key * 2), None);
    }
    assert_eq!(map.insert(30, 0), Some(60), "Replacing should return the previous value.");
    assert_eq!(map.len(), 10);

    assert_eq!(
        map.keys().copied().collect::<Vec<_>>(),
        [1, 5, 10, 20, 25, 30, 50, 70, 80, 90]
    );
    assert_eq!(map.first_entry(), Some((&1, &2)));
    assert_eq!(map.last_entry(), Some((&90, &180)));
    check_balanced(&map.root);

    let mut iter = map.into_iter();
    assert_eq!(iter.len(), 10);
    assert_eq!(iter.next(), Some((1, 2)));
    assert_eq!(iter.next_back(), Some((90, 180)));
    assert_eq!(iter.map(|(k, _)| k).collect::<Vec<_>>(), [5, 10, 20, 25, 30, 50, 70, 80]);
}

#[test]
fn test_remove() {
    let mut map: TreeMap<u32, u32> = (0..100).map(|i| (i, i)).collect();
    check_balanced(&map.root);

    for i in (0..100).step_by(3) {
        assert_eq!(map.remove(&i), Some(i));
        check_balanced(&map.root);
    }
    assert_eq!(map.remove(&0), None, "Removing twice should return None.");
    assert_eq!(map.len(), 66);
    assert!(map.keys().all(|k| k % 3 != 0));

    assert_eq!(map.pop_first(), Some((1, 1)));
    assert_eq!(map.pop_last(), Some((98, 98)));
    assert_eq!(map.len(), 64);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);
}

#[test]
fn test_sequential_inserts_stay_balanced() {
    let mut map = TreeMap::new();
    for i in 0..1024_u32 {
        map.insert(i, ());
    }
    assert_eq!(
        check_balanced(&map.root),
        11,
        "1024 sequential keys should form a tree of height 11."
    );
}

#[test]
fn test_custom_comparator() {
    let mut names = TreeSet::with_comparator(Reverse(by_key(|s: &&str| s.len())));
    names.extend(["Jen", "Brian", "Bill", "Ed", "Sam"]);

    // "Sam" has the same length as "Jen" and is therefore considered equal.
    assert_eq!(names.len(), 4);
    assert!(names.contains(&"Tom"));
    assert_eq!(names.get(&"Tom"), Some(&"Jen"));
    assert_eq!(names.iter().copied().collect::<Vec<_>>(), ["Brian", "Bill", "Jen", "Ed"]);

    let mut by_second_letter = TreeMap::with_comparator(
        |a: &String, b: &String| a.chars().nth(1).cmp(&b.chars().nth(1))
    );
    by_second_letter.insert(String::from("Bill"), 1);
    by_second_letter.insert(String::from("Jen"), 2);
    assert_eq!(
        by_second_letter.values().copied().collect::<Vec<_>>(),
        [2, 1],
        "'e' should come before 'i'."
    );
    assert_eq!(by_second_letter.get(&String::from("Hex")), Some(&2));
}

#[test]
fn test_set_operations() {
    let mut set = TreeSet::new();
    assert!(set.insert(7));
    assert!(!set.insert(7));
    assert_eq!(set.count(&7), 1);
    assert_eq!(set.count(&8), 0);

    set.extend([3, 9, 1]);
    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&9));
    assert_eq!(set.to_string(), "{1, 3, 7, 9}");

    assert!(set.remove(&3));
    assert!(!set.remove(&3));
    assert_eq!(set.take(&9), Some(9));
    assert_eq!(set.pop_first(), Some(1));
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [7]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut map = TreeMap::new();
    for i in 0..10 {
        map.insert(i, counter.clone());
    }

    drop(map.remove(&4));
    assert_eq!(counter.take(), 1);

    let mut iter = map.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.take(), 9, "Every remaining value should be dropped exactly once.");
}

#[test]
fn test_display() {
    let map: TreeMap<&str, i32> = [("Brian", 40), ("Bill", 38)].into_iter().collect();
    assert_eq!(map.to_string(), r#"{"Bill": 38, "Brian": 40}"#);
    assert_eq!(map.comparator().compare("Bill", &"Brian"), Ordering::Less);
}

#[derive(Debug, Clone)]
enum Op {
    Insert(u8),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Insert),
        any::<u8>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_iteration_is_strictly_ascending(ops in prop::collection::vec(op(), 0..300)) {
        let mut map = TreeMap::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(map.insert(key, u32::from(key)), model.insert(key, u32::from(key)));
                },
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                },
            }
        }

        let keys: Vec<u8> = map.keys().copied().collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(keys, model.keys().copied().collect::<Vec<_>>());
        prop_assert_eq!(map.len(), model.len());

        let height = check_balanced(&map.root) as f64;
        prop_assert!(height <= 1.45 * ((map.len() + 2) as f64).log2());
    }

    #[test]
    fn prop_missing_lookups_leave_size_unchanged(
        keys in prop::collection::btree_set(0_u16..1000, 0..50),
        probe in 1000_u16..2000,
    ) {
        let map: TreeMap<u16, ()> = keys.iter().map(|k| (*k, ())).collect();
        let len = map.len();

        prop_assert_eq!(map.get(&probe), None);
        prop_assert!(!map.contains_key(&probe));
        prop_assert_eq!(map.len(), len);
    }
}
