#![cfg(test)]

use std::collections::HashMap as ModelMap;
use std::hash::{Hash, Hasher};
use std::hint;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::hash::{BadHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

/// Treats ASCII strings as equal regardless of case.
#[derive(Debug, Default, Clone, Copy)]
struct IgnoreCase;

impl Equivalence<String> for IgnoreCase {
    fn hash_key<H: Hasher>(&self, key: &String, state: &mut H) {
        key.to_ascii_lowercase().hash(state);
    }

    fn keys_eq(&self, lhs: &String, rhs: &String) -> bool {
        lhs.eq_ignore_ascii_case(rhs)
    }
}

fn sorted<T: Ord>(iter: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut items: Vec<T> = iter.into_iter().collect();
    items.sort();
    items
}

#[test]
fn test_insert_get_and_replace() {
    let mut ages = HashMap::new();
    assert_eq!(ages.insert(String::from("Bill"), 37), None);
    assert_eq!(ages.insert(String::from("Brian"), 40), None);
    assert_eq!(ages.insert(String::from("Bill"), 38), Some(37));

    assert_eq!(ages.len(), 2);
    assert_eq!(ages.get("Bill"), Some(&38));
    assert_eq!(ages["Brian"], 40);
    assert_eq!(ages.get_entry("Brian"), Some((&String::from("Brian"), &40)));

    *ages.get_mut("Brian").unwrap() -= 1;
    assert_eq!(ages["Brian"], 39);
}

#[test]
fn test_lookup_does_not_insert() {
    let mut ages: HashMap<String, u32> = HashMap::new();
    ages.insert(String::from("Bill"), 38);

    assert_eq!(ages.get("Jen"), None);
    assert!(!ages.contains_key("Jen"));
    assert_eq!(ages.len(), 1, "A missing lookup shouldn't modify the map.");

    assert_panics!({
        hint::black_box(ages["Jen"]);
    }, "Indexing with a missing key should panic.");
    assert_eq!(ages.len(), 1);

    assert_eq!(*ages.get_or_insert_default(String::from("Jen")), 0);
    *ages.get_or_insert_with(String::from("Bill"), || unreachable!()) += 1;
    assert_eq!(ages.len(), 2);
    assert_eq!(ages["Bill"], 39);
}

#[test]
fn test_growth_and_reserve() {
    let mut map = HashMap::new();
    assert_eq!(map.cap(), 0);

    for i in 0..100 {
        map.insert(i, i * 2);
    }
    assert_eq!(map.len(), 100);
    assert!(map.len() * 5 <= map.cap() * 4, "The load factor should be respected.");
    assert!((0..100).all(|i| map.get(&i) == Some(&(i * 2))));

    let mut reserved: HashMap<u32, ()> = HashMap::new();
    reserved.reserve(40);
    let cap = reserved.cap();
    reserved.extend((0..40).map(|i| (i, ())));
    assert_eq!(reserved.cap(), cap, "Reserved capacity should fit the entries without growing.");

    reserved.clear();
    assert!(reserved.is_empty());
    assert_eq!(reserved.cap(), cap);
    assert_eq!(reserved.get(&3), None);
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(BadHasherBuilder);
    set.insert(ManualHash::new(0, "zero"));
    set.insert(ManualHash::new(0, "one"));
    set.insert(ManualHash::new(2, "two"));
    set.insert(ManualHash::new(0, "three"));
    set.insert(ManualHash::new(2, "four"));
    set.insert(ManualHash::new(1, "five"));

    assert!(set.remove(&ManualHash::new(0, "zero")));
    assert!(set.remove(&ManualHash::new(2, "two")));
    assert!(!set.remove(&ManualHash::new(2, "two")));

    for (hash, value) in [(0, "one"), (0, "three"), (2, "four"), (1, "five")] {
        assert!(
            set.contains(&ManualHash::new(hash, value)),
            "HashSet should handle hash collisions so that no elements are lost during removal."
        );
    }
    assert_eq!(
        sorted(set.into_iter().map(|i| i.value())),
        ["five", "four", "one", "three"]
    );

    let mut set = HashSet::with_cap_and_hasher(6, BadHasherBuilder);
    set.insert(ManualHash::new(5, "zero"));
    set.insert(ManualHash::new(5, "one"));
    set.insert(ManualHash::new(1, "two"));
    set.insert(ManualHash::new(5, "three"));

    set.remove(&ManualHash::new(5, "zero"));

    assert!(set.contains(&ManualHash::new(5, "three")), "Collisions should wrap around the end.");
    assert_eq!(
        sorted(set.into_iter().map(|i| i.value())),
        ["one", "three", "two"]
    );
}

#[test]
fn test_custom_equivalence() {
    let mut ages = HashMap::with_equivalence(IgnoreCase);
    ages.insert(String::from("Bill"), 37);
    assert_eq!(ages.insert(String::from("BILL"), 38), Some(37));
    assert_eq!(ages.len(), 1);
    assert_eq!(ages.get(&String::from("bill")), Some(&38));
    assert_eq!(ages.keys().collect::<Vec<_>>(), ["Bill"], "The first key should be kept.");

    let mut names: HashSet<String, IgnoreCase> = ["Jen", "JEN", "Steve"].map(String::from).into_iter().collect();
    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&String::from("steve")).map(String::as_str), Some("Steve"));
    assert_eq!(names.take(&String::from("jEn")).as_deref(), Some("Jen"));
    assert_eq!(names.len(), 1);
}

#[test]
fn test_iterators() {
    let mut map: HashMap<u32, u32> = (0..10).map(|i| (i, i)).collect();

    assert_eq!(map.iter().len(), 10);
    assert_eq!(sorted(map.keys().copied()), (0..10).collect::<Vec<_>>());

    for value in map.values_mut() {
        *value *= 10;
    }
    assert_eq!(map.values().sum::<u32>(), 450);
    assert_eq!(map.remove(&9), Some(90));
    assert_eq!(map.remove_entry(&8), Some((8, 80)));

    assert_eq!(sorted(map.keys().copied()), (0..8).collect::<Vec<_>>());
    assert_eq!(sorted(map.into_values()), (0..8).map(|i| i * 10).collect::<Vec<_>>());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut map = HashMap::new();
    for i in 0..10 {
        map.insert(i, counter.clone());
    }

    drop(map.remove(&0));
    assert_eq!(*counter.borrow(), 1);

    let mut iter = map.into_values();
    drop(iter.next());
    drop(iter);
    assert_eq!(*counter.borrow(), 10, "Each value should be dropped exactly once.");
}

#[test]
fn test_display() {
    let mut map = HashMap::new();
    map.insert("Bill", 38);
    assert_eq!(format!("{map}"), "{\"Bill\": 38}");

    let mut set = HashSet::new();
    set.insert(1);
    assert_eq!(format!("{set}"), "{1}");
}

#[derive(Debug, Clone)]
enum Op {
    Insert(u8, u16),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<u8>(), any::<u16>()).prop_map(|(k, v)| Op::Insert(k, v)),
        any::<u8>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_collisions_never_lose_entries(ops in prop::collection::vec(op(), 0..300)) {
        // Small keys hash to themselves, so neighbouring keys form long probe runs.
        let mut map = HashMap::with_hasher(BadHasherBuilder);
        let mut model = ModelMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => prop_assert_eq!(map.insert(k, v), model.insert(k, v)),
                Op::Remove(k) => prop_assert_eq!(map.remove(&k), model.remove(&k)),
            }
        }

        prop_assert_eq!(map.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(map.get(k), Some(v));
        }
    }

    #[test]
    fn prop_equivalent_keys_hash_identically(name in "[a-zA-Z]{1,12}") {
        let mut set = HashSet::with_equivalence(IgnoreCase);
        set.insert(name.clone());

        prop_assert!(set.contains(&name.to_ascii_uppercase()));
        prop_assert!(set.contains(&name.to_ascii_lowercase()));
        prop_assert!(!set.insert(name.to_ascii_uppercase()));
        prop_assert_eq!(set.len(), 1);
    }
}
