use std::io::Write;

use tracing::{debug, info_span};

use super::{ByName, Person, TourError};
use crate::collections::hash::{HashMap, HashSet};
use crate::collections::tree::TreeSet;

/// Hash-based collections, and how their iteration order compares to the tree-based ones.
pub fn hash_tables(out: &mut impl Write) -> Result<(), TourError> {
    let _span = info_span!("hash_tables").entered();

    // Strings and integers already know how to hash themselves and compare for equality.
    let mut ages = HashMap::new();
    ages.insert(String::from("Bill"), 38);
    if let Some(age) = ages.get("Bill") {
        writeln!(out, "Bill is {age} years old")?;
    }

    // A custom equivalence keys people by name only. Hash and equality come from the same place,
    // so two people with the same name always hash the same way.
    let mut people_set = HashSet::with_equivalence(ByName);
    people_set.insert(Person::new("Bill", 38));
    let inserted_again = people_set.insert(Person::new("Bill", 39));
    debug!(inserted_again, "inserted Bill a second time");

    let len = people_set.len();
    writeln!(
        out,
        "People set has {len} {} after inserting Bill twice.",
        if len == 1 { "entry" } else { "entries" }
    )?;

    // Iterating a tree visits the names in ascending order, every time. A hash table makes no
    // promises, the order can change from one run to the next.
    let names = ["Bill", "Jen", "Brian", "Steve"];
    let ordered_names: TreeSet<&str> = names.into_iter().collect();
    let unordered_names: HashSet<&str> = names.into_iter().collect();

    for name in &ordered_names {
        writeln!(out, "Ordered Name: {name}")?;
    }
    for name in &unordered_names {
        writeln!(out, "Unordered Name: {name}")?;
    }

    Ok(())
}
