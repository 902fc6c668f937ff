use std::io::Write;

use tracing::{debug, info_span};

use super::{Person, TourError, by_name};
use crate::collections::contiguous::Vector;
use crate::collections::heap::PriorityQueue;
use crate::collections::order::{Natural, Reverse};
use crate::collections::tree::{TreeMap, TreeSet};

/// Ordered collections: sets and maps kept sorted in a tree, and priority queues kept in a heap.
pub fn trees(out: &mut impl Write) -> Result<(), TourError> {
    let _span = info_span!("trees").entered();

    // A TreeSet holds one copy of each value, kept in order so lookups take O(log n).
    let mut int_set = TreeSet::new();
    int_set.insert(7);
    if int_set.contains(&7) {
        writeln!(out, "Has a 7")?;
    }
    if int_set.count(&7) != 0 {
        writeln!(out, "Strangely, another way of checking for presence.")?;
    }

    // A TreeMap associates each key with a value. Looking up a missing key doesn't insert it.
    let mut ages = TreeMap::new();
    ages.insert(String::from("Bill"), 38);
    ages.insert(String::from("Brian"), 40);

    match ages.get("Jen") {
        Some(age) => writeln!(out, "Jen's age is {age}")?,
        None => writeln!(out, "Could not find Jen's age.")?,
    }
    writeln!(out, "Ages still holds {} entries.", ages.len())?;

    // Inserting a default for a missing key has to be asked for by name.
    let jens_age = *ages.get_or_insert_default(String::from("Jen"));
    writeln!(out, "Jen's age after opt-in insert is {jens_age}")?;
    debug!(entries = ages.len(), "inserted a default age");

    // A PriorityQueue always exposes its smallest element, here the youngest person.
    let mut people = PriorityQueue::new();
    people.push(Person::new("Brian", 39));
    people.push(Person::new("Bill", 37));
    people.push(Person::new("Jen", 38));

    if let Some(youngest) = people.top() {
        writeln!(out, "Youngest person is {}", youngest.name)?;
    }
    writeln!(out, "By age: {}", names(people.clone().into_sorted_vector()))?;

    // A comparator orders the queue by something other than the natural order of its elements.
    let mut people_by_name = PriorityQueue::with_comparator(by_name);
    people_by_name.extend(people.iter().cloned());
    writeln!(out, "By name: {}", names(people_by_name.into_sorted_vector()))?;

    // Reversing the comparator turns the queue around to expose the largest element.
    let mut oldest_first = PriorityQueue::with_comparator(Reverse(Natural));
    oldest_first.extend(people.iter().cloned());
    if let Some(oldest) = oldest_first.peek() {
        writeln!(out, "Oldest person is {}", oldest.name)?;
    }

    // Trees can hold people directly, or map each name to a person.
    let people_set: TreeSet<Person> = people.iter().cloned().collect();
    let listing = people_set.iter()
        .map(|p| p.to_string())
        .collect::<Vector<String>>();
    writeln!(out, "People by age: {}", listing.join(", "))?;

    let directory: TreeMap<String, Person> = people_set.into_iter()
        .map(|p| (p.name.clone(), p))
        .collect();
    if let Some(brian) = directory.get("Brian") {
        writeln!(out, "{} is {} years old", brian.name, brian.age)?;
    }

    Ok(())
}

fn names(people: Vector<Person>) -> String {
    people.into_iter()
        .map(|p| p.name)
        .collect::<Vector<String>>()
        .join(", ")
}
