use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::collections::hash::Equivalence;

/// A name and an age, used to show how the collections order and hash a custom type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    /// The person's name.
    pub name: String,
    /// The person's age in years.
    pub age: u32,
}

impl Person {
    /// Creates a new Person.
    pub fn new(name: impl Into<String>, age: u32) -> Person {
        Person {
            name: name.into(),
            age,
        }
    }
}

/// People are ordered by age. Ties are broken by name so that the order agrees with [`Eq`].
impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.age.cmp(&other.age)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

/// A comparator which orders people alphabetically by name, ignoring their age.
pub fn by_name(lhs: &Person, rhs: &Person) -> Ordering {
    lhs.name.cmp(&rhs.name)
}

/// An [`Equivalence`] which identifies people by name alone.
///
/// The age is left out of both the hash and the comparison. Leaving it out of only one of them
/// would let two equal people hash differently.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByName;

impl Equivalence<Person> for ByName {
    fn hash_key<H: Hasher>(&self, key: &Person, state: &mut H) {
        key.name.hash(state);
    }

    fn keys_eq(&self, lhs: &Person, rhs: &Person) -> bool {
        lhs.name == rhs.name
    }
}
