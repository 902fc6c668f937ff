use std::hash::{Hash, Hasher};

/// Decides which keys a hash-based collection treats as the same key.
///
/// An Equivalence bundles the two halves of key identity, the data fed to the hasher and the
/// equality predicate, so that they can't be supplied inconsistently. Implementations must uphold
/// that keys which are equal according to [`keys_eq`](Equivalence::keys_eq) write identical data
/// in [`hash_key`](Equivalence::hash_key). Breaking this rule is a logic error: the collection
/// won't exhibit undefined behaviour, but lookups may fail to find entries.
///
/// # Examples
/// ```
/// # use std::hash::{Hash, Hasher};
/// # use container_tour::collections::hash::{Equivalence, HashSet};
/// struct IgnoreCase;
///
/// impl Equivalence<str> for IgnoreCase {
///     fn hash_key<H: Hasher>(&self, key: &str, state: &mut H) {
///         for c in key.chars() {
///             c.to_ascii_lowercase().hash(state);
///         }
///     }
///
///     fn keys_eq(&self, lhs: &str, rhs: &str) -> bool {
///         lhs.eq_ignore_ascii_case(rhs)
///     }
/// }
///
/// impl Equivalence<String> for IgnoreCase {
///     fn hash_key<H: Hasher>(&self, key: &String, state: &mut H) {
///         Equivalence::<str>::hash_key(self, key, state)
///     }
///
///     fn keys_eq(&self, lhs: &String, rhs: &String) -> bool {
///         Equivalence::<str>::keys_eq(self, lhs, rhs)
///     }
/// }
///
/// let mut names = HashSet::with_equivalence(IgnoreCase);
/// names.insert(String::from("Bill"));
/// assert!(!names.insert(String::from("BILL")));
/// assert!(names.contains("bill"));
/// ```
pub trait Equivalence<K: ?Sized> {
    /// Feeds the parts of `key` that determine its identity into `state`.
    fn hash_key<H: Hasher>(&self, key: &K, state: &mut H);

    /// Returns true if `lhs` and `rhs` should be treated as the same key.
    fn keys_eq(&self, lhs: &K, rhs: &K) -> bool;
}

/// The default [`Equivalence`], which defers to the key's own [`Hash`] and [`Eq`] implementations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Standard;

impl<K: Hash + Eq + ?Sized> Equivalence<K> for Standard {
    fn hash_key<H: Hasher>(&self, key: &K, state: &mut H) {
        key.hash(state);
    }

    fn keys_eq(&self, lhs: &K, rhs: &K) -> bool {
        lhs == rhs
    }
}
