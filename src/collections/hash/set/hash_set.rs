use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, RandomState};

use super::Iter;
use crate::collections::contiguous::Vector;
use crate::collections::hash::{Equivalence, HashMap, Standard};
use crate::util::fmt::DebugRaw;

/// A set of unique items, which relies on an [`Equivalence`] to decide which items are the same.
///
/// HashSet is a thin wrapper around a [`HashMap`] with unit values, so it shares the map's
/// layout, load factor and [time complexity](HashMap#time-complexity).
///
/// # Examples
/// ```
/// # use container_tour::collections::hash::HashSet;
/// let mut names = HashSet::new();
/// assert!(names.insert("Bill"));
/// assert!(!names.insert("Bill"));
/// assert_eq!(names.len(), 1);
/// ```
pub struct HashSet<T, E = Standard, B = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), E, B>,
}

impl<T> HashSet<T> {
    /// Creates a new HashSet with capacity 0, using the [`Standard`] equivalence.
    pub fn new() -> HashSet<T> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }
}

impl<T, E> HashSet<T, E> {
    /// Creates a new HashSet with capacity 0 which identifies items using `eq`.
    pub fn with_equivalence(eq: E) -> HashSet<T, E> {
        HashSet {
            inner: HashMap::with_equivalence(eq),
        }
    }
}

impl<T, B> HashSet<T, Standard, B> {
    /// Creates a new HashSet with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, Standard, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, Standard, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }
}

impl<T, E, B> HashSet<T, E, B> {
    /// Creates a new HashSet with capacity 0, the provided equivalence and `hasher`.
    pub fn with_equivalence_and_hasher(eq: E, hasher: B) -> HashSet<T, E, B> {
        HashSet {
            inner: HashMap::with_equivalence_and_hasher(eq, hasher),
        }
    }

    /// Returns the number of items in the HashSet.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the HashSet contains no items.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current capacity of the HashSet.
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Removes all items, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over all items in the HashSet, in an unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T, E: Equivalence<T>, B: BuildHasher> HashSet<T, E, B> {
    /// Adds `item` to the HashSet, returning true if it wasn't already present. An existing,
    /// equivalent item is kept rather than replaced.
    pub fn insert(&mut self, item: T) -> bool {
        let index = self.inner.index_for_insert(&item);

        // The bucket at index is either empty or contains an equivalent item.
        match self.inner.arr[index] {
            Some(_) => false,
            None => {
                self.inner.arr[index] = Some((item, ()));
                self.inner.len += 1;
                true
            },
        }
    }

    /// Returns true if the HashSet contains an item equivalent to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.inner.contains_key(item)
    }

    /// Returns a reference to the stored item which is equivalent to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.inner.get_entry(item).map(|(k, _)| k)
    }

    /// Removes the item equivalent to `item`, returning true if there was one.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.take(item).is_some()
    }

    /// Removes and returns the stored item equivalent to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.inner.remove_entry(item).map(|(k, _)| k)
    }

    /// Increases the capacity of the HashSet to ensure that len + `extra` items will fit without
    /// exceeding the load factor.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }
}

impl<T, E: Default, B: Default> Default for HashSet<T, E, B> {
    fn default() -> Self {
        HashSet {
            inner: HashMap::default(),
        }
    }
}

impl<T, E: Equivalence<T>, B: BuildHasher> Extend<T> for HashSet<T, E, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<T, E, B> FromIterator<T> for HashSet<T, E, B>
where
    E: Equivalence<T> + Default,
    B: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::default();
        set.extend(iter);
        set
    }
}

impl<T: Debug, E, B: Debug> Debug for HashSet<T, E, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents = self.iter()
            .map(|i| format!("{i:?}"))
            .collect::<Vector<String>>();

        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!("{{{}}}", contents.join(", "))))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", &self.inner.hasher)
            .finish()
    }
}

impl<T: Debug, E, B> Display for HashSet<T, E, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
