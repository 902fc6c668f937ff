use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hasher, RandomState};
use std::mem;
use std::ops::Index;

use tracing::trace;

use super::{IntoKeys, IntoValues, Iter, Keys, Values, ValuesMut};
use crate::collections::contiguous::{Array, Vector};
use crate::collections::hash::{Equivalence, Standard};
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A map of keys to values, which relies on an [`Equivalence`] to hash and compare its keys.
///
/// By default, the [`Standard`] equivalence is used, which defers to the key's implementations
/// of [`Hash`](std::hash::Hash) and [`Eq`]. A custom equivalence can be supplied with
/// [`with_equivalence`](HashMap::with_equivalence) to key a map by only part of a value.
///
/// A custom load factor is not supported at this point, with the default being 4/5.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `reserve` | `O(n)`***, `O(1)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// location is found. This additional time is kept at a minimum and hash collisions are unlikely,
/// especially with a large capacity.
///
/// \** If the HashMap doesn't have enough capacity for the new element, `insert` will take `O(n)`.
/// \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K, V, E = Standard, B = RandomState> {
    pub(crate) arr: Array<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) eq: E,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

impl<K, V> HashMap<K, V> {
    /// Creates a new HashMap with capacity 0, using the [`Standard`] equivalence and a randomly
    /// seeded hasher. Memory will be allocated when the capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::hash::HashMap;
    /// let mut ages = HashMap::new();
    /// ages.insert("Bill", 38);
    /// assert_eq!(ages.get("Bill"), Some(&38));
    /// assert_eq!(ages.get("Jen"), None);
    /// ```
    pub fn new() -> HashMap<K, V> {
        HashMap::with_equivalence_and_hasher(Standard, RandomState::new())
    }

    /// Creates a new HashMap with the provided `cap`acity, allowing insertions without
    /// reallocation.
    pub fn with_cap(cap: usize) -> HashMap<K, V> {
        HashMap::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<K, V, E> HashMap<K, V, E> {
    /// Creates a new HashMap with capacity 0 which identifies keys using `eq`.
    pub fn with_equivalence(eq: E) -> HashMap<K, V, E> {
        HashMap::with_equivalence_and_hasher(eq, RandomState::new())
    }
}

impl<K, V, B> HashMap<K, V, Standard, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, Standard, B> {
        HashMap::with_equivalence_and_hasher(Standard, hasher)
    }

    /// Creates a new HashMap with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, Standard, B> {
        HashMap {
            arr: Array::repeat_default(cap),
            len: 0,
            eq: Standard,
            hasher,
        }
    }
}

impl<K, V, E, B> HashMap<K, V, E, B> {
    /// Creates a new HashMap with capacity 0, the provided equivalence and `hasher`.
    pub fn with_equivalence_and_hasher(eq: E, hasher: B) -> HashMap<K, V, E, B> {
        HashMap {
            arr: Array::new(),
            len: 0,
            eq,
            hasher,
        }
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Removes all entries from the HashMap, keeping the allocated capacity.
    pub fn clear(&mut self) {
        for bucket in self.arr.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            len: self.len,
            inner: self.arr.iter_mut(),
        }
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K, V, E: Equivalence<K>, B: BuildHasher> HashMap<K, V, E, B> {
    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.index_for_insert(&key);

        // The bucket at index is either empty or contains an equal key.
        match &mut self.arr[index] {
            Some(existing) => Some(mem::replace(&mut existing.1, value)),
            None => {
                self.arr[index] = Some((key, value));
                self.len += 1;
                None
            },
        }
    }

    /// Returns a mutable reference to the value associated with `key`, inserting the result of
    /// `default` first if there isn't one. `default` is only called if an insertion happens.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::hash::HashMap;
    /// let mut counts = HashMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_insert_with(word, || 0) += 1;
    /// }
    /// assert_eq!(counts["a"], 2);
    /// ```
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        let index = self.index_for_insert(&key);

        if self.arr[index].is_none() {
            self.arr[index] = Some((key, default()));
            self.len += 1;
        }

        // UNREACHABLE: The bucket has either just been filled or already held the key.
        self.arr[index].as_mut().map(|entry| &mut entry.1).unreachable()
    }

    /// Returns a mutable reference to the value associated with `key`, inserting the default value
    /// first if there isn't one. This is the only way for a lookup to modify a HashMap.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q is a borrowed form of K, which the equivalence has to treat the same way as K.
        K: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        let index = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the map doesn't contain the key.
        self.arr[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`. The map is never modified by this method.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        let index = self.find_index_for_key(key)?;

        self.arr[index].as_mut().map(|entry| &mut entry.1)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        match self.find_index_for_key(key) {
            Some(i) => self.arr[i].is_some(),
            None => false,
        }
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        let mut hole = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the map doesn't contain the key.
        let removed = self.arr[hole].take()?;
        self.len -= 1;

        // Walk the rest of the probe run, up to the next empty bucket. Any entry whose ideal index
        // doesn't lie between the hole and its current position would become unreachable, so it
        // moves into the hole and leaves a new hole behind.
        let cap = self.cap();
        let mut next = (hole + 1) % cap;
        while let Some((next_key, _)) = &self.arr[next] {
            // UNREACHABLE: The capacity isn't 0, because find_index_for_key returned Some.
            let ideal = self.index_from_key(next_key).unreachable();

            let ideal_distance = (next + cap - ideal) % cap;
            let hole_distance = (next + cap - hole) % cap;
            if ideal_distance >= hole_distance {
                self.arr.swap(hole, next);
                hole = next;
            }

            next = (next + 1) % cap;
        }

        Some(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows a `usize`.
    pub fn reserve(&mut self, extra: usize) {
        if extra == 0 { return; }

        let new_cap = self.len
            .checked_add(extra)
            .and_then(|n| n.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .ok_or(CapacityOverflow)
            .throw()
            / LOAD_FACTOR_NUMERATOR
            + 1;
        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }
}

impl<K, V, E: Equivalence<K>, B: BuildHasher> HashMap<K, V, E, B> {
    /// Determines whether the HashMap's length exceeds the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len >= self.arr.size() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the HashMap to have capacity equal to `new_cap`, if doing so wouldn't cause the
    /// map to overload. (There isn't a logical way for the map to shrink and drop entries, so this
    /// isn't allowed.)
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < self.len { return; }

        trace!(old_cap = self.cap(), new_cap, len = self.len, "rehashing hash map");

        // Replace the Array first so that we can consume the old Array.
        let old_arr = mem::replace(&mut self.arr, Array::repeat_default(new_cap));

        for entry in old_arr.into_iter().flatten() {
            // UNREACHABLE: If the new capacity is 0, the old Array has no entries and we can't
            // enter this loop.
            let index = self.find_index_for_key(&entry.0).unreachable();

            self.arr[index] = Some(entry);
        }
    }

    /// Finds the bucket that `key` should be written to, growing first if the key is new and the
    /// map is at its load capacity.
    pub(crate) fn index_for_insert(&mut self, key: &K) -> usize {
        if self.should_grow() && !self.contains_key(key) {
            self.grow()
        }

        // UNREACHABLE: We've just grown if necessary, so the capacity isn't 0.
        self.find_index_for_key(key).unreachable()
    }
}

impl<K, V, E, B: BuildHasher> HashMap<K, V, E, B> {
    /// Calculates the ideal index of a bucket for the provided `key` (or None if the HashMap has
    /// 0 capacity). This method doesn't consider hash collisions, see
    /// [`HashMap::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        let mut state = self.hasher.build_hasher();
        self.eq.hash_key(key, &mut state);
        state.finish().checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Finds the first valid index for the provided `key` (or None if the HashMap has 0 capacity).
    /// This is done by calculating the ideal index and then probing forward until a bucket is
    /// found that is empty or holds an equivalent key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        let mut index = self.index_from_key(key)?;

        // The load factor guarantees an empty bucket, so this always terminates.
        loop {
            match &self.arr[index] {
                Some(existing) if !self.eq.keys_eq(existing.0.borrow(), key) => {
                    index = (index + 1) % self.cap();
                },
                _ => return Some(index),
            }
        }
    }
}

impl<K, V, E: Default, B: Default> Default for HashMap<K, V, E, B> {
    fn default() -> Self {
        HashMap::with_equivalence_and_hasher(E::default(), B::default())
    }
}

impl<K, V, E, B, Q> Index<&Q> for HashMap<K, V, E, B>
where
    K: Borrow<Q>,
    Q: ?Sized,
    E: Equivalence<K> + Equivalence<Q>,
    B: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the key isn't present in the HashMap. Indexing never inserts.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("Key not found in HashMap!")
    }
}

impl<K, V, E: Equivalence<K>, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, E, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, E, B> FromIterator<(K, V)> for HashMap<K, V, E, B>
where
    E: Equivalence<K> + Default,
    B: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::default();
        map.extend(iter);
        map
    }
}

impl<K: Debug, V: Debug, E, B: Debug> Debug for HashMap<K, V, E, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.arr.iter()
            .map(|bucket| match bucket {
                Some((k, v)) => format!("({k:?}: {v:?})"),
                None => "-".into(),
            })
            .collect::<Vector<String>>();

        f.debug_struct("HashMap")
            .field("buckets", &DebugRaw(format!("[{}]", buckets.join(", "))))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Debug, V: Debug, E, B> Display for HashMap<K, V, E, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
