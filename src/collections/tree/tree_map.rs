use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use super::{Branch, IntoIter, Iter, Keys, Values};
use crate::collections::order::{Compare, Natural};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;

/// An ordered map of keys to values, stored in a height-balanced (AVL) binary search tree.
///
/// Keys are ordered by the comparator `C`, which defaults to [`Natural`] order. Iteration always
/// yields entries in ascending order of their keys, so it is deterministic between runs.
///
/// Looking up a key never modifies the map: [`get`](TreeMap::get) returns [`None`] for a missing
/// key and indexing panics. Inserting a default value for a missing key has to be requested
/// explicitly with [`get_or_insert_default`](TreeMap::get_or_insert_default) or
/// [`get_or_insert_with`](TreeMap::get_or_insert_with).
///
/// It is a logic error for a key to be modified in a way that changes its order relative to the
/// other keys while it is in the map.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the TreeMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `get` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `contains_key` | `O(log n)` |
/// | `first_entry` | `O(log n)` |
/// | `pop_first` | `O(log n)` |
/// | `iter` | `O(n)` |
pub struct TreeMap<K, V, C = Natural> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
    pub(crate) cmp: C,
}

impl<K, V> TreeMap<K, V> {
    /// Creates a new, empty TreeMap which uses the natural order of its keys.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::tree::TreeMap;
    /// let mut ages = TreeMap::new();
    /// ages.insert("Brian", 40);
    /// ages.insert("Bill", 38);
    /// assert_eq!(ages.iter().collect::<Vec<_>>(), [(&"Bill", &38), (&"Brian", &40)]);
    /// ```
    pub const fn new() -> TreeMap<K, V> {
        TreeMap::with_comparator(Natural)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Creates a new, empty TreeMap which orders its keys with `cmp`.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::tree::TreeMap;
    /// let mut map = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    /// assert_eq!(map.values().collect::<String>(), "cba");
    /// ```
    pub const fn with_comparator(cmp: C) -> TreeMap<K, V, C> {
        TreeMap {
            root: Branch(None),
            len: 0,
            cmp,
        }
    }

    /// Returns the number of entries in the TreeMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the TreeMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the comparator used to order the keys.
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the entry with the smallest key.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.first_entry()
    }

    /// Returns the entry with the largest key.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.last_entry()
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let entry = self.root.take_first_entry();
        if entry.is_some() {
            self.len -= 1;
        }
        entry
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let entry = self.root.take_last_entry();
        if entry.is_some() {
            self.len -= 1;
        }
        entry
    }

    /// Removes all entries from the TreeMap.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Returns an iterator over all entries in ascending order of their keys.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.len)
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K, V, C: Compare<K>> TreeMap<K, V, C> {
    /// Inserts the provided `key`-`value` pair into the TreeMap. If the key was already associated
    /// with a value, the previous value is returned and the stored key is left unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.root.insert(key, value, &self.cmp);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Returns a mutable reference to the value associated with `key`, inserting the value produced
    /// by `default` first if there isn't one.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::tree::TreeMap;
    /// let mut counts = TreeMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_insert_with(word, || 0) += 1;
    /// }
    /// assert_eq!(counts.get("a"), Some(&2));
    /// ```
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        K: Clone,
        F: FnOnce() -> V,
    {
        if !self.contains_key(&key) {
            self.insert(key.clone(), default());
        }

        // UNREACHABLE: The key is either already present or has just been inserted.
        self.root.get_mut(&key, &self.cmp).unreachable()
    }

    /// Returns a mutable reference to the value associated with `key`, inserting the default value
    /// first if there isn't one. This is the only way for a lookup to modify a TreeMap.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        K: Clone,
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        self.root.get_entry(key, &self.cmp)
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no value for `key`. The map is never modified.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::tree::TreeMap;
    /// let mut ages = TreeMap::new();
    /// ages.insert(String::from("Bill"), 38);
    /// assert_eq!(ages.get("Bill"), Some(&38));
    /// assert_eq!(ages.get("Jen"), None);
    /// assert_eq!(ages.len(), 1);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        self.root.get_mut(key, &self.cmp)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let entry = self.root.remove_entry(key, &self.cmp);
        if entry.is_some() {
            self.len -= 1;
        }
        entry
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }
}

impl<K, V, C, Q> Index<&Q> for TreeMap<K, V, C>
where
    Q: ?Sized,
    C: Compare<Q, K>,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the map doesn't contain `key`. Unlike some other languages, indexing never inserts
    /// a missing key.
    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("Key not found in TreeMap!")
    }
}

impl<K, V, C: Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        TreeMap::with_comparator(C::default())
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for TreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TreeMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            root: self.root,
            len: self.len,
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Debug, V: Debug, C> Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeMap")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", &self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Debug, V: Debug, C> Display for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
