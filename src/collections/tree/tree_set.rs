use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use super::{IntoIter as MapIntoIter, Keys, TreeMap};
use crate::collections::order::{Compare, Natural};

/// An ordered set of unique values, stored as the keys of a [`TreeMap`].
///
/// Values are ordered by the comparator `C`, which defaults to [`Natural`] order, and iteration
/// always yields them in ascending order.
pub struct TreeSet<T, C = Natural> {
    // Unit values take up no space in the nodes.
    pub(crate) inner: TreeMap<T, (), C>,
}

impl<T> TreeSet<T> {
    /// Creates a new, empty TreeSet which uses the natural order of its values.
    pub const fn new() -> TreeSet<T> {
        TreeSet::with_comparator(Natural)
    }
}

impl<T, C> TreeSet<T, C> {
    /// Creates a new, empty TreeSet which orders its values with `cmp`.
    pub const fn with_comparator(cmp: C) -> TreeSet<T, C> {
        TreeSet {
            inner: TreeMap::with_comparator(cmp),
        }
    }

    /// Returns the number of values in the TreeSet.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the TreeSet contains no values.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the smallest value.
    pub fn first(&self) -> Option<&T> {
        self.inner.first_entry().map(|(k, _)| k)
    }

    /// Returns the largest value.
    pub fn last(&self) -> Option<&T> {
        self.inner.last_entry().map(|(k, _)| k)
    }

    /// Removes and returns the smallest value.
    pub fn pop_first(&mut self) -> Option<T> {
        self.inner.pop_first().map(|(k, _)| k)
    }

    /// Removes and returns the largest value.
    pub fn pop_last(&mut self) -> Option<T> {
        self.inner.pop_last().map(|(k, _)| k)
    }

    /// Removes all values from the TreeSet.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over all values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.keys())
    }
}

impl<T, C: Compare<T>> TreeSet<T, C> {
    /// Adds `value` to the TreeSet, returning true if it wasn't already present. An equal value
    /// that is already present isn't replaced.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::tree::TreeSet;
    /// let mut set = TreeSet::new();
    /// assert!(set.insert(7));
    /// assert!(!set.insert(7));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.inner.contains_key(&value) {
            return false;
        }
        self.inner.insert(value, ());
        true
    }
}

impl<T, C> TreeSet<T, C> {
    /// Returns true if the TreeSet contains `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.inner.contains_key(value)
    }

    /// Returns the number of stored values equal to `value`, which is always 0 or 1.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        usize::from(self.contains(value))
    }

    /// Returns a reference to the stored value equal to `value`, if there is one.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.inner.get_entry(value).map(|(k, _)| k)
    }

    /// Removes the value equal to `value`, returning true if there was one.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.inner.remove_entry(value).is_some()
    }

    /// Removes and returns the value equal to `value`, if there was one.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        Q: ?Sized,
        C: Compare<Q, T>,
    {
        self.inner.remove_entry(value).map(|(k, _)| k)
    }
}

impl<T, C: Default> Default for TreeSet<T, C> {
    fn default() -> Self {
        TreeSet::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for TreeSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::default();
        set.extend(iter);
        set
    }
}

impl<T, C> IntoIterator for TreeSet<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over a [`TreeSet`], in ascending order.
pub struct Iter<'a, T>(pub(crate) Keys<'a, T, ()>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A type for owned iteration over a [`TreeSet`], in ascending order.
pub struct IntoIter<T>(pub(crate) MapIntoIter<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, _)| k)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Debug, C> Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSet")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T: Debug, C> Display for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
