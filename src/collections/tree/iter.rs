use std::iter::FusedIterator;

use super::{Branch, Node};
use crate::collections::contiguous::Vector;

/// A type for borrowed iteration over a [`TreeMap`](super::TreeMap), in ascending order of keys.
///
/// See [`TreeMap::iter`](super::TreeMap::iter).
pub struct Iter<'a, K, V> {
    /// Nodes whose left subtree has been visited, but which haven't been yielded themselves. The
    /// top of the stack is always the next node in order.
    pub(crate) stack: Vector<&'a Node<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: &'a Branch<K, V>, len: usize) -> Iter<'a, K, V> {
        let mut iter = Iter {
            stack: Vector::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut branch: &'a Branch<K, V>) {
        while let Some(node) = branch.0.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.len -= 1;
        Some(node.tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A type for owned iteration over a [`TreeMap`](super::TreeMap), in ascending order of keys.
///
/// See [`TreeMap::into_iter`](super::TreeMap::into_iter).
pub struct IntoIter<K, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        // Each step takes O(log n) to rebalance, but avoids keeping parent pointers in every node.
        let entry = self.root.take_first_entry()?;
        self.len -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.root.take_last_entry()?;
        self.len -= 1;
        Some(entry)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// A type for borrowed iteration over the keys of a [`TreeMap`](super::TreeMap), in ascending
/// order.
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// A type for borrowed iteration over the values of a [`TreeMap`](super::TreeMap), in ascending
/// order of their keys.
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}
