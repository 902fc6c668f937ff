//! Comparators used by the ordered collections.
//!
//! [`TreeMap`](super::tree::TreeMap), [`TreeSet`](super::tree::TreeSet) and
//! [`PriorityQueue`](super::heap::PriorityQueue) don't require their elements to implement [`Ord`].
//! Instead, they take a comparator at construction, defaulting to [`Natural`], which does use
//! [`Ord`]. Any closure or function of the form `Fn(&T, &T) -> Ordering` can be used as a
//! comparator, so the ordering of a collection can differ from the natural order of its elements.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// A total order between values of type `L` and `R`.
///
/// When `L` and `R` differ, `L` is usually a borrowed form of `R`, allowing lookups with a `&str`
/// in a collection keyed by [`String`]s. It is a logic error for a comparator to order a borrowed
/// form differently to the owned form, or for the order to change while a value is in a
/// collection.
pub trait Compare<L: ?Sized, R: ?Sized = L> {
    /// Compares `lhs` to `rhs`.
    fn compare(&self, lhs: &L, rhs: &R) -> Ordering;
}

/// The natural order of a type, as defined by its [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<L, R> Compare<L, R> for Natural
where
    L: Ord + ?Sized,
    R: Borrow<L> + ?Sized,
{
    fn compare(&self, lhs: &L, rhs: &R) -> Ordering {
        lhs.cmp(rhs.borrow())
    }
}

/// Reverses the order produced by the contained comparator. For example, a
/// [`PriorityQueue`](super::heap::PriorityQueue) with `Reverse(Natural)` yields its largest element
/// first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<L, R, C> Compare<L, R> for Reverse<C>
where
    L: ?Sized,
    R: ?Sized,
    C: Compare<L, R>,
{
    fn compare(&self, lhs: &L, rhs: &R) -> Ordering {
        self.0.compare(lhs, rhs).reverse()
    }
}

impl<T, F> Compare<T, T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// Orders values by the key that `key_fn` extracts from them, using the key's natural order.
/// Created with [`by_key`].
pub struct ByKey<F, K> {
    key_fn: F,
    _phantom: PhantomData<fn() -> K>,
}

/// Creates a comparator which orders values by the key extracted with `key_fn`.
///
/// # Examples
/// ```
/// # use container_tour::collections::order::{by_key, Compare};
/// # use std::cmp::Ordering;
/// let by_len = by_key(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
/// ```
pub fn by_key<T, K, F>(key_fn: F) -> ByKey<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    ByKey {
        key_fn,
        _phantom: PhantomData,
    }
}

impl<T, K, F> Compare<T, T> for ByKey<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.key_fn)(lhs).cmp(&(self.key_fn)(rhs))
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        ByKey {
            key_fn: self.key_fn.clone(),
            _phantom: PhantomData,
        }
    }
}
