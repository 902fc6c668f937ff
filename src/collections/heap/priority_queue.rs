use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::slice;

use crate::collections::contiguous::Vector;
use crate::collections::order::{Compare, Natural};

/// A priority queue implemented as a binary heap, which always exposes its smallest element.
///
/// "Smallest" is decided by the comparator `C`, which defaults to [`Natural`] order. Supplying
/// [`Reverse`](crate::collections::order::Reverse) produces a queue which exposes its largest
/// element instead, and any other comparator can be used to prioritise by something other than the
/// natural order of `T`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PriorityQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `top` | `O(1)` |
/// | `push` | `O(log n)`* |
/// | `pop` | `O(log n)` |
/// | `into_sorted_vector` | `O(n log n)` |
///
/// \* Amortised, the backing [`Vector`] occasionally has to grow.
pub struct PriorityQueue<T, C = Natural> {
    pub(crate) heap: Vector<T>,
    pub(crate) cmp: C,
}

impl<T> PriorityQueue<T> {
    /// Creates a new, empty PriorityQueue which exposes the smallest element by natural order.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::heap::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.extend([3, 1, 2]);
    /// assert_eq!(queue.top(), Some(&1));
    /// ```
    pub fn new() -> PriorityQueue<T> {
        PriorityQueue::with_comparator(Natural)
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates a new, empty PriorityQueue which orders its elements with `cmp`.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::heap::PriorityQueue;
    /// # use container_tour::collections::order::{Natural, Reverse};
    /// let mut queue = PriorityQueue::with_comparator(Reverse(Natural));
    /// queue.extend([3, 1, 2]);
    /// assert_eq!(queue.pop(), Some(3));
    /// ```
    pub fn with_comparator(cmp: C) -> PriorityQueue<T, C> {
        PriorityQueue {
            heap: Vector::new(),
            cmp,
        }
    }

    /// Returns the number of elements in the PriorityQueue.
    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the PriorityQueue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the element with the highest priority (the smallest according to the comparator)
    /// without removing it.
    pub fn top(&self) -> Option<&T> {
        self.heap.first()
    }

    /// An alias of [`top`](PriorityQueue::top).
    pub fn peek(&self) -> Option<&T> {
        self.top()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns an iterator over all elements in an unspecified order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.iter()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Adds `value` to the PriorityQueue.
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes the element with the highest priority and returns it. Use
    /// [`discard_top`](PriorityQueue::discard_top) to remove it without taking the value.
    ///
    /// # Examples
    /// ```
    /// # use container_tour::collections::heap::PriorityQueue;
    /// let mut queue: PriorityQueue<_> = [39, 37, 38].into_iter().collect();
    /// assert_eq!(queue.pop(), Some(37));
    /// assert_eq!(queue.pop(), Some(38));
    /// assert_eq!(queue.pop(), Some(39));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let len = self.heap.len();
        if len == 0 {
            return None;
        }

        // Move the last leaf to the root, then restore the heap from the top.
        self.heap.swap(0, len - 1);
        let top = self.heap.pop();
        self.sift_down(0);
        top
    }

    /// Removes the element with the highest priority without returning it. Returns true if an
    /// element was removed.
    pub fn discard_top(&mut self) -> bool {
        self.pop().is_some()
    }

    /// Consumes the PriorityQueue, returning its elements in ascending order of priority.
    pub fn into_sorted_vector(mut self) -> Vector<T> {
        let mut sorted = Vector::with_cap(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.compare(&self.heap[index], &self.heap[parent]) != Ordering::Less {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.cmp.compare(&self.heap[left], &self.heap[smallest]).is_lt() {
                smallest = left;
            }
            if right < len && self.cmp.compare(&self.heap[right], &self.heap[smallest]).is_lt() {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, C: Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        PriorityQueue::with_comparator(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = PriorityQueue::default();
        queue.extend(iter);
        queue
    }
}

impl<T: Clone, C: Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        PriorityQueue {
            heap: self.heap.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: Debug, C> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("top", &self.top())
            .field("len", &self.len())
            .finish()
    }
}
