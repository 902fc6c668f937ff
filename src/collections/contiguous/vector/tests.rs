#![cfg(test)]

use super::*;
use crate::collections::contiguous::Array;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut vec = Vector::new();
    for i in 0..8 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 8);
    assert_eq!(vec.cap(), 8, "Capacity should double from the minimum of 2.");

    vec.push(777);
    assert_eq!(vec.len(), 9);
    assert_eq!(vec.pop(), Some(777), "Pop should return the last pushed value.");
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5, 6, 7]);

    for i in (0..8).rev() {
        assert_eq!(vec.pop(), Some(i));
    }
    assert_eq!(vec.pop(), None);
    assert!(vec.is_empty());
}

#[test]
fn test_insert_and_remove() {
    let mut vec: Vector<_> = (0..5).collect();

    vec.insert(0, 10);
    vec.insert(6, 20);
    assert_eq!(&*vec, &[10, 0, 1, 2, 3, 4, 20]);

    assert_eq!(vec.remove(0), 10);
    assert_eq!(vec.remove(5), 20);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);

    let err = vec.try_insert(6, 100).unwrap_err();
    assert!(err.is_index_out_of_bounds(), "Inserting past the end should fail.");
    assert_eq!(IndexOutOfBounds::try_from(err).ok(), Some(IndexOutOfBounds { index: 6, len: 5 }));
    assert_eq!(vec.try_remove(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(vec.try_replace(2, 9), Ok(2));
    assert_eq!(vec.try_get(2), Ok(&9));
    assert_eq!(&*vec, &[0, 1, 9, 3, 4], "Failed operations shouldn't modify the Vector.");

    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.remove(0);
    });
}

#[test]
fn test_resize() {
    let mut vec: Vector<i32> = Vector::from(Array::repeat_default(10));
    vec[0] = 5;

    vec.resize(3, 0);
    assert_eq!(&*vec, &[5, 0, 0]);

    vec.resize(5, 1);
    assert_eq!(&*vec, &[5, 0, 0, 1, 1]);

    let mut next = 10;
    vec.resize_with(7, || {
        next += 1;
        next
    });
    assert_eq!(&*vec, &[5, 0, 0, 1, 1, 11, 12]);

    vec.clear();
    assert!(vec.is_empty());
    assert!(vec.cap() >= 7, "Clearing should keep the capacity.");
}

#[test]
fn test_capacity() {
    let mut vec: Vector<u8> = Vector::with_cap(3);
    vec.extend([1, 2]);
    vec.reserve(1);
    assert_eq!(vec.cap(), 3, "Reserving within capacity shouldn't reallocate.");

    vec.reserve(4);
    assert_eq!(vec.cap(), 6);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 2);
    assert_eq!(&*vec, &[1, 2]);

    assert_eq!(vec.try_reserve(usize::MAX), Err(CapacityOverflow));
    assert_eq!(vec.try_reserve(isize::MAX as usize), Err(CapacityOverflow));
    assert_eq!(vec.cap(), 2, "A failed reservation shouldn't modify the Vector.");

    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.push(1);
        vec.reserve(usize::MAX);
    });
}

#[test]
fn test_append_and_conversions() {
    let mut vec: Vector<_> = (0..3).map(|i| i.to_string()).collect();
    vec.append(Vector::from([String::from("3"), String::from("4")]));
    assert_eq!(&*vec, &["0", "1", "2", "3", "4"]);

    let arr = Array::from(vec.clone());
    assert_eq!(arr.size(), 5);
    assert_eq!(Vector::from(arr), vec);

    let mut iter = vec.into_iter();
    assert_eq!(iter.next().as_deref(), Some("0"));
    assert_eq!(iter.next_back().as_deref(), Some("4"));
    assert_eq!(iter.len(), 3);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = (0..10).map(|_| counter.clone()).collect();

    vec.truncate(6);
    assert_eq!(counter.take(), 4, "Truncating should drop the removed elements.");

    drop(vec.remove(0));
    assert_eq!(counter.take(), 1);

    drop(vec);
    assert_eq!(counter.take(), 5, "All remaining elements should be dropped.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(ZeroSizedType);
    }
    vec.insert(5, ZeroSizedType);
    assert_eq!(vec.len(), 11);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 10);
}

#[test]
fn test_display() {
    let vec = Vector::from([5, 0, 0]);
    assert_eq!(vec.to_string(), "[5, 0, 0]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [5, 0, 0], len: 3, cap: 3 }");
}
