//! The collection types used throughout the tour.
//!
//! # Purpose
//! Each family of containers is written here from scratch: owned arrays and vectors directly on
//! top of the allocator, an AVL tree for ordered maps and sets, a binary heap for priority queues
//! and an open-addressing table for hash maps and sets.
//!
//! # Method
//! Contiguous types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality. Ordered collections take a comparator
//! from [`order`], hash-based ones take an [`Equivalence`](hash::Equivalence).

pub mod order;

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "tree")]
pub mod tree;
