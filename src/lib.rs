//! A guided tour of container families, along with the collections library that powers it.
//!
//! # Purpose
//! The [`tour`] walks through fixed arrays, owned heap arrays, growable vectors, ordered maps and
//! sets, priority queues, hash maps and sets, pairs and tuples, printing what each one does. Rather
//! than lean on [`std::collections`], every container it demonstrates is implemented in
//! [`collections`], so the tour doubles as a look at how the data structures work.
//!
//! # Method
//! The containers are written against the allocator directly. [`Array`](collections::contiguous::Array)
//! owns a runtime-sized allocation, [`Vector`](collections::contiguous::Vector) grows one, and the
//! other collections are built from those. This library doesn't use [`Vec`] at all.
//!
//! Lookups never insert. Where a default value should be created for a missing key, the method
//! says so in its name (`get_or_insert_default`, `get_or_insert_with`).
//!
//! # Error Handling
//! Fallible operations come in pairs: a `try_*` method returning a strongly typed [`Result`] and a
//! panicking counterpart for the common case. It is more ergonomic for some functions to panic,
//! because users don't want to be forced to handle a capacity overflow every time they push into a
//! Vector.
//!
//! When this crate employs errors via [`Result`]s, it uses structs that implement
//! [`Error`](std::error::Error), combined with enums for static dispatch rather than dynamic.
//!
//! # Dependencies
//! - `derive_more` for the repetitive parts of the error types.
//! - `tracing` for diagnostics, such as collections reporting when they reallocate.
//! - `tracing-subscriber` in the binary only, writing those diagnostics to stderr.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "tour")]
pub mod tour;

pub(crate) mod util;
