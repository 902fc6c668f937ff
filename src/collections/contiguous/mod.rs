//! Contiguous collection types. Namely [`Array`] for a contiguous collection with a size chosen at
//! runtime and [`Vector`] for one which can also grow and shrink.
//!
//! Fixed-size sequences with a size known at compile time are just Rust's arrays, `[T; N]`.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;

pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
