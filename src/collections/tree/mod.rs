//! Ordered collections backed by a height-balanced binary search tree: [`TreeMap`] and
//! [`TreeSet`].
//!
//! Both collections take a [`Compare`](super::order::Compare) implementation instead of relying on
//! [`Ord`] directly, so the same element type can be stored in different orders.

mod iter;
mod node;
mod tests;
mod tree_map;
pub mod tree_set;

pub use iter::*;
pub(crate) use node::*;
pub use tree_map::*;
#[doc(inline)]
pub use tree_set::TreeSet;
