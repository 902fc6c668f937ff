//! A module containing [`HashMap`] and associated types.
//!
//! The only other included types are for iteration, providing owned and borrowed iteration over
//! entries, keys or values in a map. There is no mutable iterator over entries or keys because
//! mutating the keys of a HashMap in place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod hash_map;
mod iter;

pub use hash_map::*;
pub use iter::*;
