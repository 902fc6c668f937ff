//! Hash-based collections: [`HashMap`] and [`HashSet`], along with the [`Equivalence`] trait which
//! decides what makes two keys the same.
//!
//! Both collections use open addressing with linear probing. Their iteration order is unspecified,
//! and with the default [`RandomState`](std::hash::RandomState) hasher it changes between runs.

mod equivalence;
pub mod map;
pub mod set;
mod tests;

pub use equivalence::*;
#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
