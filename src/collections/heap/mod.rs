//! A binary heap based [`PriorityQueue`].

mod priority_queue;

pub use priority_queue::*;
