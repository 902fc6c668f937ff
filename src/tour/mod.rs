//! A tour of container families, written as independent demonstrations.
//!
//! Each demonstration writes its findings to the provided writer, one line at a time, and shares
//! no state with the others. [`run`] invokes all of them in order.
//!
//! # Examples
//! ```
//! # use container_tour::tour;
//! let mut out = Vec::new();
//! tour::not_arrays(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("Fixed array: [5, 0,"));
//! ```

mod arrays;
mod error;
mod hash_tables;
mod not_arrays;
mod person;
mod trees;

pub use arrays::*;
pub use error::*;
pub use hash_tables::*;
pub use not_arrays::*;
pub use person::*;
pub use trees::*;

use std::io::Write;

use tracing::info;

/// Runs every demonstration in order: [`arrays`], [`trees`], [`hash_tables`] and [`not_arrays`].
///
/// # Errors
/// Returns an error if writing to `out` fails, or if a demonstration accesses a collection out of
/// bounds.
pub fn run(out: &mut impl Write) -> Result<(), TourError> {
    info!("starting the tour");

    arrays(out)?;
    trees(out)?;
    hash_tables(out)?;
    not_arrays(out)?;

    out.flush()?;
    info!("finished the tour");
    Ok(())
}
