use std::io;

use derive_more::{Display, Error, From};

use crate::collections::contiguous::IndexOutOfBounds;

/// An error which stopped the tour part way through.
#[derive(Debug, Display, Error, From)]
pub enum TourError {
    /// Writing the tour's output failed.
    #[display("Failed to write the tour: {_0}")]
    Io(io::Error),
    /// A demonstration accessed a collection outside of its bounds.
    #[display("A demonstration went out of bounds: {_0}")]
    IndexOutOfBounds(IndexOutOfBounds),
}
