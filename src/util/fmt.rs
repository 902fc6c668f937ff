use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when formatted with [`Debug`], so that pre-formatted
/// entries aren't quoted inside of a debug list.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
