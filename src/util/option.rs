//! Extensions to [`Option`].

pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`], but marks the None branch as [`unreachable!`]. Using this
    /// method states that the surrounding code has already ruled out None.
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("a value established as present was missing"),
        }
    }
}
