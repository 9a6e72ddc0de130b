//! Provides the `StrExt` trait, which provides functions commonly used on strings.

/// Provides functions commonly used on strings.
pub trait StrExt: Sized {
    /// Returns `Some(self)` if `self` isn't empty, otherwise returns `None`.
    fn map_to_option(self) -> Option<Self>;
}

impl<S> StrExt for S
where
    S: AsRef<str>,
{
    fn map_to_option(self) -> Option<Self> {
        if self.as_ref().is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
