//! Provides the `OptionExt` trait for moving between `Option` and [`Optional`].

use crate::{Nullable, Optional};

/// Provides conversions from a standard `Option` into an [`Optional`].
pub trait OptionExt<T> {
    /// Converts this option into an `Optional`. `Some` of an absence-equivalent value becomes an
    /// empty `Optional`.
    fn into_optional(self) -> Optional<T>;
}

impl<T> OptionExt<T> for Option<T>
where
    T: Nullable,
{
    fn into_optional(self) -> Optional<T> {
        Optional::from(self)
    }
}
