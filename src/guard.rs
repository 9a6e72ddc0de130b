//! Null and empty checks, and the guard functions built on them.
//!
//! The `is_*` predicates only classify. The `require_*` guards hand their input back unchanged
//! when it passes, and otherwise return an [`OptionalError::InvalidArgument`] carrying either the
//! caller's message or the guard's default message.

use crate::{error::OptionalError, ext::StrExt, Nullable};

/// The default message of [`require_non_null`] and [`Optional::of`](crate::Optional::of).
pub const NULLABLE_ARGUMENT: &str = "nullable argument";
/// The default message of [`require_non_empty`].
pub const NULLABLE_OR_EMPTY_ARGUMENT: &str = "nullable or empty argument";

/// Returns whether a given string is missing or empty.
pub fn is_null_or_empty<S>(value: Option<S>) -> bool
where
    S: AsRef<str>,
{
    value.and_then(StrExt::map_to_option).is_none()
}

/// Returns whether a given string is present and not empty.
pub fn is_not_null_or_empty<S>(value: Option<S>) -> bool
where
    S: AsRef<str>,
{
    !is_null_or_empty(value)
}

/// Returns whether a given sequence is missing or has no elements.
pub fn is_null_or_empty_array<A, T>(value: Option<A>) -> bool
where
    A: AsRef<[T]>,
{
    value.map_or(true, |items| items.as_ref().is_empty())
}

/// Returns whether a given sequence is present and has at least one element.
pub fn is_not_null_or_empty_array<A, T>(value: Option<A>) -> bool
where
    A: AsRef<[T]>,
{
    !is_null_or_empty_array(value)
}

/// Returns whether a given value is absence-equivalent. Zero, `false` and empty strings are not.
pub fn is_null_or_undefined<T>(value: &T) -> bool
where
    T: Nullable + ?Sized,
{
    value.is_null()
}

/// Returns whether a given value is not absence-equivalent.
pub fn is_not_null_or_undefined<T>(value: &T) -> bool
where
    T: Nullable + ?Sized,
{
    !value.is_null()
}

/// Returns a given value unchanged if it isn't absence-equivalent.
///
/// Returns an error carrying `message` if it's given and non-empty, otherwise
/// [`NULLABLE_ARGUMENT`].
pub fn require_non_null<T>(value: T, message: Option<&str>) -> Result<T, OptionalError>
where
    T: Nullable,
{
    if value.is_null() {
        Err(invalid_argument(message, NULLABLE_ARGUMENT))
    } else {
        Ok(value)
    }
}

/// Returns a given string unchanged if it's present and not empty.
///
/// Returns an error carrying `message` if it's given and non-empty, otherwise
/// [`NULLABLE_OR_EMPTY_ARGUMENT`].
pub fn require_non_empty<S>(value: Option<S>, message: Option<&str>) -> Result<S, OptionalError>
where
    S: AsRef<str>,
{
    value
        .and_then(StrExt::map_to_option)
        .ok_or_else(|| invalid_argument(message, NULLABLE_OR_EMPTY_ARGUMENT))
}

/// Builds an invalid argument error from a custom message, falling back to a default when the
/// custom message is missing or empty.
fn invalid_argument(message: Option<&str>, default: &str) -> OptionalError {
    let message = message.and_then(StrExt::map_to_option).unwrap_or(default);
    OptionalError::InvalidArgument(message.to_owned())
}
