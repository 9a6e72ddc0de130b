//! Provides all error types the library uses.

use thiserror::Error;

/// Represents all the ways an [`Optional`](crate::Optional) or a guard function can be misused.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum OptionalError {
    /// Returned when unwrapping an empty [`Optional`](crate::Optional).
    #[error("No value present")]
    NoValuePresent,
    /// An argument failed a null or empty check. Carries either the caller's custom message or
    /// the guard's default message.
    #[error("{0}")]
    InvalidArgument(String),
}
