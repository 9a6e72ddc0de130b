//! An immutable [`Optional`](Optional) container for values that may be missing, along with
//! null and empty checks for strings, arrays and arbitrary values.

#![warn(clippy::if_not_else)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod error;
pub mod ext;
pub mod guard;
mod nullable;
mod optional;

pub use error::OptionalError;
pub use guard::{
    is_not_null_or_empty, is_not_null_or_empty_array, is_not_null_or_undefined, is_null_or_empty,
    is_null_or_empty_array, is_null_or_undefined, require_non_empty, require_non_null,
};
pub use nullable::Nullable;
pub use optional::Optional;
