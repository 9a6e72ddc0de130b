//! Provides extension traits of commonly used functions on strings and options.

mod option_ext;
mod str_ext;

pub use option_ext::OptionExt;
pub use str_ext::StrExt;
