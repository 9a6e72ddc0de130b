//! Classifies command line values as present, empty or null.
//!
//! Each value is parsed as JSON, so `null` is the only absent value unless empty values are
//! configured to count as absent too. Anything that isn't valid JSON is checked as a string.

use crate::config::Config;
use ::log::{debug, trace};
use anyhow::Context;
use optional::{
    guard::{self, is_null_or_empty, is_null_or_empty_array},
    Optional, OptionalError,
};
use serde_json::Value;
use std::fmt::{self, Formatter};
use strum_macros::Display;

/// The outcome of checking a single value.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Presence {
    /// The value is there and, if it's an empty string, array or object, empty values count as
    /// present.
    Present,
    /// The value is an empty string, array or object and empty values count as absent.
    Empty,
    /// The value is JSON `null`.
    Null,
}

optional::never_null!(Presence);

/// A single checked command line value.
#[derive(Debug, PartialEq, Clone)]
pub struct Checked {
    /// The value as it was given on the command line.
    pub argument: String,
    /// How the value was classified.
    pub presence: Presence,
}

impl fmt::Display for Checked {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.argument, self.presence)
    }
}

/// Parses a command line value as JSON, falling back to a JSON string holding the value as-is.
pub fn parse_value(argument: &str) -> Value {
    serde_json::from_str(argument).unwrap_or_else(|_| Value::String(argument.to_owned()))
}

/// Returns whether a given value is an empty string, array or object.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => is_null_or_empty(Some(s)),
        Value::Array(items) => is_null_or_empty_array(Some(items)),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Classifies a given value.
pub fn classify(value: Value, empty_is_absent: bool) -> Presence {
    let value = Optional::of_nullable(value);
    if value.is_empty() {
        return Presence::Null;
    }

    value
        .filter(|value| !empty_is_absent || !is_blank(value))
        .map(|_| Presence::Present)
        .or_else(Presence::Empty)
}

/// Returns a given value unchanged if it's present, otherwise returns the guard error that
/// rejected it.
pub fn require_present(value: Value, empty_is_absent: bool) -> Result<Value, OptionalError> {
    let value = guard::require_non_null(value, None)?;
    if empty_is_absent && is_blank(&value) {
        // blank strings, arrays and objects all fail like a missing string
        guard::require_non_empty(None::<&str>, None)?;
    }

    Ok(value)
}

/// Checks every given command line value. In strict mode the first absent value is an error.
pub fn check_all<S>(arguments: &[S], config: &Config) -> anyhow::Result<Vec<Checked>>
where
    S: AsRef<str>,
{
    arguments
        .iter()
        .map(|argument| {
            let argument = argument.as_ref();
            let value = parse_value(argument);
            trace!("Parsed {:?} as {:?}", argument, value);

            if config.strict() {
                require_present(value.clone(), config.empty_is_absent())
                    .with_context(|| format!("Value {:?} is absent", argument))?;
            }

            let presence = classify(value, config.empty_is_absent());
            debug!("{:?} is {}", argument, presence);

            Ok(Checked {
                argument: argument.to_owned(),
                presence,
            })
        })
        .collect()
}
