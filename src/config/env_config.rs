//! Provides the `EnvConfig` object, used to access config values from environment variables.

use super::Config;
use crate::{util, APP_PREFIX};
use anyhow::Context;
use optional::ext::OptionExt;
use serde::Deserialize;

/// Contains the config values set in environment variables. Unset variables don't override
/// anything.
#[derive(Debug, Deserialize, Default)]
pub struct EnvConfig {
    /// The log level to use.
    log_level: Option<util::LogLevel>,
    /// Whether empty strings, arrays and objects count as absent.
    empty_is_absent: Option<bool>,
    /// Whether the first absent value is an error.
    strict: Option<bool>,
}

impl EnvConfig {
    /// Returns a new `EnvConfig` built from the program's environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        envy::prefixed(APP_PREFIX)
            .from_env::<Self>()
            .with_context(|| {
                format!(
                    "Failed to load config from environment variables:\n{}",
                    util::env::dump_string(APP_PREFIX)
                )
            })
    }

    /// Applies the set config values to a given `Config`, returning a new `Config` with the
    /// values set.
    pub fn apply_to_config(self, config: Config) -> Config {
        Config {
            log_level: self.log_level.into_optional().or_else(config.log_level),
            empty_is_absent: self
                .empty_is_absent
                .into_optional()
                .or_else(config.empty_is_absent),
            strict: self.strict.into_optional().or_else(config.strict),
        }
    }
}
