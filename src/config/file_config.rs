//! Provides the `FileConfig` object, used to access config values from a config file.

use super::Config;
use crate::util::LogLevel;
use optional::ext::OptionExt;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Contains the config values from a config file. Keys missing from the file don't override
/// anything.
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// General config options
    general: GeneralOptions,
    /// Value check config options
    check: CheckOptions,
}

/// Contains the config values from the `[general]` section of a config file.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GeneralOptions {
    /// The log level to use.
    log_level: Option<LogLevel>,
}

/// Contains the config values from the `[check]` section of a config file.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CheckOptions {
    /// Whether empty strings, arrays and objects count as absent.
    empty_is_absent: Option<bool>,
    /// Whether the first absent value is an error.
    strict: Option<bool>,
}

impl FileConfig {
    /// Returns a `FileConfig` with every key set to the value it has in a given `Config`.
    fn from_config(config: &Config) -> Self {
        FileConfig {
            general: GeneralOptions {
                log_level: Some(config.log_level),
            },
            check: CheckOptions {
                empty_is_absent: Some(config.empty_is_absent),
                strict: Some(config.strict),
            },
        }
    }

    /// Writes a config file with all values set to their config defaults to a given writer.
    pub fn write_default_to_writer<W>(writer: &mut W) -> anyhow::Result<()>
    where
        W: Write,
    {
        let serialised = toml::to_string(&FileConfig::from_config(&Config::default()))?;
        write!(writer, "{}", serialised)?;
        Ok(())
    }

    /// Returns a new `FileConfig` built from a given config file reader.
    pub fn from_file<R>(file: &mut R) -> anyhow::Result<Self>
    where
        R: Read,
    {
        let mut file_contents = String::new();
        file.read_to_string(&mut file_contents)?;
        Ok(toml::from_str(&file_contents)?)
    }

    /// Applies the config values set in the file to a given `Config`, returning a new `Config`
    /// with the values set.
    pub fn apply_to_config(self, config: Config) -> Config {
        Config {
            log_level: self.general.log_level.into_optional().or_else(config.log_level),
            empty_is_absent: self
                .check
                .empty_is_absent
                .into_optional()
                .or_else(config.empty_is_absent),
            strict: self.check.strict.into_optional().or_else(config.strict),
        }
    }
}
