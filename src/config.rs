//! The configuration framework for `nullcheck`.
//!
//! A `Config` starts from its defaults and is layered with a config file, environment variables
//! and finally the command line options, each later source overriding the earlier ones.

mod env_config;
mod file_config;

use crate::{opts::Opts, util::LogLevel};
use anyhow::Context;
use env_config::EnvConfig;
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

pub use file_config::FileConfig;

pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "nullcheck.toml";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    log_level: LogLevel,
    empty_is_absent: bool,
    strict: bool,
}

pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            config: Config::default(),
        }
    }

    /// Loads a `.env` file if one exists and reads the environment config.
    fn get_env_config() -> anyhow::Result<EnvConfig> {
        dotenv::dotenv().ok();
        EnvConfig::from_env()
    }

    /// Layers the config file, the environment and the command line options on top of the
    /// default config. A missing config file is only an error if it was given explicitly.
    pub fn from_opts(opts: &Opts) -> anyhow::Result<Self> {
        let mut builder = Builder::new();

        if !opts.no_conf {
            match File::open(&opts.config) {
                Ok(mut file) => builder = builder.apply_config_file(&mut file)?,
                Err(e)
                    if e.kind() == io::ErrorKind::NotFound
                        && opts.config == Path::new(DEFAULT_CONFIG_FILE_LOCATION) => {}
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to open config file {}", opts.config.display())
                    })
                }
            }
        }

        if !opts.no_env {
            builder = builder.apply_env()?;
        }

        Ok(builder.apply_opts(opts))
    }

    pub fn apply_config_file<R>(self, file: &mut R) -> anyhow::Result<Self>
    where
        R: Read,
    {
        let file_config = FileConfig::from_file(file)?;
        Ok(Builder {
            config: file_config.apply_to_config(self.config),
        })
    }

    pub fn apply_env(self) -> anyhow::Result<Self> {
        let env_config = Builder::get_env_config()?;
        Ok(Builder {
            config: env_config.apply_to_config(self.config),
        })
    }

    /// Applies the command line options. Flags can only switch a setting on.
    pub fn apply_opts(self, opts: &Opts) -> Self {
        Builder {
            config: Config {
                log_level: opts.log_level.unwrap_or(self.config.log_level),
                empty_is_absent: opts.empty_is_absent || self.config.empty_is_absent,
                strict: opts.strict || self.config.strict,
            },
        }
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Config {
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn empty_is_absent(&self) -> bool {
        self.empty_is_absent
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}
