//! Provides the [`Opts`](Opts) struct, used to read and access the program's command line
//! arguments.

use crate::{config, util::LogLevel};
use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;
use strum::VariantNames;

/// Stores command line parameters.
#[derive(Debug)]
pub struct Opts {
    /// Path to the config file.
    pub config: PathBuf,
    /// Whether to skip applying configuration from the environment variables.
    pub no_env: bool,
    /// Whether to skip applying configuration from the configuration file.
    pub no_conf: bool,
    /// The log level to use.
    pub log_level: Option<LogLevel>,
    /// Whether empty strings, arrays and objects count as absent.
    pub empty_is_absent: bool,
    /// Whether the first absent value is an error.
    pub strict: bool,
    /// Whether to print a default config file and exit.
    pub write_default_config: bool,
    /// The values to check, in the order they were given.
    pub values: Vec<String>,
}

impl Opts {
    /// Builds a new `clap::App` used to parse a given set of command line parameters.
    fn build_app() -> App<'static, 'static> {
        App::new("nullcheck")
            .version(clap::crate_version!())
            .author(clap::crate_authors!())
            .about("Reports whether JSON values are present, empty or null")
            .arg(
                Arg::with_name("config")
                    .short("c")
                    .long("config")
                    .value_name("FILE")
                    .default_value(config::DEFAULT_CONFIG_FILE_LOCATION)
                    .help("Sets a custom config file")
                    .takes_value(true),
            )
            .arg(Arg::with_name("no-env").long("no-env").help(
                "Skip loading configuration values from the environment variables.",
            ))
            .arg(
                Arg::with_name("no-conf")
                    .long("no-conf")
                    .help("Skip loading configuration values from the config file."),
            )
            .arg(
                Arg::with_name("log-level")
                    .long("log-level")
                    .value_name("LOG LEVEL")
                    .possible_values(LogLevel::VARIANTS)
                    .case_insensitive(true)
                    .takes_value(true)
                    .help("Specify the log level to use."),
            )
            .arg(
                Arg::with_name("empty-is-absent")
                    .short("e")
                    .long("empty-is-absent")
                    .help("Treat empty strings, arrays and objects as absent values."),
            )
            .arg(
                Arg::with_name("strict")
                    .short("s")
                    .long("strict")
                    .help("Fail on the first absent value instead of reporting it."),
            )
            .arg(
                Arg::with_name("write-default-config")
                    .long("write-default-config")
                    .help("Print a config file with every value set to its default and exit."),
            )
            .arg(
                Arg::with_name("VALUE")
                    .multiple(true)
                    .required_unless("write-default-config")
                    .help(
                        "A value to check. Parsed as JSON; anything that isn't valid JSON is \
                         checked as a string.",
                    ),
            )
    }

    /// Returns a new `Opts` object from a given set of matched command line parameters.
    fn from_matches(matches: &ArgMatches<'_>) -> anyhow::Result<Self> {
        let log_level = match matches.value_of("log-level") {
            Some(level) => Some(
                level
                    .to_lowercase()
                    .parse()
                    .with_context(|| format!("Invalid log level: {}", level))?,
            ),
            None => None,
        };

        Ok(Opts {
            config: matches
                .value_of_os("config")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE_LOCATION)),
            no_env: matches.is_present("no-env"),
            no_conf: matches.is_present("no-conf"),
            log_level,
            empty_is_absent: matches.is_present("empty-is-absent"),
            strict: matches.is_present("strict"),
            write_default_config: matches.is_present("write-default-config"),
            values: matches
                .values_of("VALUE")
                .map(|values| values.map(String::from).collect())
                .unwrap_or_default(),
        })
    }

    /// Returns a new `Opts` object built from the program's command line parameters.
    pub fn get() -> anyhow::Result<Opts> {
        Opts::from_matches(&Opts::build_app().get_matches())
    }

    #[allow(dead_code)]
    /// Returns a new `Opts` object built from custom command line parameters.
    pub fn custom_args(args: &[&str]) -> anyhow::Result<Opts> {
        let mut full_args = vec!["nullcheck"];
        full_args.extend_from_slice(args);
        Opts::from_matches(&Opts::build_app().get_matches_from_safe(&full_args)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let opts = Opts::custom_args(&["null"])?;

        assert_eq!(opts.config, Path::new(config::DEFAULT_CONFIG_FILE_LOCATION));
        assert!(!opts.no_env);
        assert!(!opts.no_conf);
        assert_eq!(opts.log_level, None);
        assert!(!opts.empty_is_absent);
        assert!(!opts.strict);
        assert_eq!(opts.values, vec!["null"]);
        Ok(())
    }

    #[test]
    fn flags_and_values() -> anyhow::Result<()> {
        let opts = Opts::custom_args(&[
            "-c",
            "other.toml",
            "--no-env",
            "--log-level",
            "Trace",
            "-e",
            "--strict",
            "1",
            "\"\"",
            "[]",
        ])?;

        assert_eq!(opts.config, Path::new("other.toml"));
        assert!(opts.no_env);
        assert_eq!(opts.log_level, Some(LogLevel::Trace));
        assert!(opts.empty_is_absent);
        assert!(opts.strict);
        assert_eq!(opts.values, vec!["1", "\"\"", "[]"]);
        Ok(())
    }

    #[test]
    fn values_are_required() {
        assert!(Opts::custom_args(&[]).is_err());
        assert!(Opts::custom_args(&["--write-default-config"]).is_ok());
    }

    #[test]
    fn unknown_log_level() {
        assert!(Opts::custom_args(&["--log-level", "loud", "1"]).is_err());
    }
}
