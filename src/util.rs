//! Provides several utilities used by the command line tool.

pub mod env;
mod log_level;

pub use log_level::LogLevel;
