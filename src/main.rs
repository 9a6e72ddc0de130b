//! `nullcheck` reports whether JSON values given on the command line are present, empty or null.

#![warn(clippy::if_not_else)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::missing_docs_in_private_items)]

mod check;
mod config;
mod log;
mod opts;
mod util;

use ::log::*;
use config::{Builder, FileConfig};
use opts::Opts;
use std::io;

/// The prefix used with every environment value related to the program configuration.
pub const APP_PREFIX: &str = "NULLCHECK_";

fn main() -> anyhow::Result<()> {
    let opts = Opts::get()?;

    if opts.write_default_config {
        return FileConfig::write_default_to_writer(&mut io::stdout());
    }

    let config = Builder::from_opts(&opts)?.build();
    log::setup_logging(&config)?;
    debug!("{:?}", opts);
    debug!("{:?}", config);

    let checked = check::check_all(&opts.values, &config)?;
    info!("Checked {} values", checked.len());

    for line in &checked {
        println!("{}", line);
    }

    Ok(())
}
