//! Sets up the program's log output.

use crate::config::Config;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use std::{io, time::Instant};

/// Routes all log records at or above the config's log level to stderr, prefixed with the
/// seconds elapsed since startup, a coloured level and the record's target. Stdout is left to
/// the check report.
pub fn setup_logging(config: &Config) -> anyhow::Result<()> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);
    let start = Instant::now();

    Dispatch::new()
        .format(move |out, msg, record| {
            out.finish(format_args!(
                "[{: >8.3}] [{: >5}] {{{}}} {}",
                start.elapsed().as_secs_f32(),
                colors.color(record.level()),
                record.target(),
                msg
            ))
        })
        .level(config.log_level().into())
        .chain(io::stderr())
        .apply()?;
    Ok(())
}
