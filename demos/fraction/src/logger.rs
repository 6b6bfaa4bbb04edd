//! Logger set-up for the demo.
//!
//! The level comes from the `PD_LOG_LEVEL` environment variable, then the
//! config file, then `info`.  Warnings and errors go to stderr, everything
//! else to stdout.

use std::env;
use std::fmt::{Arguments, Display};
use std::io::IsTerminal;

use anyhow::{Result, bail};
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};

const DEFAULT_LOG_LEVEL: &str = "info";

pub fn init(level_from_config: Option<&str>) -> Result<()> {
    let level = env::var("PD_LOG_LEVEL")
        .unwrap_or_else(|_| level_from_config.unwrap_or(DEFAULT_LOG_LEVEL).to_string());

    let level = match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        unknown => bail!("Unknown log level: {unknown}"),
    };

    let colours = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);
    let colour_stdout = std::io::stdout().is_terminal();
    let colour_stderr = std::io::stderr().is_terminal();

    Dispatch::new()
        .chain(
            Dispatch::new()
                .filter(|metadata| metadata.level() > LevelFilter::Warn)
                .format(move |out, message, record| {
                    write_log(out, message, record, colour_stdout, &colours);
                })
                .level(level)
                .chain(std::io::stdout()),
        )
        .chain(
            Dispatch::new()
                .format(move |out, message, record| {
                    write_log(out, message, record, colour_stderr, &colours);
                })
                .level(level.min(LevelFilter::Warn))
                .chain(std::io::stderr()),
        )
        .apply()?;
    Ok(())
}

fn write_log(
    out:     FormatCallback,
    message: &Arguments,
    record:  &Record,
    colour:  bool,
    colours: &ColoredLevelConfig,
) {
    if colour {
        finish(out, colours.color(record.level()), record.target(), message);
    } else {
        finish(out, record.level(), record.target(), message);
    }
}

fn finish<T: Display>(out: FormatCallback, level: T, target: &str, message: &Arguments) {
    out.finish(format_args!("[{level} {target}] {message}"));
}
