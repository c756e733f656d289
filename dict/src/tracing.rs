//! Logging

use std::io;

use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Error;
use crate::config::{Format, LogConfig};

/// Returns the filter directives from `RUST_LOG`, falling back to the configured ones.
fn filter(config: &LogConfig) -> Result<EnvFilter, Error> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.filter).map_err(Error::LogFilter)
    })
}

/// Installs the global subscriber, writing log lines to standard error.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid, or if a global subscriber has already
/// been installed.
pub fn try_init(config: &LogConfig) -> Result<(), Error> {
    let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let layer = match config.format {
        Format::Compact => layer.compact().boxed(),
        Format::Pretty => layer.pretty().boxed(),
        Format::Json => layer.json().boxed(),
    };

    // initialize tracing
    tracing_subscriber::registry()
        .with(filter(config)?)
        .with(layer)
        .try_init()
        .map_err(Error::Logging)?;

    debug!(format = ?config.format, "tracing initialized");

    Ok(())
}
