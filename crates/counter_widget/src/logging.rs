//! Tracing subscriber setup.
//!
//! The interactive widget owns the terminal, so log lines written to stderr
//! would land in the middle of the frame. With `--log-file` everything goes
//! to that file; without it, interactive runs only let warnings through to
//! stderr. `COUNTER_LOG` takes an [`EnvFilter`] directive and wins over the
//! verbosity flags.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{Error, Result};

/// Environment variable holding a filter directive, e.g. `counter_widget=trace`.
pub const LOG_ENV: &str = "COUNTER_LOG";

/// Build the filter for `config`.
///
/// Interactive runs without a log file are capped at `warn`.
#[must_use]
pub fn filter(config: &Config, interactive: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if interactive && config.log_file.is_none() {
            "warn"
        } else {
            config.log_level()
        };
        EnvFilter::new(level)
    })
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`Error::Io`] if the log file cannot be opened and
/// [`Error::Logging`] if a subscriber is already installed.
pub fn init(config: &Config, interactive: bool) -> Result<()> {
    let filter = filter(config, interactive);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder
            .with_ansi(config.use_color())
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| Error::Logging(e.to_string()))?;
    tracing::debug!(
        level = config.log_level(),
        file = ?config.log_file,
        "logging initialized"
    );
    Ok(())
}
