//! Error types for the counter application.
//!
//! Refusing a decrement at zero is not an error in this sense: it is part
//! of the widget's state (see [`CounterState::display_error`]). The variants
//! here cover the application around the widget: configuration, logging
//! setup, output and the terminal runtime.
//!
//! [`CounterState::display_error`]: crate::state::CounterState::display_error

use std::io;
use std::path::PathBuf;

/// Errors raised while configuring or running the counter.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The terminal runtime failed.
    #[error(transparent)]
    Runtime(#[from] tea_runtime::Error),

    /// A config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// File that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A config file is not valid TOML for [`Config`](crate::config::Config).
    #[error("invalid config file {}: {source}", path.display())]
    ConfigParse {
        /// File that was being parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A key binding is unusable.
    #[error("invalid key binding {key:?}: {reason}")]
    KeyBinding {
        /// The key name as written in the config.
        key: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// Writing output failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Serializing the element tree failed.
    #[error("failed to encode element tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized [`Result`] type for counter operations.
pub type Result<T> = std::result::Result<T, Error>;
