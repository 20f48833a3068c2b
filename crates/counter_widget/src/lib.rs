#![forbid(unsafe_code)]

//! # Counter Widget
//!
//! A counter with an increment and a decrement button. The value never goes
//! below zero: pressing decrement at zero leaves it there and shows an
//! inline error message, which the next increment hides again.
//!
//! ## Public Modules
//!
//! - [`state`] - The counter state and its two transitions
//! - [`element`] - Element tree with test ids
//! - [`view`] - Terminal layout, styling and mouse hitboxes
//! - [`widget`] - The widget as a [`tea_runtime::Model`]
//! - [`keymap`] - Key bindings
//! - [`config`] - Runtime configuration
//! - [`cli`] - Command-line interface
//! - [`logging`] - Tracing subscriber setup
//! - [`app`] - Interactive and headless entry points
//! - [`testing`] - Mount-and-query harness for tests
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p counter_widget -- --start 3
//! cargo run -p counter_widget -- render --press decrement
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod element;
pub mod error;
pub mod keymap;
pub mod logging;
pub mod state;
pub mod testing;
pub mod view;
pub mod widget;

pub use error::{Error, Result};
pub use state::{Action, CounterState};
pub use widget::{CounterMsg, CounterWidget};
