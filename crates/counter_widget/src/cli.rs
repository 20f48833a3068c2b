//! Command-line interface for the `counter` binary.
//!
//! # Examples
//!
//! ```bash
//! # Interactive widget starting at zero
//! counter
//!
//! # Start at 7, no mouse, plain colors
//! counter --start 7 --no-mouse --no-color
//!
//! # Headless: press decrement once at zero and print the result
//! counter render --press decrement
//!
//! # Headless JSON element tree
//! counter render --start 3 --press increment --format json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::state::Action;

/// A counter with increment and decrement buttons that never goes below zero.
#[derive(Parser, Debug, Clone)]
#[command(name = "counter", author, version, about)]
pub struct Cli {
    /// Starting counter value
    #[arg(long, short = 's', global = true, env = "COUNTER_START")]
    pub start: Option<u32>,

    /// Path to a TOML config file
    #[arg(long, short = 'c', global = true, env = "COUNTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Force color output off (any non-empty `NO_COLOR` counts)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Force color output on (overrides `--no-color` and `NO_COLOR`)
    #[arg(long, global = true)]
    pub force_color: bool,

    /// Run in the main terminal buffer instead of the alternate screen
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "COUNTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Apply presses without a terminal and print the rendered widget
    Render(RenderArgs),
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Button to press, in order (repeatable)
    #[arg(long, short = 'p', value_enum)]
    pub press: Vec<Action>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = RenderFormat::Plain)]
    pub format: RenderFormat,
}

/// Output formats for `render`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    /// Plain text
    #[default]
    Plain,
    /// Text with ANSI styling
    Ansi,
    /// The element tree as JSON
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Whether the interactive widget will run (no subcommand given).
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.command.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["counter"]).unwrap();
        assert!(!cli.no_mouse);
        assert!(!cli.no_alt_screen);
        assert!(!cli.force_color);
        assert_eq!(cli.verbose, 0);
        assert!(cli.is_interactive());
    }

    #[test]
    fn cli_parses_start() {
        let cli = Cli::try_parse_from(["counter", "--start", "7"]).unwrap();
        assert_eq!(cli.start, Some(7));

        let cli = Cli::try_parse_from(["counter", "-s", "9"]).unwrap();
        assert_eq!(cli.start, Some(9));
    }

    #[test]
    fn cli_rejects_negative_start() {
        assert!(Cli::try_parse_from(["counter", "--start", "-1"]).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli =
            Cli::try_parse_from(["counter", "--no-mouse", "--no-alt-screen", "-vv"]).unwrap();
        assert!(cli.no_mouse);
        assert!(cli.no_alt_screen);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_accepts_both_color_flags() {
        let cli = Cli::try_parse_from(["counter", "--no-color", "--force-color"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.force_color);
    }

    #[test]
    fn cli_parses_render_presses_in_order() {
        let cli = Cli::try_parse_from([
            "counter",
            "render",
            "--press",
            "decrement",
            "-p",
            "increment",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Render(args)) => {
                assert_eq!(args.press, vec![Action::Decrement, Action::Increment]);
                assert_eq!(args.format, RenderFormat::Json);
            }
            None => panic!("Expected Render command"),
        }
    }

    #[test]
    fn cli_global_start_after_subcommand() {
        let cli = Cli::try_parse_from(["counter", "render", "--start", "3"]).unwrap();
        assert_eq!(cli.start, Some(3));
        assert!(!cli.is_interactive());
    }

    #[test]
    fn cli_rejects_unknown_press() {
        assert!(Cli::try_parse_from(["counter", "render", "--press", "reset"]).is_err());
    }
}
