//! Runtime configuration for the counter.
//!
//! [`Config`] is the single source of truth for every runtime option,
//! independent of where it came from. Resolution order, lowest first:
//!
//! 1. [`Config::default`]
//! 2. a TOML file (`--config` / `COUNTER_CONFIG`)
//! 3. CLI flags and their environment variables
//!
//! # Example file
//!
//! ```toml
//! start = 10
//! mouse = false
//! color_mode = "never"
//! margin_left = 4
//!
//! [keymap]
//! increment = ["+", "l", "right"]
//! decrement = ["-", "h", "left"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::keymap::KeyMap;
use crate::state::CounterState;
use crate::view::ViewOptions;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Counter value at startup.
    pub start: u32,

    /// Whether mouse clicks activate buttons.
    pub mouse: bool,

    /// Whether to use the alternate screen buffer.
    pub alt_screen: bool,

    /// Color output mode.
    pub color_mode: ColorMode,

    /// Columns before every line.
    pub margin_left: u16,

    /// Blank rows above the widget.
    pub margin_top: u16,

    /// Whether to show the key hint line in interactive mode.
    pub show_help: bool,

    /// Key bindings.
    pub keymap: KeyMap,

    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,

    /// Where to write logs. `None` means stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: 0,
            mouse: true,
            alt_screen: true,
            color_mode: ColorMode::Auto,
            margin_left: 2,
            margin_top: 1,
            show_help: true,
            keymap: KeyMap::default(),
            verbosity: 0,
            log_file: None,
        }
    }
}

impl Config {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if the text is not a valid config;
    /// `origin` is reported as the file name.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] or [`Error::ConfigParse`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Build the effective config: defaults, then the config file named by
    /// the CLI (if any), then CLI overrides. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the result
    /// fails [`validate`](Self::validate).
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI flags on top of this config. Flags that were not given
    /// leave the config untouched.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(start) = cli.start {
            self.start = start;
        }
        if cli.no_mouse {
            self.mouse = false;
        }
        if cli.no_alt_screen {
            self.alt_screen = false;
        }
        if cli.force_color {
            self.color_mode = ColorMode::Always;
        } else if cli.no_color {
            self.color_mode = ColorMode::Never;
        }
        if cli.log_file.is_some() {
            self.log_file.clone_from(&cli.log_file);
        }
        self.verbosity = self.verbosity.max(cli.verbose);
    }

    /// Check the config for unusable settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyBinding`] for a broken keymap.
    pub fn validate(&self) -> Result<()> {
        self.keymap.validate()
    }

    /// Whether output should be styled.
    #[must_use]
    pub fn use_color(&self) -> bool {
        match self.color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()),
        }
    }

    /// The state the widget is mounted with.
    #[must_use]
    pub const fn initial_state(&self) -> CounterState {
        CounterState::with_counter(self.start)
    }

    /// Layout options for the interactive view.
    #[must_use]
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            color: self.use_color(),
            margin_left: self.margin_left,
            margin_top: self.margin_top,
            show_help: self.show_help,
        }
    }

    /// Tracing level name for the configured verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style unless `NO_COLOR` is set to a non-empty value.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["counter"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.start, 0);
        assert!(config.mouse);
        assert!(config.alt_screen);
        assert_eq!(config.color_mode, ColorMode::Auto);
        assert_eq!(config.log_level(), "warn");
        assert_eq!(config.initial_state(), CounterState::new());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            "start = 12\ncolor_mode = \"never\"\n",
            Path::new("inline.toml"),
        )
        .unwrap();
        assert_eq!(config.start, 12);
        assert_eq!(config.color_mode, ColorMode::Never);
        assert!(config.mouse);
        assert_eq!(config.keymap, KeyMap::default());
    }

    #[test]
    fn negative_start_is_a_parse_error() {
        let err = Config::from_toml_str("start = -1", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn cli_overrides_config() {
        let mut config = Config {
            start: 4,
            verbosity: 1,
            ..Config::default()
        };
        config.apply_cli(&cli(&["--start", "9", "--no-mouse", "--no-alt-screen", "-vvv"]));
        assert_eq!(config.start, 9);
        assert!(!config.mouse);
        assert!(!config.alt_screen);
        assert_eq!(config.verbosity, 3);
        assert_eq!(config.log_level(), "trace");
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let mut config = Config {
            start: 4,
            mouse: false,
            log_file: Some(PathBuf::from("from-file.log")),
            ..Config::default()
        };
        config.apply_cli(&cli(&["--start", "4"]));
        assert_eq!(config.start, 4);
        assert!(!config.mouse);
        assert_eq!(config.log_file, Some(PathBuf::from("from-file.log")));
    }

    #[test]
    fn color_flags_map_to_modes() {
        let mut flags = cli(&[]);
        flags.no_color = false;
        flags.force_color = true;
        let mut config = Config::default();
        config.apply_cli(&flags);
        assert_eq!(config.color_mode, ColorMode::Always);
        assert!(config.use_color());

        flags.force_color = false;
        flags.no_color = true;
        let mut config = Config::default();
        config.apply_cli(&flags);
        assert_eq!(config.color_mode, ColorMode::Never);
        assert!(!config.use_color());

        let both = cli(&["--no-color", "--force-color"]);
        let mut config = Config::default();
        config.apply_cli(&both);
        assert_eq!(config.color_mode, ColorMode::Always);
    }

    #[test]
    fn view_options_follow_config() {
        let config = Config {
            color_mode: ColorMode::Never,
            margin_left: 4,
            margin_top: 0,
            show_help: false,
            ..Config::default()
        };
        let opts = config.view_options();
        assert!(!opts.color);
        assert_eq!(opts.margin_left, 4);
        assert_eq!(opts.margin_top, 0);
        assert!(!opts.show_help);
    }

    #[test]
    fn resolve_rejects_conflicting_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.toml");
        fs::write(&path, "[keymap]\nquit = [\"q\", \"+\"]\n").unwrap();

        let err = Config::resolve(&cli(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, Error::KeyBinding { .. }));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
