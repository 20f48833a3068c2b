//! Key bindings for the counter.
//!
//! | Key              | Action    |
//! |------------------|-----------|
//! | `+` `=` `k` `↑`  | Increment |
//! | `-` `_` `j` `↓`  | Decrement |
//! | `q` `Esc`        | Quit      |
//! | `Ctrl+C`         | Force quit (handled by the runtime) |
//!
//! Bindings are key names as printed by [`KeyMsg`]'s `Display`: a single
//! character for printable keys, otherwise names like `up`, `down`, `esc`,
//! `enter`. They can be overridden from the config file.

use serde::{Deserialize, Serialize};
use tea_runtime::KeyMsg;

use crate::error::{Error, Result};
use crate::state::Action;

/// What a key press resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Run a counter action.
    Counter(Action),
    /// Leave the program.
    Quit,
}

/// Key name lists per action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMap {
    /// Keys that increment.
    pub increment: Vec<String>,
    /// Keys that decrement.
    pub decrement: Vec<String>,
    /// Keys that quit.
    pub quit: Vec<String>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            increment: names(&["+", "=", "k", "up"]),
            decrement: names(&["-", "_", "j", "down"]),
            quit: names(&["q", "esc"]),
        }
    }
}

fn names(keys: &[&str]) -> Vec<String> {
    keys.iter().map(ToString::to_string).collect()
}

impl KeyMap {
    /// Resolve a key press.
    #[must_use]
    pub fn lookup(&self, key: &KeyMsg) -> Option<KeyAction> {
        if key.paste {
            return None;
        }
        let name = key.to_string();
        let bound = |list: &[String]| list.iter().any(|k| *k == name);

        if bound(self.increment.as_slice()) {
            Some(KeyAction::Counter(Action::Increment))
        } else if bound(self.decrement.as_slice()) {
            Some(KeyAction::Counter(Action::Decrement))
        } else if bound(self.quit.as_slice()) {
            Some(KeyAction::Quit)
        } else {
            None
        }
    }

    /// Reject empty names and keys bound to more than one action.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyBinding`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let groups = [&self.increment, &self.decrement, &self.quit];
        for (i, group) in groups.iter().enumerate() {
            for key in group.iter() {
                if key.is_empty() {
                    return Err(Error::KeyBinding {
                        key: key.clone(),
                        reason: "empty key name",
                    });
                }
                let clash = groups
                    .iter()
                    .enumerate()
                    .any(|(j, other)| j != i && other.contains(key));
                if clash {
                    return Err(Error::KeyBinding {
                        key: key.clone(),
                        reason: "bound to more than one action",
                    });
                }
            }
        }
        Ok(())
    }
}
