//! Widget state and its transitions.
//!
//! [`CounterState`] is a plain `Copy` value. The two transitions are pure
//! functions from state to state; the widget owns one state and replaces it
//! with whatever a transition returns.

use serde::{Deserialize, Serialize};

/// The counter's entire state: the value and whether the guard message shows.
///
/// ```rust
/// use counter_widget::state::CounterState;
///
/// let state = CounterState::new().decrement();
/// assert_eq!(state.counter(), 0);
/// assert!(state.display_error());
///
/// let state = state.increment();
/// assert_eq!(state.counter(), 1);
/// assert!(!state.display_error());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterState {
    counter: u32,
    display_error: bool,
}

impl CounterState {
    /// A fresh state: counter at zero, no error shown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: 0,
            display_error: false,
        }
    }

    /// A state starting at `counter`, no error shown.
    #[must_use]
    pub const fn with_counter(counter: u32) -> Self {
        Self {
            counter,
            display_error: false,
        }
    }

    /// Current counter value.
    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Whether the "cannot go below 0" message is visible.
    #[must_use]
    pub const fn display_error(&self) -> bool {
        self.display_error
    }

    /// Clear the error flag and add one. Saturates at `u32::MAX`.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self {
            counter: self.counter.saturating_add(1),
            display_error: false,
        }
    }

    /// Subtract one, or refuse at zero and raise the error flag.
    ///
    /// A successful decrement leaves the error flag as it was; only
    /// [`increment`](Self::increment) clears it.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.counter == 0 {
            Self {
                counter: 0,
                display_error: true,
            }
        } else {
            Self {
                counter: self.counter - 1,
                display_error: self.display_error,
            }
        }
    }

    /// Apply an [`Action`].
    #[must_use]
    pub const fn apply(self, action: Action) -> Self {
        match action {
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
        }
    }
}

/// The two user-triggered operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Add one and hide the error message.
    Increment,
    /// Subtract one unless already at zero.
    Decrement,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increment => write!(f, "increment"),
            Self::Decrement => write!(f, "decrement"),
        }
    }
}
