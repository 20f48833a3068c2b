//! The counter widget as a runtime [`Model`].
//!
//! The widget owns a [`CounterState`] and exposes the two operations as
//! plain methods ([`CounterWidget::increment`], [`CounterWidget::decrement`]).
//! Terminal input is routed to them in `update`:
//!
//! - [`CounterMsg`] applies an action directly
//! - key presses go through the [`KeyMap`]
//! - a left click inside a button's [`Hitbox`](crate::view::Hitbox)
//!   activates that button

use tea_runtime::{Cmd, KeyMsg, Message, Model, MouseMsg, quit};
use tracing::{debug, trace};

use crate::element::{Element, render};
use crate::keymap::{KeyAction, KeyMap};
use crate::state::{Action, CounterState};
use crate::view::{Screen, ViewOptions};

/// Message that applies an action to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterMsg(pub Action);

impl CounterMsg {
    /// Convert to a runtime message.
    #[must_use]
    pub fn into_message(self) -> Message {
        Message::new(self)
    }
}

/// The counter widget.
#[derive(Debug, Clone)]
pub struct CounterWidget {
    state: CounterState,
    keymap: KeyMap,
    view_options: ViewOptions,
}

impl Default for CounterWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterWidget {
    /// A widget at zero with default bindings and layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(CounterState::new())
    }

    /// A widget mounted with an existing state.
    #[must_use]
    pub fn with_state(state: CounterState) -> Self {
        Self {
            state,
            keymap: KeyMap::default(),
            view_options: ViewOptions::default(),
        }
    }

    /// Replace the key bindings.
    #[must_use]
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replace the layout options.
    #[must_use]
    pub fn with_view_options(mut self, options: ViewOptions) -> Self {
        self.view_options = options;
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> CounterState {
        self.state
    }

    /// Overwrite the state, as a test harness would before interacting.
    pub fn set_state(&mut self, state: CounterState) {
        self.state = state;
    }

    /// Hide the error message and add one.
    pub fn increment(&mut self) {
        self.apply(Action::Increment);
    }

    /// Subtract one, or show the error message if already at zero.
    pub fn decrement(&mut self) {
        self.apply(Action::Decrement);
    }

    /// Apply an action to the owned state.
    pub fn apply(&mut self, action: Action) {
        let before = self.state;
        self.state = before.apply(action);
        debug!(
            %action,
            from = before.counter(),
            to = self.state.counter(),
            display_error = self.state.display_error(),
            "counter updated"
        );
    }

    /// Render the element tree for the current state.
    #[must_use]
    pub fn element(&self) -> Element {
        render(&self.state)
    }

    /// Lay the current element tree out for the terminal.
    #[must_use]
    pub fn screen(&self) -> Screen {
        Screen::layout(&self.element(), self.view_options)
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        match self.keymap.lookup(key) {
            Some(KeyAction::Counter(action)) => {
                trace!(%key, %action, "key bound");
                self.apply(action);
                None
            }
            Some(KeyAction::Quit) => Some(quit()),
            None => None,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseMsg) {
        if !mouse.is_left_click() {
            return;
        }
        let hit = self
            .screen()
            .hit_test(mouse.x, mouse.y)
            .map(|hitbox| hitbox.action);
        if let Some(action) = hit {
            trace!(x = mouse.x, y = mouse.y, %action, "button clicked");
            self.apply(action);
        }
    }
}

impl Model for CounterWidget {
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(CounterMsg(action)) = msg.downcast_ref::<CounterMsg>() {
            self.apply(*action);
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            self.handle_mouse(mouse);
        }

        None
    }

    fn view(&self) -> String {
        self.screen().styled()
    }
}
