//! A small mount-and-query harness for driving the widget in tests.
//!
//! Mirrors how a component test works: mount the widget (optionally with a
//! preset state), look elements up by their test id, and simulate clicks.
//! Clicks go through the runtime simulator as [`CounterMsg`]s, so they take
//! the same `update` path as real input.
//!
//! ```rust
//! use counter_widget::state::CounterState;
//! use counter_widget::testing::setup;
//!
//! let mut mounted = setup(Some(CounterState::with_counter(7)));
//! mounted.simulate_click("increment-button");
//! assert!(mounted.find("counter-display").text().contains('8'));
//! assert_eq!(mounted.find("error-message").len(), 0);
//! ```

use tea_runtime::simulator::ProgramSimulator;

use crate::element::Element;
use crate::state::CounterState;
use crate::view::ViewOptions;
use crate::widget::{CounterMsg, CounterWidget};

/// Mount the widget, overwriting its state when `state` is given.
#[must_use]
pub fn setup(state: Option<CounterState>) -> Mounted {
    let mut widget = CounterWidget::new().with_view_options(ViewOptions::plain());
    if let Some(state) = state {
        widget.set_state(state);
    }
    let mut sim = ProgramSimulator::new(widget);
    sim.init();
    Mounted { sim }
}

/// A mounted widget.
pub struct Mounted {
    sim: ProgramSimulator<CounterWidget>,
}

impl Mounted {
    /// Every element whose test id equals `value`.
    #[must_use]
    pub fn find(&self, value: &str) -> Found {
        let root = self.sim.model().element();
        let elements = root
            .find_by_test_attr(value)
            .into_iter()
            .cloned()
            .collect();
        Found { elements }
    }

    /// Activate the first element with test id `value`.
    ///
    /// Does nothing when no such element exists or it is not activatable.
    pub fn simulate_click(&mut self, value: &str) {
        let action = self.find(value).first().and_then(|el| el.on_activate);
        if let Some(action) = action {
            self.sim.send(CounterMsg(action).into_message());
            self.sim.run_until_empty();
        }
    }

    /// Current widget state.
    #[must_use]
    pub fn state(&self) -> CounterState {
        self.sim.model().state()
    }

    /// The most recent terminal frame.
    #[must_use]
    pub fn last_view(&self) -> Option<&str> {
        self.sim.last_view()
    }

    /// The underlying simulator.
    #[must_use]
    pub const fn simulator(&self) -> &ProgramSimulator<CounterWidget> {
        &self.sim
    }
}

/// Result of a [`Mounted::find`] query.
#[derive(Debug, Clone)]
pub struct Found {
    elements: Vec<Element>,
}

impl Found {
    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Concatenated text of all matches.
    #[must_use]
    pub fn text(&self) -> String {
        self.elements.iter().map(Element::text).collect()
    }

    /// The first match.
    #[must_use]
    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }
}
