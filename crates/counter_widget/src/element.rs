//! Element tree produced by rendering the widget.
//!
//! [`render`] projects a [`CounterState`] onto a small tree of elements. Each
//! element may carry a [`TestId`], which is how tests (and the terminal
//! layout) locate the heading, the two buttons and the error message.
//! Buttons also carry the [`Action`] they trigger when activated.

use std::fmt;

use serde::Serialize;

use crate::state::{Action, CounterState};

/// Heading text before the counter value.
pub const HEADING_PREFIX: &str = "The counter is currently ";
/// Label of the increment button.
pub const INCREMENT_LABEL: &str = "Increment counter";
/// Label of the decrement button.
pub const DECREMENT_LABEL: &str = "Decrement counter";
/// Text shown when a decrement is refused at zero.
pub const ERROR_MESSAGE: &str = "The counter cannot go below 0";

/// What an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Groups other elements.
    Container,
    /// A title line.
    Heading,
    /// An activatable control.
    Button,
    /// A line of body text.
    Paragraph,
}

/// Stable identifiers for the widget's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestId {
    /// The widget root.
    ComponentApp,
    /// The heading showing the value.
    CounterDisplay,
    /// The increment control.
    IncrementButton,
    /// The decrement control.
    DecrementButton,
    /// The guard message.
    ErrorMessage,
}

impl TestId {
    /// Every id, in render order.
    pub const ALL: [Self; 5] = [
        Self::ComponentApp,
        Self::CounterDisplay,
        Self::IncrementButton,
        Self::DecrementButton,
        Self::ErrorMessage,
    ];

    /// The attribute value, e.g. `"counter-display"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ComponentApp => "component-app",
            Self::CounterDisplay => "counter-display",
            Self::IncrementButton => "increment-button",
            Self::DecrementButton => "decrement-button",
            Self::ErrorMessage => "error-message",
        }
    }

    /// Look an id up by its attribute value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// What this element is.
    pub kind: ElementKind,
    /// Identifier used for lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<TestId>,
    /// Text directly owned by this element.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Action triggered when the element is activated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_activate: Option<Action>,
    /// Child elements, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl Element {
    fn leaf(kind: ElementKind, test_id: TestId, text: impl Into<String>) -> Self {
        Self {
            kind,
            test_id: Some(test_id),
            text: text.into(),
            on_activate: None,
            children: Vec::new(),
        }
    }

    fn button(test_id: TestId, label: &str, action: Action) -> Self {
        Self {
            on_activate: Some(action),
            ..Self::leaf(ElementKind::Button, test_id, label)
        }
    }

    /// All elements in this subtree (self included) whose test id matches
    /// `value`, in document order.
    #[must_use]
    pub fn find_by_test_attr(&self, value: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect(value, &mut found);
        found
    }

    fn collect<'a>(&'a self, value: &str, found: &mut Vec<&'a Self>) {
        if self.test_id.is_some_and(|id| id.as_str() == value) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(value, found);
        }
    }

    /// The first element with the given id.
    #[must_use]
    pub fn find(&self, id: TestId) -> Option<&Self> {
        self.find_by_test_attr(id.as_str()).into_iter().next()
    }

    /// Text of this element and all its descendants, concatenated.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text());
        }
        out
    }
}

/// Render the widget for `state`.
///
/// The error paragraph is present if and only if
/// [`CounterState::display_error`] is set.
///
/// ```rust
/// use counter_widget::element::{ERROR_MESSAGE, TestId, render};
/// use counter_widget::state::CounterState;
///
/// let root = render(&CounterState::new().decrement());
/// let error = root.find(TestId::ErrorMessage).unwrap();
/// assert_eq!(error.text(), ERROR_MESSAGE);
/// ```
#[must_use]
pub fn render(state: &CounterState) -> Element {
    let mut children = vec![
        Element::leaf(
            ElementKind::Heading,
            TestId::CounterDisplay,
            format!("{HEADING_PREFIX}{}", state.counter()),
        ),
        Element::button(TestId::IncrementButton, INCREMENT_LABEL, Action::Increment),
        Element::button(TestId::DecrementButton, DECREMENT_LABEL, Action::Decrement),
    ];

    if state.display_error() {
        children.push(Element::leaf(
            ElementKind::Paragraph,
            TestId::ErrorMessage,
            ERROR_MESSAGE,
        ));
    }

    Element {
        kind: ElementKind::Container,
        test_id: Some(TestId::ComponentApp),
        text: String::new(),
        on_activate: None,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_parse() {
        for id in TestId::ALL {
            assert_eq!(TestId::parse(id.as_str()), Some(id));
        }
        assert_eq!(TestId::parse("nope"), None);
    }

    #[test]
    fn root_is_found_by_its_own_id() {
        let root = render(&CounterState::new());
        let found = root.find_by_test_attr("component-app");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ElementKind::Container);
    }

    #[test]
    fn heading_shows_value() {
        let root = render(&CounterState::with_counter(42));
        let heading = root.find(TestId::CounterDisplay).unwrap();
        assert_eq!(heading.text(), "The counter is currently 42");
        assert_eq!(heading.kind, ElementKind::Heading);
    }

    #[test]
    fn buttons_carry_actions() {
        let root = render(&CounterState::new());
        let inc = root.find(TestId::IncrementButton).unwrap();
        let dec = root.find(TestId::DecrementButton).unwrap();
        assert_eq!(inc.on_activate, Some(Action::Increment));
        assert_eq!(dec.on_activate, Some(Action::Decrement));
        assert_eq!(inc.text(), INCREMENT_LABEL);
        assert_eq!(dec.text(), DECREMENT_LABEL);
    }

    #[test]
    fn error_only_when_flag_set() {
        let clean = render(&CounterState::with_counter(3));
        assert!(clean.find_by_test_attr("error-message").is_empty());
        assert_eq!(clean.children.len(), 3);

        let flagged = render(&CounterState::new().decrement());
        assert_eq!(flagged.find_by_test_attr("error-message").len(), 1);
        assert_eq!(flagged.children.len(), 4);
    }

    #[test]
    fn root_text_concatenates_children() {
        let root = render(&CounterState::with_counter(1));
        let text = root.text();
        assert!(text.starts_with("The counter is currently 1"));
        assert!(text.ends_with(DECREMENT_LABEL));
    }

    #[test]
    fn json_uses_attribute_names() {
        let root = render(&CounterState::new().decrement());
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["test_id"], "component-app");
        assert_eq!(json["children"][1]["on_activate"], "increment");
        assert_eq!(json["children"][3]["test_id"], "error-message");
        assert!(json.get("text").is_none());
    }
}
