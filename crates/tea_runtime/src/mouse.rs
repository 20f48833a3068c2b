//! Mouse input handling.
//!
//! Mouse events only arrive when the program was built with
//! [`Program::with_mouse`](crate::Program::with_mouse).

use std::fmt;

use crossterm::event::{KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind};

/// Mouse event message.
///
/// ```rust
/// use tea_runtime::{MouseAction, MouseButton, MouseMsg};
///
/// let click = MouseMsg::left_click(4, 2);
/// assert!(click.is_left_click());
/// assert_eq!((click.x, click.y), (4, 2));
/// assert_eq!(click.action, MouseAction::Press);
/// assert_eq!(click.button, MouseButton::Left);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseMsg {
    /// X coordinate (column), 0-indexed.
    pub x: u16,
    /// Y coordinate (row), 0-indexed.
    pub y: u16,
    /// Whether Shift was held.
    pub shift: bool,
    /// Whether Alt was held.
    pub alt: bool,
    /// Whether Ctrl was held.
    pub ctrl: bool,
    /// The action that occurred.
    pub action: MouseAction,
    /// The button involved.
    pub button: MouseButton,
}

impl MouseMsg {
    /// A left-button press at the given cell.
    pub fn left_click(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Press,
            button: MouseButton::Left,
            ..Self::default()
        }
    }

    /// Whether this is a left-button press.
    pub fn is_left_click(&self) -> bool {
        self.button == MouseButton::Left && self.action == MouseAction::Press
    }

    /// Check if this is a wheel event.
    pub fn is_wheel(&self) -> bool {
        matches!(self.button, MouseButton::WheelUp | MouseButton::WheelDown)
    }
}

impl fmt::Display for MouseMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.shift {
            write!(f, "shift+")?;
        }
        if self.button == MouseButton::None {
            write!(f, "{}", self.action)
        } else if self.is_wheel() || self.action == MouseAction::Press {
            write!(f, "{}", self.button)
        } else {
            write!(f, "{} {}", self.button, self.action)
        }
    }
}

/// Mouse action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseAction {
    /// Mouse button pressed.
    #[default]
    Press,
    /// Mouse button released.
    Release,
    /// Mouse moved.
    Motion,
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::Motion => "motion",
        };
        write!(f, "{name}")
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// No button (motion only).
    #[default]
    None,
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
    /// Scroll wheel up.
    WheelUp,
    /// Scroll wheel down.
    WheelDown,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::WheelUp => "wheel up",
            Self::WheelDown => "wheel down",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm mouse event into a [`MouseMsg`].
pub fn from_crossterm_mouse(event: MouseEvent) -> MouseMsg {
    let action = match event.kind {
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Drag(_) | MouseEventKind::Moved => MouseAction::Motion,
        _ => MouseAction::Press,
    };

    let button = match event.kind {
        MouseEventKind::Down(b) | MouseEventKind::Up(b) | MouseEventKind::Drag(b) => match b {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        },
        MouseEventKind::ScrollUp => MouseButton::WheelUp,
        MouseEventKind::ScrollDown => MouseButton::WheelDown,
        _ => MouseButton::None,
    };

    MouseMsg {
        x: event.column,
        y: event.row,
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
        alt: event.modifiers.contains(KeyModifiers::ALT),
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        action,
        button,
    }
}
