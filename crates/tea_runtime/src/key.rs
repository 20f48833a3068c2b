//! Keyboard input handling.

use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers};

/// Keyboard event message.
///
/// Printable characters arrive as [`KeyType::Runes`] with the characters in
/// `runes`; every other key has its own [`KeyType`].
///
/// ```rust
/// use tea_runtime::{KeyMsg, KeyType};
///
/// let key = KeyMsg::from_char('+');
/// assert_eq!(key.key_type, KeyType::Runes);
/// assert_eq!(key.rune(), Some('+'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For `KeyType::Runes`, the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
    /// Whether this came from a paste operation.
    pub paste: bool,
}

impl KeyMsg {
    /// Create a key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
            paste: false,
        }
    }

    /// Create a key message from a single character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
            paste: false,
        }
    }

    /// Set the alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// The single typed character, if this is a one-rune key press.
    pub fn rune(&self) -> Option<char> {
        match (self.key_type, self.runes.as_slice()) {
            (KeyType::Runes, [c]) if !self.paste => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            if self.paste {
                write!(f, "[")?;
            }
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            if self.paste {
                write!(f, "]")?;
            }
        } else {
            write!(f, "{}", self.key_type)?;
        }
        Ok(())
    }
}

/// Key type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// One or more printable characters (see [`KeyMsg::runes`]).
    Runes,
    /// Break/Interrupt (Ctrl+C).
    CtrlC,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Enter.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Space bar.
    Space,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PgUp,
    /// Page down.
    PgDown,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runes => "runes",
            Self::CtrlC => "ctrl+c",
            Self::Tab => "tab",
            Self::ShiftTab => "shift+tab",
            Self::Enter => "enter",
            Self::Esc => "esc",
            Self::Backspace => "backspace",
            Self::Delete => "delete",
            Self::Space => " ",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Home => "home",
            Self::End => "end",
            Self::PgUp => "pgup",
            Self::PgDown => "pgdown",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm key event into a [`KeyMsg`].
///
/// Keys this runtime has no name for, and Ctrl+character chords other than
/// Ctrl+C, come through as an empty `KeyType::Runes` message, which models
/// ignore.
pub fn from_crossterm_key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let (key_type, runes) = match code {
        KeyCode::Char(c) if ctrl && c.eq_ignore_ascii_case(&'c') => (KeyType::CtrlC, Vec::new()),
        KeyCode::Char(_) if ctrl => (KeyType::Runes, Vec::new()),
        KeyCode::Char(' ') => (KeyType::Space, Vec::new()),
        KeyCode::Char(c) => (KeyType::Runes, vec![c]),
        KeyCode::Enter => (KeyType::Enter, Vec::new()),
        KeyCode::Backspace => (KeyType::Backspace, Vec::new()),
        KeyCode::BackTab => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab if shift => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab => (KeyType::Tab, Vec::new()),
        KeyCode::Esc => (KeyType::Esc, Vec::new()),
        KeyCode::Delete => (KeyType::Delete, Vec::new()),
        KeyCode::Up => (KeyType::Up, Vec::new()),
        KeyCode::Down => (KeyType::Down, Vec::new()),
        KeyCode::Left => (KeyType::Left, Vec::new()),
        KeyCode::Right => (KeyType::Right, Vec::new()),
        KeyCode::Home => (KeyType::Home, Vec::new()),
        KeyCode::End => (KeyType::End, Vec::new()),
        KeyCode::PageUp => (KeyType::PgUp, Vec::new()),
        KeyCode::PageDown => (KeyType::PgDown, Vec::new()),
        _ => (KeyType::Runes, Vec::new()),
    };

    KeyMsg {
        key_type,
        runes,
        alt,
        paste: false,
    }
}
