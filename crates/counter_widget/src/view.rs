//! Terminal layout and styling for the element tree.
//!
//! [`Screen::layout`] places each element of the tree on a row:
//!
//! ```text
//!   The counter is currently 3
//!
//!   [ Increment counter ]  [ Decrement counter ]
//!
//!   The counter cannot go below 0
//! ```
//!
//! Consecutive buttons share a row; every other element gets its own row,
//! with a blank row between blocks. Button positions are recorded as
//! [`Hitbox`]es so mouse clicks can be routed back to the button's action.

use std::ops::Range;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::element::{Element, ElementKind, TestId};
use crate::state::Action;

/// Gap between buttons sharing a row.
const BUTTON_GAP: &str = "  ";

/// Layout and styling knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Emit ANSI styling.
    pub color: bool,
    /// Columns before every line.
    pub margin_left: u16,
    /// Blank rows above the first line.
    pub margin_top: u16,
    /// Append a key hint line.
    pub show_help: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            color: true,
            margin_left: 2,
            margin_top: 1,
            show_help: true,
        }
    }
}

impl ViewOptions {
    /// No margins, no color, no help line.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            color: false,
            margin_left: 0,
            margin_top: 0,
            show_help: false,
        }
    }
}

/// Screen region occupied by an activatable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hitbox {
    /// Which element this is.
    pub test_id: Option<TestId>,
    /// What activating it does.
    pub action: Action,
    /// Screen row, 0-indexed.
    pub row: u16,
    /// Half-open display column range.
    pub cols: Range<u16>,
}

impl Hitbox {
    /// Whether the cell `(x, y)` falls inside this hitbox.
    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        y == self.row && self.cols.contains(&x)
    }
}

#[derive(Debug, Clone, Default)]
struct Line {
    plain: String,
    styled: String,
}

impl Line {
    fn push(&mut self, text: &str, styled: String) {
        self.plain.push_str(text);
        self.styled.push_str(&styled);
    }

    fn width(&self) -> u16 {
        u16::try_from(self.plain.width()).unwrap_or(u16::MAX)
    }
}

/// A laid-out element tree.
#[derive(Debug, Clone)]
pub struct Screen {
    lines: Vec<Line>,
    hitboxes: Vec<Hitbox>,
    options: ViewOptions,
}

impl Screen {
    /// Lay `root` out according to `options`.
    #[must_use]
    pub fn layout(root: &Element, options: ViewOptions) -> Self {
        let mut screen = Self {
            lines: vec![Line::default(); usize::from(options.margin_top)],
            hitboxes: Vec::new(),
            options,
        };

        let mut in_button_row = false;
        for child in &root.children {
            if child.kind == ElementKind::Button && in_button_row {
                screen.append_text(BUTTON_GAP);
            } else {
                screen.start_block();
            }
            in_button_row = child.kind == ElementKind::Button;
            screen.place(child);
        }

        if options.show_help {
            screen.start_block();
            let hint = "+/- or click a button, q to quit";
            let styled = if options.color {
                hint.dark_grey().to_string()
            } else {
                hint.to_string()
            };
            screen.current().push(hint, styled);
        }

        screen
    }

    fn start_block(&mut self) {
        let has_content = self.lines.len() > usize::from(self.options.margin_top);
        if has_content {
            self.lines.push(Line::default());
        }
        let margin = " ".repeat(usize::from(self.options.margin_left));
        let mut line = Line::default();
        line.push(&margin, margin.clone());
        self.lines.push(line);
    }

    fn current(&mut self) -> &mut Line {
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    fn append_text(&mut self, text: &str) {
        self.current().push(text, text.to_string());
    }

    fn place(&mut self, element: &Element) {
        let color = self.options.color;
        let text = element.text();
        match element.kind {
            ElementKind::Button => {
                let label = format!("[ {text} ]");
                let row = u16::try_from(self.lines.len() - 1).unwrap_or(u16::MAX);
                let start = self.current().width();
                let styled = if color {
                    label.as_str().reverse().to_string()
                } else {
                    label.clone()
                };
                self.current().push(&label, styled);
                let end = self.current().width();
                if let Some(action) = element.on_activate {
                    self.hitboxes.push(Hitbox {
                        test_id: element.test_id,
                        action,
                        row,
                        cols: start..end,
                    });
                }
            }
            ElementKind::Heading => {
                let styled = if color {
                    text.as_str().bold().to_string()
                } else {
                    text.clone()
                };
                self.current().push(&text, styled);
            }
            ElementKind::Paragraph if element.test_id == Some(TestId::ErrorMessage) => {
                let styled = if color {
                    text.as_str().red().to_string()
                } else {
                    text.clone()
                };
                self.current().push(&text, styled);
            }
            ElementKind::Paragraph | ElementKind::Container => {
                self.current().push(&text, text.clone());
            }
        }
    }

    /// The layout without escape sequences, lines joined by `\n`.
    #[must_use]
    pub fn plain(&self) -> String {
        join(self.lines.iter().map(|l| l.plain.as_str()))
    }

    /// The layout with styling when color is enabled, otherwise the same as
    /// [`plain`](Self::plain).
    #[must_use]
    pub fn styled(&self) -> String {
        join(self.lines.iter().map(|l| l.styled.as_str()))
    }

    /// Hitboxes of every activatable element.
    #[must_use]
    pub fn hitboxes(&self) -> &[Hitbox] {
        &self.hitboxes
    }

    /// The hitbox under cell `(x, y)`, if any.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&Hitbox> {
        self.hitboxes.iter().find(|h| h.contains(x, y))
    }
}

fn join<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
