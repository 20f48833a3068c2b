//! Message types for the Elm Architecture.
//!
//! Messages are the only way to update a model. Keyboard and mouse input,
//! terminal resizes and application events all arrive as messages.

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// Any `Send + 'static` value can be a message. Wrap it with
/// [`Message::new`] and recover it with [`Message::downcast`] or
/// [`Message::downcast_ref`].
///
/// ```rust
/// use tea_runtime::Message;
///
/// struct Bump(u32);
///
/// let msg = Message::new(Bump(3));
/// assert!(msg.is::<Bump>());
/// assert_eq!(msg.downcast::<Bump>().map(|b| b.0), Some(3));
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Wrap any sendable value as a message.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Take the message out as `M`, or `None` if it holds another type.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Borrow the message as `M`, or `None` if it holds another type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check whether the message holds an `M`.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

/// Message to quit the program gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitMsg;

/// Message for Ctrl+C interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptMsg;

/// Message containing terminal window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSizeMsg {
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}
