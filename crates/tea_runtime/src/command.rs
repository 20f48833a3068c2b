//! Commands for side effects.
//!
//! A command is a deferred closure that may produce a message. Models return
//! commands from `init` and `update` instead of performing IO themselves; the
//! program executes them off the event-loop thread and feeds the resulting
//! message back in.

use crate::message::{Message, QuitMsg};

/// A command that produces a message when executed.
///
/// Commands are lazy: building one does nothing until the program (or the
/// simulator) calls [`Cmd::execute`].
///
/// ```rust
/// use tea_runtime::{Cmd, Message};
///
/// struct Loaded(u32);
///
/// let cmd = Cmd::new(|| Message::new(Loaded(5)));
/// let msg = cmd.execute().unwrap();
/// assert!(msg.is::<Loaded>());
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a command that always produces a message.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Run the command and return its message, if any.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl std::fmt::Debug for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

/// Command that tells the program to exit.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_produces_quit_msg() {
        let msg = quit().execute().unwrap();
        assert!(msg.is::<QuitMsg>());
    }

    #[test]
    fn test_optional_command_can_be_empty() {
        let cmd = Cmd::new_optional(|| None);
        assert!(cmd.execute().is_none());
    }

    #[test]
    fn test_command_is_lazy() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let cmd = Cmd::new(move || {
            flag.store(true, Ordering::SeqCst);
            Message::new(())
        });

        assert!(!ran.load(Ordering::SeqCst));
        let _ = cmd.execute();
        assert!(ran.load(Ordering::SeqCst));
    }
}
