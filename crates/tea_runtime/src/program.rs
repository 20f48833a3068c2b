//! Program lifecycle and event loop.
//!
//! [`Program`] owns a [`Model`], sets the terminal up, turns crossterm events
//! into messages, feeds them to `update`, and redraws whenever `view`
//! changes. The terminal is restored on every exit path, including errors
//! from the event loop.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::{debug, trace};

use crate::command::Cmd;
use crate::key::{KeyType, from_crossterm_key};
use crate::message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
use crate::mouse::from_crossterm_mouse;

/// Errors that can occur while running a program.
///
/// | Error Variant | Recovery Strategy |
/// |--------------|-------------------|
/// | [`Io`](Error::Io) | Check terminal availability |
/// | [`RawModeFailure`](Error::RawModeFailure) | Run in an interactive terminal |
/// | [`AltScreenFailure`](Error::AltScreenFailure) | Disable the alt screen option |
/// | [`EventPoll`](Error::EventPoll) | Terminal may be disconnected |
/// | [`Render`](Error::Render) | Output stream may be closed |
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Usually means stdin is not a TTY.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreenFailure {
        /// Whether we were trying to enter or exit alt screen.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll or read terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(#[source] io::Error),

    /// Failed to write the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(#[source] io::Error),
}

/// A specialized [`Result`] type for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The Model trait for terminal applications.
///
/// ```rust
/// use tea_runtime::{Cmd, Message, Model};
///
/// struct Total(u32);
///
/// impl Model for Total {
///     fn init(&self) -> Option<Cmd> {
///         None
///     }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<u32>() {
///             self.0 += n;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         format!("Total: {}", self.0)
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Return an optional startup command. Called once before the first view.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and optionally return a command to run.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model for display. Must not have side effects.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use alternate screen buffer.
    pub alt_screen: bool,
    /// Enable mouse capture (clicks and wheel).
    pub mouse: bool,
    /// Skip terminal setup and event polling; messages arrive only through
    /// [`Program::with_input_receiver`].
    pub custom_io: bool,
    /// Target frames per second for rendering.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            mouse: false,
            custom_io: false,
            fps: 60,
        }
    }
}

/// The main program runner.
///
/// ```rust,ignore
/// let final_model = Program::new(model)
///     .with_alt_screen()
///     .with_mouse()
///     .run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
    external_rx: Option<Receiver<Message>>,
}

impl<M: Model> Program<M> {
    /// Create a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
            external_rx: None,
        }
    }

    /// Forward messages from an external channel into the event loop.
    pub fn with_input_receiver(mut self, rx: Receiver<Message>) -> Self {
        self.external_rx = Some(rx);
        self
    }

    /// Use the alternate screen buffer.
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Capture mouse clicks and wheel events.
    pub fn with_mouse(mut self) -> Self {
        self.options.mouse = true;
        self
    }

    /// Set the target frame rate, clamped to 1..=120.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Skip raw mode and crossterm polling.
    ///
    /// Used when the terminal is managed elsewhere or input is injected
    /// through [`Program::with_input_receiver`].
    pub fn with_custom_io(mut self) -> Self {
        self.options.custom_io = true;
        self
    }

    /// The options this program will run with.
    pub fn options(&self) -> &ProgramOptions {
        &self.options
    }

    /// Run the program on stdout and return the final model state.
    pub fn run(self) -> Result<M> {
        self.run_with_writer(io::stdout())
    }

    /// Run the program with a custom writer.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();
        debug!(
            alt_screen = options.alt_screen,
            mouse = options.mouse,
            custom_io = options.custom_io,
            fps = options.fps,
            "starting program"
        );

        if !options.custom_io {
            enable_raw_mode().map_err(|source| Error::RawModeFailure {
                action: "enable",
                source,
            })?;
        }

        let result = setup_terminal(&mut writer, &options)
            .and_then(|()| self.event_loop(&mut writer));

        restore_terminal(&mut writer, &options);
        debug!(ok = result.is_ok(), "program finished");

        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        if let Some(ext_rx) = self.external_rx.take() {
            let tx_clone = tx.clone();
            thread::spawn(move || {
                while let Ok(msg) = ext_rx.recv() {
                    if tx_clone.send(msg).is_err() {
                        break;
                    }
                }
            });
        }

        if !self.options.custom_io
            && let Ok((width, height)) = terminal::size()
        {
            let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
        }

        if let Some(cmd) = self.model.init() {
            spawn_command(cmd, tx.clone());
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            if self.options.custom_io {
                thread::sleep(frame_duration);
            } else if event::poll(frame_duration).map_err(Error::EventPoll)? {
                let event = event::read().map_err(Error::EventPoll)?;
                if let Some(msg) = translate_event(event) {
                    let _ = tx.send(msg);
                }
            }

            let mut needs_render = false;
            while let Ok(msg) = rx.try_recv() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    return Ok(self.model);
                }

                if let Some(cmd) = self.model.update(msg) {
                    spawn_command(cmd, tx.clone());
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        // Raw mode does not return the carriage, so each line is placed explicitly.
        for (row, line) in (0u16..).zip(view.lines()) {
            execute!(writer, MoveTo(0, row)).map_err(Error::Render)?;
            write!(writer, "{line}").map_err(Error::Render)?;
        }
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}

fn setup_terminal<W: Write>(writer: &mut W, options: &ProgramOptions) -> Result<()> {
    if options.alt_screen {
        execute!(writer, EnterAlternateScreen).map_err(|source| Error::AltScreenFailure {
            action: "enter",
            source,
        })?;
    }
    execute!(writer, Hide)?;
    if options.mouse {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

fn restore_terminal<W: Write>(writer: &mut W, options: &ProgramOptions) {
    if options.mouse {
        let _ = execute!(writer, DisableMouseCapture);
    }
    let _ = execute!(writer, Show);
    if options.alt_screen {
        let _ = execute!(writer, LeaveAlternateScreen);
    }
    if !options.custom_io {
        let _ = disable_raw_mode();
    }
}

fn translate_event(event: Event) -> Option<Message> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            let key_msg = from_crossterm_key(key_event.code, key_event.modifiers);
            trace!(key = %key_msg, "key event");
            if key_msg.key_type == KeyType::CtrlC {
                Some(Message::new(InterruptMsg))
            } else {
                Some(Message::new(key_msg))
            }
        }
        Event::Mouse(mouse_event) => {
            let mouse_msg = from_crossterm_mouse(mouse_event);
            trace!(mouse = %mouse_msg, x = mouse_msg.x, y = mouse_msg.y, "mouse event");
            Some(Message::new(mouse_msg))
        }
        Event::Resize(width, height) => Some(Message::new(WindowSizeMsg { width, height })),
        _ => None,
    }
}

fn spawn_command(cmd: Cmd, tx: Sender<Message>) {
    thread::spawn(move || {
        if let Some(msg) = cmd.execute() {
            let _ = tx.send(msg);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::quit;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct Tally {
        total: u32,
    }

    impl Model for Tally {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, msg: Message) -> Option<Cmd> {
            if let Some(n) = msg.downcast_ref::<u32>() {
                self.total += n;
            }
            if msg.is::<&'static str>() {
                return Some(quit());
            }
            None
        }

        fn view(&self) -> String {
            format!("Total: {}\nbye", self.total)
        }
    }

    #[test]
    fn test_program_options_default() {
        let opts = ProgramOptions::default();
        assert!(!opts.alt_screen);
        assert!(!opts.mouse);
        assert!(!opts.custom_io);
        assert_eq!(opts.fps, 60);
    }

    #[test]
    fn test_program_builder() {
        let program = Program::new(Tally { total: 0 })
            .with_alt_screen()
            .with_mouse()
            .with_fps(30);

        assert!(program.options().alt_screen);
        assert!(program.options().mouse);
        assert_eq!(program.options().fps, 30);
    }

    #[test]
    fn test_program_fps_is_clamped() {
        assert_eq!(Program::new(Tally { total: 0 }).with_fps(500).options().fps, 120);
        assert_eq!(Program::new(Tally { total: 0 }).with_fps(0).options().fps, 1);
    }

    #[test]
    fn test_custom_io_run_processes_injected_messages() {
        let (tx, rx) = mpsc::channel();
        tx.send(Message::new(2u32)).unwrap();
        tx.send(Message::new(5u32)).unwrap();
        tx.send(Message::new(QuitMsg)).unwrap();

        let mut out = Vec::new();
        let model = Program::new(Tally { total: 0 })
            .with_custom_io()
            .with_fps(120)
            .with_input_receiver(rx)
            .run_with_writer(&mut out)
            .unwrap();

        assert_eq!(model.total, 7);
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("Total: 7"));
        assert!(written.contains("bye"));
    }

    #[test]
    fn test_command_result_is_fed_back() {
        let (tx, rx) = mpsc::channel();
        tx.send(Message::new(1u32)).unwrap();
        tx.send(Message::new("stop")).unwrap();

        let mut out = Vec::new();
        let model = Program::new(Tally { total: 0 })
            .with_custom_io()
            .with_fps(120)
            .with_input_receiver(rx)
            .run_with_writer(&mut out)
            .unwrap();

        assert_eq!(model.total, 1);
    }

    #[test]
    fn test_translate_ctrl_c_is_interrupt() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let msg = translate_event(event).unwrap();
        assert!(msg.is::<InterruptMsg>());
    }

    #[test]
    fn test_translate_resize() {
        let msg = translate_event(Event::Resize(100, 30)).unwrap();
        assert_eq!(
            msg.downcast::<WindowSizeMsg>(),
            Some(WindowSizeMsg {
                width: 100,
                height: 30
            })
        );
    }

    #[test]
    fn test_translate_ignores_focus() {
        assert!(translate_event(Event::FocusGained).is_none());
    }
}
