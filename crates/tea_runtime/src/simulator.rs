//! Program simulator for testing models without a real terminal.
//!
//! The simulator follows the same lifecycle as [`Program`](crate::Program):
//! `init` once, a view after init, then `update` followed by `view` for every
//! message. Commands returned by the model are executed inline by
//! [`ProgramSimulator::run_until_empty`], so quit requests and follow-up
//! messages behave as they would on a terminal.

use std::collections::VecDeque;

use crate::Model;
use crate::command::Cmd;
use crate::message::{InterruptMsg, Message, QuitMsg};

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// A simulator for testing Model implementations without a terminal.
///
/// ```rust
/// use tea_runtime::{Cmd, Message, Model, simulator::ProgramSimulator};
///
/// struct Total(u32);
///
/// impl Model for Total {
///     fn init(&self) -> Option<Cmd> { None }
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<u32>() {
///             self.0 += n;
///         }
///         None
///     }
///     fn view(&self) -> String { format!("Total: {}", self.0) }
/// }
///
/// let mut sim = ProgramSimulator::new(Total(0));
/// sim.send(Message::new(5u32));
/// sim.send(Message::new(3u32));
/// sim.run_until_empty();
///
/// assert_eq!(sim.model().0, 8);
/// assert_eq!(sim.last_view(), Some("Total: 8"));
/// ```
pub struct ProgramSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Call init() and capture the initial view. Only the first call has an effect.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.initialized {
            return None;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        let cmd = self.model.init();
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.capture_view();
        cmd
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Process one queued message, calling update and view.
    ///
    /// Returns the command returned by update, if any.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.initialized {
            // Startup commands are dropped here; call `init` directly to observe them.
            let _ = self.init();
        }

        let msg = self.input_queue.pop_front()?;
        if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
            self.stats.quit_requested = true;
            return None;
        }

        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.capture_view();
        cmd
    }

    /// Process messages until the queue is empty or quit is requested.
    ///
    /// Commands are executed inline and their messages queued. Returns the
    /// number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while !self.input_queue.is_empty() && !self.stats.quit_requested {
            if let Some(msg) = self.step().and_then(Cmd::execute) {
                self.input_queue.push_back(msg);
            }
            processed += 1;
        }
        processed
    }

    /// Get a reference to the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the current model state.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// All captured views, oldest first.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// The most recent view.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Check if quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Check if the model has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }

    fn capture_view(&mut self) {
        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
    }
}
