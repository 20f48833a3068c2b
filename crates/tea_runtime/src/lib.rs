#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]

//! # tea_runtime
//!
//! A small terminal runtime based on The Elm Architecture.
//!
//! A program is a [`Model`] with three functions:
//!
//! - [`Model::init`] returns an optional startup [`Cmd`]
//! - [`Model::update`] consumes a [`Message`] and mutates the model
//! - [`Model::view`] renders the model to a string
//!
//! [`Program`] drives a model from real terminal input, and
//! [`simulator::ProgramSimulator`] drives it headlessly for tests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tea_runtime::{Cmd, KeyMsg, KeyType, Message, Model, Program, quit};
//!
//! struct Clicks(u32);
//!
//! impl Model for Clicks {
//!     fn init(&self) -> Option<Cmd> {
//!         None
//!     }
//!
//!     fn update(&mut self, msg: Message) -> Option<Cmd> {
//!         if let Some(key) = msg.downcast_ref::<KeyMsg>() {
//!             match key.key_type {
//!                 KeyType::Space => self.0 += 1,
//!                 KeyType::Esc => return Some(quit()),
//!                 _ => {}
//!             }
//!         }
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Clicks: {}", self.0)
//!     }
//! }
//!
//! let final_model = Program::new(Clicks(0)).run()?;
//! println!("{}", final_model.0);
//! # Ok::<(), tea_runtime::Error>(())
//! ```

pub mod command;
pub mod key;
pub mod message;
pub mod mouse;
pub mod program;
pub mod simulator;

pub use command::{Cmd, quit};
pub use key::{KeyMsg, KeyType};
pub use message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use mouse::{MouseAction, MouseButton, MouseMsg};
pub use program::{Error, Model, Program, ProgramOptions, Result};
