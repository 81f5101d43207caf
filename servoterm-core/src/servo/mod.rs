//! Servo pulse-width model and command interpreter
//!
//! [`ServoState`] owns the commanded width and its bounds. [`Command`]
//! decodes raw bytes from the terminal, and [`ServoState::apply`] turns a
//! command into a state change plus a [`Feedback`](crate::feedback::Feedback)
//! event for the operator.

pub mod command;
pub mod interpreter;
pub mod state;

pub use command::Command;
pub use interpreter::interpret;
pub use state::ServoState;
