//! Board-agnostic core logic for the serial servo controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Servo pulse-width model with clamped bounds
//! - Single-byte command decoding and interpretation
//! - Structured feedback events and their terminal rendering
//! - Pulse generation against the HAL output and delay traits
//! - The refresh-frame control loop and its halt state machine
//! - Startup banner and configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod feedback;
pub mod pulse;
pub mod servo;
pub mod startup;

#[cfg(test)]
mod mock;

pub use config::{ConfigError, LoopConfig, ServoConfig};
pub use control::{ControlLoop, LoopState};
pub use feedback::{Feedback, FeedbackSink, SerialConsole};
pub use pulse::PulseGenerator;
pub use servo::{interpret, Command, ServoState};
pub use startup::{announce, Blinker};
