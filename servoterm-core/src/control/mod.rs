//! Refresh-frame control loop
//!
//! The loop owns the servo state and all hardware handles. Each frame it
//! waits out the refresh period, polls the serial link once, interprets at
//! most one byte and emits one pulse. An input fault halts it for good.

pub mod runner;
pub mod state;

pub use runner::ControlLoop;
pub use state::{LoopEvent, LoopState};
