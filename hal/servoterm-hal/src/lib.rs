//! Servoterm Hardware Abstraction Layer
//!
//! This crate defines the capability set the servo controller needs from
//! the hardware. Chip-specific crates implement these traits on top of
//! real peripherals; tests implement them with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (servoterm-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  servoterm-core (loop, state, commands) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  servoterm-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ servoterm-hal-    │
//!           │     rp2040        │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Blocking byte-level serial link
//! - [`gpio::OutputPin`] - The pulse output line
//! - [`delay::BlockingDelay`] - Busy waits in micro/milliseconds

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use delay::BlockingDelay;
pub use gpio::OutputPin;
pub use uart::{RxFault, UartConfig, UartRx, UartTx};
