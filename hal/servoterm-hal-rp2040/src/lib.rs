//! RP2040 bindings for the servo terminal firmware
//!
//! Implements the `servoterm-hal` capability traits on top of the
//! embassy-rp drivers:
//!
//! - Blocking serial receive/transmit over any `embedded-io` byte stream
//! - Pulse and indicator lines over `embedded-hal` output pins
//! - Busy-wait delays over `embedded-hal` `DelayNs`
//! - Free RAM measurement from the stack pointer

#![no_std]

pub mod delay;
pub mod gpio;
pub mod memory;
pub mod uart;

pub use delay::HalDelay;
pub use gpio::HalOutput;
pub use uart::{LineError, SerialRx, SerialTx};
