//! Startup configuration
//!
//! Values come from `servo.toml`, validated and turned into constants by the
//! build script.

use defmt::*;
use servoterm_core::{LoopConfig, ServoConfig};
use servoterm_hal::UartConfig;

include!(concat!(env!("OUT_DIR"), "/servo_config.rs"));

/// Serial line settings
pub const UART: UartConfig = UartConfig::eight_n_one(BAUDRATE);

/// Servo defaults, falling back to the built-in values if rejected
pub fn servo_config() -> ServoConfig {
    match SERVO.validate() {
        Ok(()) => SERVO,
        Err(e) => {
            warn!("servo config rejected ({}), using defaults", e);
            ServoConfig::default()
        }
    }
}

/// Loop timing, falling back to the built-in values if rejected
pub fn loop_config() -> LoopConfig {
    match LOOP.validate() {
        Ok(()) => LOOP,
        Err(e) => {
            warn!("loop config rejected ({}), using defaults", e);
            LoopConfig::default()
        }
    }
}
