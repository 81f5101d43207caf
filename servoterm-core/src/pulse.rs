//! Servo pulse generation
//!
//! One call to [`PulseGenerator::emit`] produces the active phase of one
//! refresh frame: the line goes high, stays high for the pulse delay, then
//! goes low. The idle remainder of the frame belongs to the control loop.
//!
//! ```text
//!        ┌──────────┐                          ┌──────────┐
//!  ──────┘  delay   └──────────────────────────┘  delay   └─────
//!        │◄─────────────── ~20 ms frame ──────►│
//! ```

use servoterm_hal::{BlockingDelay, OutputPin};

/// Drives the servo signal line
pub struct PulseGenerator<P> {
    pin: P,
    /// Number of pulses emitted since creation
    pulses: u32,
}

impl<P: OutputPin> PulseGenerator<P> {
    /// Take ownership of the signal line and force it inactive
    pub fn new(mut pin: P) -> Self {
        pin.set_low();
        Self { pin, pulses: 0 }
    }

    /// Emit one pulse with an active phase of `delay_us` microseconds
    ///
    /// A zero delay still produces a rising and a falling edge.
    pub fn emit<D: BlockingDelay>(&mut self, delay_us: u16, delay: &mut D) {
        self.pin.set_high();
        delay.delay_us(delay_us as u32);
        self.pin.set_low();
        self.pulses = self.pulses.wrapping_add(1);
    }

    /// Pulses emitted so far (wraps at `u32::MAX`)
    pub fn pulse_count(&self) -> u32 {
        self.pulses
    }

    /// Check if the line is currently active
    pub fn is_active(&self) -> bool {
        self.pin.is_set_high()
    }

    /// Force the line inactive
    pub fn idle(&mut self) {
        self.pin.set_low();
    }

    /// Release the signal line
    pub fn into_inner(self) -> P {
        self.pin
    }
}
