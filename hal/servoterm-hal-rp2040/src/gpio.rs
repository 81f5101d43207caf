//! Output line adapter
//!
//! embassy-rp `Output` pins implement the `embedded-hal` digital traits
//! with an infallible error type. [`HalOutput`] tracks the commanded level
//! itself so `is_set_high` does not need a mutable borrow.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;
use servoterm_hal::OutputPin;

/// Push-pull output line
pub struct HalOutput<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> HalOutput<P> {
    /// Wrap a pin, driving it low
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self { pin, high: false }
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin<Error = Infallible>> OutputPin for HalOutput<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
