//! Serial console with defmt mirroring
//!
//! Wraps the core [`SerialConsole`] so every feedback event also shows up in
//! the RTT log.

use defmt::*;
use servoterm_core::{Feedback, FeedbackSink, SerialConsole};
use servoterm_hal::UartTx;

pub struct LoggedConsole<T> {
    console: SerialConsole<T>,
}

impl<T: UartTx> LoggedConsole<T> {
    pub fn new(tx: T) -> Self {
        Self {
            console: SerialConsole::new(tx),
        }
    }
}

impl<T: UartTx> FeedbackSink for LoggedConsole<T> {
    fn emit(&mut self, feedback: &Feedback) {
        if feedback.is_halt() {
            warn!("{}", feedback);
        } else {
            debug!("{}", feedback);
        }
        self.console.emit(feedback);
    }
}
