//! Operator feedback
//!
//! Every processed byte produces one [`Feedback`] event. The control loop
//! hands events to a [`FeedbackSink`]; the firmware uses [`SerialConsole`]
//! to render them as terminal lines, tests record the events directly.

use core::fmt::{self, Write};

use servoterm_hal::{RxFault, UartTx};

/// Line terminator expected by serial terminals
pub const LINE_END: &str = "\r\n";

/// Outcome of a command, or the reason the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feedback {
    /// Width changed by a step command
    Positioned { width_us: u16 },
    /// Width moved to the middle of the range
    Centered { width_us: u16, min_us: u16, max_us: u16 },
    /// Width and bounds restored to startup values
    Reset { width_us: u16, min_us: u16, max_us: u16 },
    /// Lower bound moved to the current width
    MinimumSet { min_us: u16 },
    /// Upper bound moved to the current width
    MaximumSet { max_us: u16 },
    /// Width moved to a relative position
    PositionSelected {
        position: u8,
        width_us: u16,
        min_us: u16,
        max_us: u16,
    },
    /// Byte was not a command
    InvalidCommand { byte: u8 },
    /// Input stream failed; the loop is halting
    InputHalted { fault: RxFault },
}

impl Feedback {
    /// Check if this event reports a halt
    pub fn is_halt(&self) -> bool {
        matches!(self, Feedback::InputHalted { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Feedback::Positioned { width_us } => {
                write!(f, "Positioning servo with {} microsecond pulse.", width_us)?;
            }
            Feedback::Centered {
                width_us,
                min_us,
                max_us,
            } => {
                write!(
                    f,
                    "Centering servo with {} microsecond pulse in [{}, {}].",
                    width_us, min_us, max_us
                )?;
            }
            Feedback::Reset {
                width_us,
                min_us,
                max_us,
            } => {
                write!(
                    f,
                    "Resetting servo with {} microsecond pulse in [{}, {}].",
                    width_us, min_us, max_us
                )?;
            }
            Feedback::MinimumSet { min_us } => {
                write!(f, "Minimum pulse width set to {} microseconds.", min_us)?;
            }
            Feedback::MaximumSet { max_us } => {
                write!(f, "Maximum pulse width set to {} microseconds.", max_us)?;
            }
            Feedback::PositionSelected {
                position,
                width_us,
                min_us,
                max_us,
            } => {
                write!(
                    f,
                    "Positioning servo at position {} with {} microsecond pulse in [{}, {}].",
                    position, width_us, min_us, max_us
                )?;
            }
            Feedback::InvalidCommand { byte } => {
                write!(f, "Invalid command: '{}'", char::from(byte))?;
            }
            Feedback::InputHalted { fault } => {
                f.write_str(LINE_END)?;
                if fault.is_end_of_stream() {
                    f.write_str("Encountered end of file.")?;
                } else {
                    write!(f, "Encountered error: {}.", fault)?;
                }
            }
        }
        f.write_str(LINE_END)
    }
}

/// Destination for feedback events
pub trait FeedbackSink {
    /// Deliver one event
    fn emit(&mut self, feedback: &Feedback);
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for &mut S {
    fn emit(&mut self, feedback: &Feedback) {
        (**self).emit(feedback);
    }
}

/// Feedback sink that renders events as text on the serial link
pub struct SerialConsole<T> {
    tx: T,
}

impl<T: UartTx> SerialConsole<T> {
    /// Wrap a transmitter
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    /// Access the underlying transmitter
    pub fn tx(&self) -> &T {
        &self.tx
    }

    /// Release the underlying transmitter
    pub fn into_inner(self) -> T {
        self.tx
    }
}

impl<T: UartTx> Write for SerialConsole<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.tx.write_text(s);
        Ok(())
    }
}

impl<T: UartTx> FeedbackSink for SerialConsole<T> {
    fn emit(&mut self, feedback: &Feedback) {
        match *feedback {
            // Echo the rejected byte as-is; `Display` would send it as UTF-8
            Feedback::InvalidCommand { byte } => {
                self.tx.write_text("Invalid command: '");
                self.tx.write_byte(byte);
                self.tx.write_text("'");
                self.tx.write_text(LINE_END);
            }
            _ => {
                // Writes to the link cannot fail, so neither can formatting
                let _ = write!(self, "{}", feedback);
            }
        }
    }
}
