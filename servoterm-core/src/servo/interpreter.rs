//! Command interpreter
//!
//! Maps a decoded [`Command`] to a state transition and the feedback event
//! describing the result.

use super::command::Command;
use super::state::ServoState;
use crate::feedback::Feedback;

impl ServoState {
    /// Apply a command and report the outcome
    ///
    /// Invalid commands leave the state untouched.
    pub fn apply(&mut self, command: Command) -> Feedback {
        match command {
            Command::StepDown => {
                self.step_down();
                Feedback::Positioned {
                    width_us: self.width_us(),
                }
            }
            Command::StepUp => {
                self.step_up();
                Feedback::Positioned {
                    width_us: self.width_us(),
                }
            }
            Command::Center => {
                self.center();
                Feedback::Centered {
                    width_us: self.width_us(),
                    min_us: self.min_us(),
                    max_us: self.max_us(),
                }
            }
            Command::Reset => {
                self.reset();
                Feedback::Reset {
                    width_us: self.width_us(),
                    min_us: self.min_us(),
                    max_us: self.max_us(),
                }
            }
            Command::SetMin => {
                self.set_min_to_current();
                Feedback::MinimumSet {
                    min_us: self.min_us(),
                }
            }
            Command::SetMax => {
                self.set_max_to_current();
                Feedback::MaximumSet {
                    max_us: self.max_us(),
                }
            }
            Command::Position(position) => {
                self.move_to_position(position);
                Feedback::PositionSelected {
                    position,
                    width_us: self.width_us(),
                    min_us: self.min_us(),
                    max_us: self.max_us(),
                }
            }
            Command::Invalid(byte) => Feedback::InvalidCommand { byte },
        }
    }
}

/// Interpret one input byte against a state
///
/// Pure form of [`ServoState::apply`]: returns the next state and the
/// feedback, leaving the input untouched.
pub fn interpret(state: ServoState, byte: u8) -> (ServoState, Feedback) {
    let mut next = state;
    let feedback = next.apply(Command::from_byte(byte));
    (next, feedback)
}
