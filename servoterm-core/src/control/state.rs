//! Control loop state machine
//!
//! Two states: the loop is running, or it has halted on an input fault.
//! Halting is terminal; there is no event that leaves it.

use servoterm_hal::RxFault;

/// Control loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    /// Processing input and emitting pulses
    Running,
    /// Input stream failed; no more input is read and no pulses are emitted
    Halted(RxFault),
}

/// Events observed by the loop during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopEvent {
    /// No byte was waiting
    Idle,
    /// A byte was read and interpreted
    ByteReceived(u8),
    /// Reading the waiting byte failed
    InputFault(RxFault),
}

impl LoopState {
    /// Check if this is the terminal state
    pub fn is_halted(&self) -> bool {
        matches!(self, LoopState::Halted(_))
    }

    /// Check if this state still reads input and drives the pulse line
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }

    /// Fault that caused the halt, if any
    pub fn halt_reason(&self) -> Option<RxFault> {
        match self {
            LoopState::Halted(fault) => Some(*fault),
            LoopState::Running => None,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: LoopEvent) -> Self {
        match (self, event) {
            (LoopState::Running, LoopEvent::InputFault(fault)) => LoopState::Halted(fault),
            (LoopState::Running, LoopEvent::Idle | LoopEvent::ByteReceived(_)) => {
                LoopState::Running
            }
            // Halted is terminal
            (LoopState::Halted(_), _) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_stays_running_on_input() {
        let state = LoopState::Running;
        assert_eq!(state.transition(LoopEvent::Idle), LoopState::Running);
        assert_eq!(
            state.transition(LoopEvent::ByteReceived(b'z')),
            LoopState::Running
        );
    }

    #[test]
    fn test_fault_halts() {
        let faults = [
            RxFault::EndOfStream,
            RxFault::Framing,
            RxFault::Parity,
            RxFault::Overrun,
            RxFault::Break,
            RxFault::Other,
        ];

        for fault in faults {
            let next = LoopState::Running.transition(LoopEvent::InputFault(fault));
            assert_eq!(next, LoopState::Halted(fault));
            assert!(next.is_halted());
            assert_eq!(next.halt_reason(), Some(fault));
        }
    }

    #[test]
    fn test_halted_is_terminal() {
        let halted = LoopState::Halted(RxFault::EndOfStream);
        let events = [
            LoopEvent::Idle,
            LoopEvent::ByteReceived(b'.'),
            LoopEvent::InputFault(RxFault::Overrun),
        ];

        for event in events {
            assert_eq!(halted.transition(event), halted);
        }
        assert!(!halted.is_running());
    }
}
