//! Control loop runner
//!
//! # Usage
//!
//! ```ignore
//! let mut control = ControlLoop::new(
//!     ServoState::new(servo_config),
//!     LoopConfig::default(),
//!     rx,
//!     SerialConsole::new(tx),
//!     PulseGenerator::new(pulse_pin),
//!     delay,
//! );
//!
//! // Blocks until the input stream fails
//! let fault = control.run();
//! ```

use servoterm_hal::{BlockingDelay, OutputPin, RxFault, UartRx};

use super::state::{LoopEvent, LoopState};
use crate::config::LoopConfig;
use crate::feedback::{Feedback, FeedbackSink};
use crate::pulse::PulseGenerator;
use crate::servo::{Command, ServoState};

/// Single-servo control loop
pub struct ControlLoop<R, S, P, D> {
    rx: R,
    sink: S,
    pulse: PulseGenerator<P>,
    delay: D,
    servo: ServoState,
    config: LoopConfig,
    state: LoopState,
    /// Frames that completed with a pulse
    frames: u32,
}

impl<R, S, P, D> ControlLoop<R, S, P, D>
where
    R: UartRx,
    S: FeedbackSink,
    P: OutputPin,
    D: BlockingDelay,
{
    /// Assemble a loop in the running state
    pub fn new(
        servo: ServoState,
        config: LoopConfig,
        rx: R,
        sink: S,
        pulse: PulseGenerator<P>,
        delay: D,
    ) -> Self {
        Self {
            rx,
            sink,
            pulse,
            delay,
            servo,
            config,
            state: LoopState::Running,
            frames: 0,
        }
    }

    /// Current loop state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Current servo state
    pub fn servo(&self) -> &ServoState {
        &self.servo
    }

    /// Frames that ended with a pulse
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Access the feedback sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Access the pulse generator
    pub fn pulse(&self) -> &PulseGenerator<P> {
        &self.pulse
    }

    /// Run one refresh frame
    ///
    /// Once halted this returns immediately without touching any hardware.
    pub fn step(&mut self) -> LoopState {
        if !self.state.is_running() {
            return self.state;
        }

        self.delay.delay_ms(self.config.refresh_period_ms);

        let event = if self.rx.byte_available() {
            match self.rx.read_byte() {
                Ok(byte) => {
                    let feedback = self.servo.apply(Command::from_byte(byte));
                    self.sink.emit(&feedback);
                    LoopEvent::ByteReceived(byte)
                }
                Err(fault) => {
                    self.sink.emit(&Feedback::InputHalted { fault });
                    LoopEvent::InputFault(fault)
                }
            }
        } else {
            LoopEvent::Idle
        };

        self.state = self.state.transition(event);
        if self.state.is_halted() {
            self.pulse.idle();
            return self.state;
        }

        self.pulse.emit(self.servo.pulse_delay_us(), &mut self.delay);
        self.frames = self.frames.wrapping_add(1);
        self.state
    }

    /// Run frames until the input stream fails
    ///
    /// Returns the fault that halted the loop.
    pub fn run(&mut self) -> RxFault {
        loop {
            if let Some(fault) = self.step().halt_reason() {
                return fault;
            }
        }
    }
}
