//! Test doubles for the HAL capability traits
//!
//! All doubles can share one [`Trace`] so tests can assert on the order of
//! hardware interactions across the serial link, the pulse line and the
//! delay source.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use servoterm_hal::{BlockingDelay, OutputPin, RxFault, UartRx, UartTx};

use crate::feedback::{Feedback, FeedbackSink};

/// One observable hardware interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwEvent {
    Poll,
    Read,
    High,
    Low,
    WaitUs(u32),
    WaitMs(u32),
}

/// Shared, ordered log of hardware interactions
#[derive(Debug, Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<HwEvent>>>);

impl Trace {
    pub fn push(&self, event: HwEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<HwEvent> {
        self.0.borrow().clone()
    }

    pub fn count(&self, event: HwEvent) -> usize {
        self.0.borrow().iter().filter(|e| **e == event).count()
    }

    /// Active-phase durations of every emitted pulse, in order
    pub fn pulses(&self) -> Vec<u32> {
        let events = self.0.borrow();
        events
            .windows(3)
            .filter_map(|w| match w {
                [HwEvent::High, HwEvent::WaitUs(us), HwEvent::Low] => Some(*us),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// What the receiver presents at one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Nothing arrived this frame
    Idle,
    /// A byte is waiting
    Byte(u8),
    /// The next read fails
    Fault(RxFault),
}

/// Receiver that replays a script of slots
///
/// An exhausted script behaves like an idle line.
#[derive(Debug, Default)]
pub struct ScriptedRx {
    script: VecDeque<Slot>,
    trace: Trace,
}

impl ScriptedRx {
    pub fn new(trace: &Trace, script: &[Slot]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            trace: trace.clone(),
        }
    }

    /// Script that delivers each byte in its own frame
    pub fn bytes(trace: &Trace, bytes: &[u8]) -> Self {
        let script: Vec<Slot> = bytes.iter().map(|&b| Slot::Byte(b)).collect();
        Self::new(trace, &script)
    }
}

impl UartRx for ScriptedRx {
    fn byte_available(&mut self) -> bool {
        self.trace.push(HwEvent::Poll);
        match self.script.front() {
            Some(Slot::Idle) => {
                self.script.pop_front();
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    fn read_byte(&mut self) -> Result<u8, RxFault> {
        self.trace.push(HwEvent::Read);
        match self.script.pop_front() {
            Some(Slot::Byte(byte)) => Ok(byte),
            Some(Slot::Fault(fault)) => Err(fault),
            Some(Slot::Idle) | None => Err(RxFault::EndOfStream),
        }
    }
}

/// Transmitter that keeps every byte written
#[derive(Debug, Default)]
pub struct RecordingTx {
    pub bytes: Vec<u8>,
}

impl RecordingTx {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl UartTx for RecordingTx {
    fn write_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }
}

/// Output pin that logs edges
#[derive(Debug, Default)]
pub struct RecordingPin {
    high: bool,
    trace: Trace,
}

impl RecordingPin {
    pub fn new(trace: &Trace) -> Self {
        Self {
            high: false,
            trace: trace.clone(),
        }
    }
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) {
        self.high = true;
        self.trace.push(HwEvent::High);
    }

    fn set_low(&mut self) {
        self.high = false;
        self.trace.push(HwEvent::Low);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Delay that returns immediately and logs the requested time
#[derive(Debug, Default)]
pub struct RecordingDelay {
    trace: Trace,
}

impl RecordingDelay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
        }
    }
}

impl BlockingDelay for RecordingDelay {
    fn delay_us(&mut self, us: u32) {
        self.trace.push(HwEvent::WaitUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.push(HwEvent::WaitMs(ms));
    }
}

/// Sink that keeps structured events
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Feedback>,
}

impl FeedbackSink for RecordingSink {
    fn emit(&mut self, feedback: &Feedback) {
        self.events.push(*feedback);
    }
}
