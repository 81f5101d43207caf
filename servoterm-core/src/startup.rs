//! Startup diagnostics
//!
//! Runs once before the control loop: a flash of the diagnostic LED, then
//! the free memory report and the keyboard help on the serial link.

use core::fmt::Write;

use heapless::String;
use servoterm_hal::{BlockingDelay, OutputPin, UartTx};

use crate::pulse::PulseGenerator;

/// Default length of the startup flash (ms)
pub const BLINK_DURATION_MS: u32 = 250;

/// Keyboard help shown at startup
pub const HELP_BANNER: &str = concat!(
    "\r\n",
    "Keyboard controls\r\n",
    "-----------------\r\n",
    "\r\n",
    "    ENTER  Reset\r\n",
    "    SPACE  Move to center\r\n",
    "    <      Set counter-clockwise limit\r\n",
    "    >      Set clockwise limit\r\n",
    "    ,      Move counter-clockwise\r\n",
    "    .      Move clockwise\r\n",
    "    0-9    Move to relative position between min and max.\r\n",
    "\r\n",
);

/// Write the free memory line
pub fn write_free_ram<T: UartTx>(tx: &mut T, free_bytes: u32) {
    let mut line: String<32> = String::new();
    // Longest possible line is 28 bytes
    let _ = write!(line, "Free RAM: {} bytes\r\n", free_bytes);
    tx.write_text(&line);
}

/// Run the serial part of startup and claim the pulse line
///
/// Reports free memory, forces the pulse line low, then prints the help.
/// `free_bytes` is `None` when the board cannot measure free memory; the
/// report line is skipped then.
pub fn announce<T: UartTx, P: OutputPin>(
    tx: &mut T,
    free_bytes: Option<u32>,
    pulse_pin: P,
) -> PulseGenerator<P> {
    if let Some(free_bytes) = free_bytes {
        write_free_ram(tx, free_bytes);
    }
    let pulse = PulseGenerator::new(pulse_pin);
    tx.write_text(HELP_BANNER);
    pulse
}

/// Diagnostic indicator line
pub struct Blinker<P> {
    pin: P,
}

impl<P: OutputPin> Blinker<P> {
    /// Take the indicator line and switch it off
    pub fn new(mut pin: P) -> Self {
        pin.set_low();
        Self { pin }
    }

    /// Turn the indicator on for `duration_ms`, then off
    pub fn flash<D: BlockingDelay>(&mut self, duration_ms: u32, delay: &mut D) {
        self.pin.set_high();
        delay.delay_ms(duration_ms);
        self.pin.set_low();
    }

    /// Leave the indicator on, e.g. to mark a halt
    pub fn hold_on(&mut self) {
        self.pin.set_high();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{HwEvent, RecordingDelay, RecordingPin, RecordingTx, Trace};

    #[test]
    fn test_blinker_flash() {
        let trace = Trace::default();
        let mut blinker = Blinker::new(RecordingPin::new(&trace));
        let mut delay = RecordingDelay::new(&trace);

        blinker.flash(BLINK_DURATION_MS, &mut delay);
        assert_eq!(
            trace.events(),
            vec![
                HwEvent::Low,
                HwEvent::High,
                HwEvent::WaitMs(250),
                HwEvent::Low
            ]
        );

        blinker.hold_on();
        assert_eq!(trace.events().last(), Some(&HwEvent::High));
    }

    #[test]
    fn test_free_ram_extremes() {
        let mut tx = RecordingTx::default();
        write_free_ram(&mut tx, 0);
        write_free_ram(&mut tx, u32::MAX);
        assert_eq!(
            tx.text(),
            "Free RAM: 0 bytes\r\nFree RAM: 4294967295 bytes\r\n"
        );
    }

    #[test]
    fn test_announce_order() {
        let trace = Trace::default();
        let mut tx = RecordingTx::default();
        let pulse = announce(&mut tx, Some(1841), RecordingPin::new(&trace));

        let text = tx.text();
        assert!(text.starts_with("Free RAM: 1841 bytes\r\n\r\nKeyboard controls\r\n"));
        assert!(text.ends_with("between min and max.\r\n\r\n"));
        assert_eq!(trace.events(), vec![HwEvent::Low]);
        assert!(!pulse.is_active());
    }

    #[test]
    fn test_announce_without_memory_report() {
        let trace = Trace::default();
        let mut tx = RecordingTx::default();
        announce(&mut tx, None, RecordingPin::new(&trace));
        assert_eq!(tx.text(), HELP_BANNER);
    }

    #[test]
    fn test_banner_lists_every_command() {
        for key in ["ENTER", "SPACE", "<", ">", ",", ".", "0-9"] {
            assert!(HELP_BANNER.contains(key), "missing {}", key);
        }
        assert!(HELP_BANNER.lines().all(|line| line.len() < 80));
    }
}
