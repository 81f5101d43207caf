//! Delay adapter over `embedded-hal` `DelayNs`
//!
//! On the board this wraps `embassy_time::Delay`, which busy-waits on the
//! system timer.

use embedded_hal::delay::DelayNs;
use servoterm_hal::BlockingDelay;

/// Blocking delay source
pub struct HalDelay<D> {
    inner: D,
}

impl<D: DelayNs> HalDelay<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: DelayNs> BlockingDelay for HalDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.inner.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_forwards_durations() {
        let mut delay = HalDelay::new(CountingDelay::default());
        BlockingDelay::delay_us(&mut delay, 1500);
        BlockingDelay::delay_ms(&mut delay, 20);
        assert_eq!(delay.inner.total_ns, 1_500_000 + 20_000_000);
    }

    #[test]
    fn test_longest_pulse_is_exact() {
        let mut delay = HalDelay::new(CountingDelay::default());
        BlockingDelay::delay_us(&mut delay, u32::from(u16::MAX));
        assert_eq!(delay.inner.total_ns, 65_535_000);
    }
}
