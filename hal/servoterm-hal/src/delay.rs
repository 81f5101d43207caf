//! Blocking delay abstraction
//!
//! The control loop times both the refresh frame and the active phase of
//! each pulse with busy waits. Implementations must not return early; a test
//! double may return immediately as long as it records the requested time.

/// Blocking delay source
pub trait BlockingDelay {
    /// Block for `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        total_us: u64,
        calls: u32,
    }

    impl BlockingDelay for Counter {
        fn delay_us(&mut self, us: u32) {
            self.total_us += us as u64;
            self.calls += 1;
        }
    }

    #[test]
    fn test_delay_ms_defaults_to_microseconds() {
        let mut delay = Counter::default();
        delay.delay_ms(20);
        assert_eq!(delay.total_us, 20_000);
        assert_eq!(delay.calls, 20);
    }

    #[test]
    fn test_zero_ms_does_not_wait() {
        let mut delay = Counter::default();
        delay.delay_ms(0);
        assert_eq!(delay.total_us, 0);
    }
}
