//! Configuration types
//!
//! Startup defaults for the servo model and the control loop. Nothing here is
//! persisted; every power cycle starts from these values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default commanded pulse width (µs)
pub const DEFAULT_PULSE_WIDTH_US: u16 = 1500;

/// Default lower bound (µs)
pub const DEFAULT_PULSE_WIDTH_MIN_US: u16 = 0;

/// Default upper bound (µs), the full representable range
pub const DEFAULT_PULSE_WIDTH_MAX_US: u16 = u16::MAX;

/// Default step for the nudge commands (µs)
pub const DEFAULT_PULSE_INCREMENT_US: u16 = 50;

/// Default constant subtracted from the width before emission (µs)
pub const DEFAULT_PULSE_OVERHEAD_US: u16 = 500;

/// Servos expect a refresh every 20 ms
pub const DEFAULT_REFRESH_PERIOD_MS: u32 = 20;

/// Errors found while validating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Minimum width is above the maximum width
    InvertedBounds,
    /// Default width lies outside `[min, max]`
    DefaultOutOfBounds,
    /// Nudge step of zero would make `,` and `.` no-ops
    ZeroIncrement,
    /// Refresh period of zero
    ZeroRefreshPeriod,
}

/// Servo pulse-width configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoConfig {
    /// Width at startup and after reset (µs)
    pub default_width_us: u16,
    /// Lower bound at startup and after reset (µs)
    pub width_min_us: u16,
    /// Upper bound at startup and after reset (µs)
    pub width_max_us: u16,
    /// Step for `,` and `.` (µs)
    pub increment_us: u16,
    /// Per-pulse overhead subtracted before emission (µs)
    pub overhead_us: u16,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            default_width_us: DEFAULT_PULSE_WIDTH_US,
            width_min_us: DEFAULT_PULSE_WIDTH_MIN_US,
            width_max_us: DEFAULT_PULSE_WIDTH_MAX_US,
            increment_us: DEFAULT_PULSE_INCREMENT_US,
            overhead_us: DEFAULT_PULSE_OVERHEAD_US,
        }
    }
}

impl ServoConfig {
    /// Check that the defaults describe a valid starting state
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width_min_us > self.width_max_us {
            return Err(ConfigError::InvertedBounds);
        }
        if self.default_width_us < self.width_min_us || self.default_width_us > self.width_max_us
        {
            return Err(ConfigError::DefaultOutOfBounds);
        }
        if self.increment_us == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        Ok(())
    }
}

/// Control loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopConfig {
    /// Wait at the start of every frame (ms)
    pub refresh_period_ms: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            refresh_period_ms: DEFAULT_REFRESH_PERIOD_MS,
        }
    }
}

impl LoopConfig {
    /// Check that the loop timing is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_period_ms == 0 {
            return Err(ConfigError::ZeroRefreshPeriod);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ServoConfig::default().validate(), Ok(()));
        assert_eq!(LoopConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_values() {
        let config = ServoConfig::default();
        assert_eq!(config.default_width_us, 1500);
        assert_eq!(config.width_min_us, 0);
        assert_eq!(config.width_max_us, u16::MAX);
        assert_eq!(config.increment_us, 50);
        assert_eq!(config.overhead_us, 500);
        assert_eq!(LoopConfig::default().refresh_period_ms, 20);
    }

    #[test]
    fn test_inverted_bounds() {
        let config = ServoConfig {
            width_min_us: 2000,
            width_max_us: 1000,
            ..ServoConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvertedBounds));
    }

    #[test]
    fn test_default_out_of_bounds() {
        let config = ServoConfig {
            width_min_us: 1600,
            width_max_us: 2000,
            ..ServoConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DefaultOutOfBounds));
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = ServoConfig {
            increment_us: 0,
            ..ServoConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroIncrement));

        let config = LoopConfig {
            refresh_period_ms: 0,
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRefreshPeriod));
    }
}
