//! Bounded pulse-width model
//!
//! Every mutation leaves `min <= width <= max` and never wraps the `u16`
//! range. Adjustments are checked before they are applied and clamped to the
//! bounds afterwards.

use crate::config::ServoConfig;

/// Current servo pulse-width state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoState {
    /// Commanded width (µs)
    width_us: u16,
    /// Inclusive lower bound (µs)
    min_us: u16,
    /// Inclusive upper bound (µs)
    max_us: u16,
    /// Step for nudge commands (µs)
    increment_us: u16,
    /// Subtracted from the width before emission (µs)
    overhead_us: u16,
    /// Values restored by [`ServoState::reset`]
    defaults: ServoConfig,
}

impl Default for ServoState {
    fn default() -> Self {
        Self::new(ServoConfig::default())
    }
}

impl ServoState {
    /// Create the startup state from a configuration
    pub fn new(config: ServoConfig) -> Self {
        Self {
            width_us: config.default_width_us,
            min_us: config.width_min_us,
            max_us: config.width_max_us,
            increment_us: config.increment_us,
            overhead_us: config.overhead_us,
            defaults: config,
        }
    }

    /// Current commanded width (µs)
    pub fn width_us(&self) -> u16 {
        self.width_us
    }

    /// Current lower bound (µs)
    pub fn min_us(&self) -> u16 {
        self.min_us
    }

    /// Current upper bound (µs)
    pub fn max_us(&self) -> u16 {
        self.max_us
    }

    /// Nudge step (µs)
    pub fn increment_us(&self) -> u16 {
        self.increment_us
    }

    /// Per-pulse overhead (µs)
    pub fn overhead_us(&self) -> u16 {
        self.overhead_us
    }

    /// Configuration this state was created from
    pub fn defaults(&self) -> &ServoConfig {
        &self.defaults
    }

    /// Active-phase duration of the next pulse (µs)
    ///
    /// Derived from the current width on every call, so it can never lag
    /// behind a state change.
    pub fn pulse_delay_us(&self) -> u16 {
        self.width_us.saturating_sub(self.overhead_us)
    }

    /// Check the bound invariant
    pub fn in_bounds(&self) -> bool {
        self.min_us <= self.width_us && self.width_us <= self.max_us
    }

    /// Move one step toward the lower bound
    ///
    /// The step is skipped when it would take the width to zero or below,
    /// then the result is floored at the lower bound.
    pub fn step_down(&mut self) {
        if self.width_us > self.increment_us {
            self.width_us -= self.increment_us;
        }
        if self.width_us < self.min_us {
            self.width_us = self.min_us;
        }
    }

    /// Move one step toward the upper bound
    ///
    /// The step is skipped when it would reach the top of the `u16` range,
    /// then the result is capped at the upper bound.
    pub fn step_up(&mut self) {
        if u16::MAX - self.width_us > self.increment_us {
            self.width_us += self.increment_us;
        }
        if self.width_us > self.max_us {
            self.width_us = self.max_us;
        }
    }

    /// Move to the middle of the bound range
    ///
    /// Halves are rounded to the nearest even width.
    pub fn center(&mut self) {
        let sum = self.min_us as u32 + self.max_us as u32;
        let mut mid = sum / 2;
        if sum % 2 == 1 && mid % 2 == 1 {
            mid += 1;
        }
        // mid lies between the two u16 bounds
        self.width_us = mid as u16;
    }

    /// Restore width and bounds to the startup configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults);
    }

    /// Narrow the lower bound to the current width
    pub fn set_min_to_current(&mut self) {
        self.min_us = self.width_us;
    }

    /// Narrow the upper bound to the current width
    pub fn set_max_to_current(&mut self) {
        self.max_us = self.width_us;
    }

    /// Move to one of ten evenly spaced positions across the bound range
    ///
    /// Position 0 is the lower bound, 9 the upper bound. Positions above 9
    /// are treated as 9.
    pub fn move_to_position(&mut self, position: u8) {
        let position = position.min(9) as i32;
        let span = self.max_us as i32 - self.min_us as i32;
        // floor(x + 1/2) of position * span / 9, exact in integers
        let offset = (2 * position * span + 9).div_euclid(18);
        self.width_us = (self.min_us as i32 + offset) as u16;
    }
}
