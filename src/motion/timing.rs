//! Validated timing values.
//!
//! Zero durations are unrepresentable, so a motion built from these types
//! always has well-defined timing.

use core::num::NonZeroU32;

use crate::config::units::{Microseconds, Milliseconds};
use crate::error::{ConfigError, Error, Result};

/// Step pulse half-period: how long the step line is held high, and then low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PulseWidth(NonZeroU32);

impl PulseWidth {
    /// Create a pulse width.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPulseWidth` for zero.
    pub fn new(width: Microseconds) -> Result<Self> {
        NonZeroU32::new(width.value())
            .map(Self)
            .ok_or(Error::Config(ConfigError::InvalidPulseWidth(width.value())))
    }

    /// Create a pulse width from raw microseconds.
    pub fn from_micros(us: u32) -> Result<Self> {
        Self::new(Microseconds(us))
    }

    /// Get the width in microseconds.
    #[inline]
    pub const fn as_micros(self) -> u32 {
        self.0.get()
    }

    /// Time spent on `steps` full high+low periods, in microseconds.
    ///
    /// Saturates at `u64::MAX`, which only the largest widths and step
    /// counts together can reach.
    #[inline]
    pub const fn train_duration_us(self, steps: u32) -> u64 {
        (steps as u64 * self.0.get() as u64).saturating_mul(2)
    }
}

/// Pause inserted after each motion of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SettleDelay(NonZeroU32);

impl SettleDelay {
    /// Create a settle delay.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSettleDelay` for zero.
    pub fn new(delay: Milliseconds) -> Result<Self> {
        NonZeroU32::new(delay.value())
            .map(Self)
            .ok_or(Error::Config(ConfigError::InvalidSettleDelay(delay.value())))
    }

    /// Create a settle delay from raw milliseconds.
    pub fn from_millis(ms: u32) -> Result<Self> {
        Self::new(Milliseconds(ms))
    }

    /// Get the delay in milliseconds.
    #[inline]
    pub const fn as_millis(self) -> u32 {
        self.0.get()
    }

    /// Get the delay in microseconds.
    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.0.get() as u64 * 1_000
    }
}
