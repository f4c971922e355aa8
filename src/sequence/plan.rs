//! Validated sequence timing.

use crate::config::SequenceConfig;
use crate::error::Result;
use crate::motion::{MotionRequest, PulseWidth, SettleDelay};

/// What the controller asks of each axis: `step_count` pulses clockwise,
/// settle, the same counter-clockwise, settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencePlan {
    /// Steps per motion.
    pub step_count: u32,
    /// Pulse half-period.
    pub pulse_width: PulseWidth,
    /// Pause after each motion.
    pub settle_delay: SettleDelay,
}

impl SequencePlan {
    /// Create a plan from validated timing.
    pub const fn new(step_count: u32, pulse_width: PulseWidth, settle_delay: SettleDelay) -> Self {
        Self {
            step_count,
            pulse_width,
            settle_delay,
        }
    }

    /// Create a plan from raw configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the pulse width or settle delay is zero.
    pub fn from_config(config: &SequenceConfig) -> Result<Self> {
        Ok(Self {
            step_count: config.step_count.value(),
            pulse_width: PulseWidth::new(config.pulse_width)?,
            settle_delay: SettleDelay::new(config.settle_delay)?,
        })
    }

    /// The two motions every axis performs per cycle, in order: out
    /// clockwise, then back the opposite way.
    pub fn requests(&self) -> [MotionRequest; 2] {
        let outbound = MotionRequest::clockwise(self.step_count, self.pulse_width);
        let inbound = MotionRequest::new(
            self.step_count,
            outbound.direction.opposite(),
            self.pulse_width,
        );
        [outbound, inbound]
    }

    /// Time for one axis to go there and back, settles included, in
    /// microseconds: `4 * step_count * pulse_width + 2 * settle_delay`.
    ///
    /// Saturates at `u64::MAX`.
    pub fn axis_cycle_duration_us(&self) -> u64 {
        let motion = self.pulse_width.train_duration_us(self.step_count);
        motion
            .saturating_add(self.settle_delay.as_micros())
            .saturating_mul(2)
    }

    /// Time for a full cycle over `axes` axes, in microseconds. Saturates
    /// at `u64::MAX`.
    pub fn cycle_duration_us(&self, axes: usize) -> u64 {
        self.axis_cycle_duration_us()
            .saturating_mul(u64::try_from(axes).unwrap_or(u64::MAX))
    }
}

impl TryFrom<&SequenceConfig> for SequencePlan {
    type Error = crate::error::Error;

    fn try_from(config: &SequenceConfig) -> Result<Self> {
        Self::from_config(config)
    }
}
