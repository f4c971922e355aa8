//! One bounded motion command.

use super::pulse::PulseTrain;
use super::timing::PulseWidth;

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise.
    Clockwise,
    /// Counter-clockwise.
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// DIR pin level (`true` = high) for this direction.
    #[inline]
    pub fn pin_level(self, inverted: bool) -> bool {
        matches!(self, Direction::Clockwise) != inverted
    }

    /// Short name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Clockwise => "CW",
            Direction::CounterClockwise => "CCW",
        }
    }
}

/// A single motion: `step_count` pulses in `direction`, each `pulse_width`
/// high then `pulse_width` low.
///
/// A `step_count` of zero is a valid request that only brackets the axis
/// with enable assert and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionRequest {
    /// Number of step pulses.
    pub step_count: u32,
    /// Direction held for the whole motion.
    pub direction: Direction,
    /// Half-period of each pulse.
    pub pulse_width: PulseWidth,
}

impl MotionRequest {
    /// Create a new request.
    pub const fn new(step_count: u32, direction: Direction, pulse_width: PulseWidth) -> Self {
        Self {
            step_count,
            direction,
            pulse_width,
        }
    }

    /// Clockwise request.
    pub const fn clockwise(step_count: u32, pulse_width: PulseWidth) -> Self {
        Self::new(step_count, Direction::Clockwise, pulse_width)
    }

    /// Counter-clockwise request.
    pub const fn counter_clockwise(step_count: u32, pulse_width: PulseWidth) -> Self {
        Self::new(step_count, Direction::CounterClockwise, pulse_width)
    }

    /// Whether the request emits no pulses.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.step_count == 0
    }

    /// Pulse-train duration in microseconds (`2 * step_count * pulse_width`),
    /// saturating at `u64::MAX`.
    #[inline]
    pub const fn duration_us(&self) -> u64 {
        self.pulse_width.train_duration_us(self.step_count)
    }

    /// The step-line edges this request produces.
    pub fn pulse_train(&self) -> PulseTrain {
        PulseTrain::new(self.step_count, self.pulse_width)
    }
}
