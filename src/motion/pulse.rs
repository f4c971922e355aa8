//! Step pulse generation.

use super::timing::PulseWidth;

/// Which way the step line moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Step line goes high; the driver advances one step.
    Rising,
    /// Step line goes low.
    Falling,
}

/// One step-line transition and how long to hold the new level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseEdge {
    /// Transition to apply.
    pub edge: Edge,
    /// Hold time after the transition, in microseconds.
    pub hold_us: u32,
}

/// Iterator over the edges of a symmetric pulse train.
///
/// Yields `Rising, Falling` once per step, each followed by a hold of the
/// pulse width, so the train lasts exactly `2 * total_steps * pulse_width`.
#[derive(Debug, Clone)]
pub struct PulseTrain {
    /// Steps to emit.
    total_steps: u32,

    /// Steps whose rising edge has been emitted.
    current_step: u32,

    /// Whether the next edge is the falling half of the current step.
    high: bool,

    /// Hold after each edge.
    pulse_width: PulseWidth,
}

impl PulseTrain {
    /// Create a train of `total_steps` pulses.
    pub fn new(total_steps: u32, pulse_width: PulseWidth) -> Self {
        Self {
            total_steps,
            current_step: 0,
            high: false,
            pulse_width,
        }
    }
}

impl Iterator for PulseTrain {
    type Item = PulseEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = if self.high {
            self.high = false;
            Edge::Falling
        } else if self.current_step < self.total_steps {
            self.current_step += 1;
            self.high = true;
            Edge::Rising
        } else {
            return None;
        };

        Some(PulseEdge {
            edge,
            hold_us: self.pulse_width.as_micros(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Up to 2 * u32::MAX edges, which does not fit a 32-bit usize.
        let steps_left = u64::from(self.total_steps - self.current_step);
        let remaining = steps_left * 2 + u64::from(self.high);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
