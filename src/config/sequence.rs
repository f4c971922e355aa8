//! Exercise sequence parameters.

use serde::Deserialize;

use super::units::{Microseconds, Milliseconds, Steps};

/// Step count, pulse width and settle delay shared by every motion of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SequenceConfig {
    /// Steps per motion.
    #[serde(default = "default_step_count")]
    pub step_count: Steps,

    /// Step pulse half-period in microseconds.
    #[serde(default = "default_pulse_width", rename = "pulse_width_us")]
    pub pulse_width: Microseconds,

    /// Pause after each motion in milliseconds.
    #[serde(default = "default_settle_delay", rename = "settle_delay_ms")]
    pub settle_delay: Milliseconds,
}

fn default_step_count() -> Steps {
    Steps::ONE_REVOLUTION_SIXTEENTH
}

fn default_pulse_width() -> Microseconds {
    Microseconds(800)
}

fn default_settle_delay() -> Milliseconds {
    Milliseconds(1_000)
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            step_count: default_step_count(),
            pulse_width: default_pulse_width(),
            settle_delay: default_settle_delay(),
        }
    }
}
