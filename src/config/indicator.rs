//! Status indicator configuration.

use serde::Deserialize;

use super::axis::{ActiveLevel, LineId};

/// Lines for the power-present and motion-active indicators.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct IndicatorConfig {
    /// Power-present indicator line.
    pub power_line: LineId,

    /// Motion-active indicator line.
    pub motion_line: LineId,

    /// Polarity shared by both indicators.
    #[serde(default)]
    pub active: ActiveLevel,
}

impl IndicatorConfig {
    /// The indicator lines paired with their role.
    pub fn lines(&self) -> [(&'static str, LineId); 2] {
        [("power", self.power_line), ("motion", self.motion_line)]
    }
}

impl Default for IndicatorConfig {
    /// Red power LED on line 8, green motion LED on line 9, both lit by driving low.
    fn default() -> Self {
        Self {
            power_line: LineId(8),
            motion_line: LineId(9),
            active: ActiveLevel::Low,
        }
    }
}
