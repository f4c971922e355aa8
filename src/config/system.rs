//! System configuration - root configuration structure.

use heapless::Vec;
use serde::Deserialize;

use super::axis::AxisConfig;
use super::indicator::IndicatorConfig;
use super::sequence::SequenceConfig;

/// Maximum number of axes a configuration or controller can hold.
pub const MAX_AXES: usize = 8;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemConfig {
    /// Status indicator lines.
    #[serde(default)]
    pub indicators: IndicatorConfig,

    /// Sequence timing.
    #[serde(default)]
    pub sequence: SequenceConfig,

    /// Axes in the order the sequence exercises them.
    #[serde(default)]
    pub axes: Vec<AxisConfig, MAX_AXES>,
}

impl SystemConfig {
    /// Get an axis configuration by name.
    pub fn axis(&self, name: &str) -> Option<&AxisConfig> {
        self.axes.iter().find(|a| a.name.as_str() == name)
    }

    /// List all axis names in configuration order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|a| a.name.as_str())
    }
}

impl Default for SystemConfig {
    /// The two-axis bench: axis 1 on lines 2/3/4, axis 2 on lines 5/6/7,
    /// indicators on 8/9, one revolution at 800 us with 1 s pauses.
    fn default() -> Self {
        let mut axes = Vec::new();
        for (name, step, dir, enable) in [("axis_1", 2, 3, 4), ("axis_2", 5, 6, 7)] {
            if let Ok(axis) = AxisConfig::new(name, step, dir, enable) {
                let _ = axes.push(axis);
            }
        }

        Self {
            indicators: IndicatorConfig::default(),
            sequence: SequenceConfig::default(),
            axes,
        }
    }
}
