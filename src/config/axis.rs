//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

/// Longest axis name accepted, in bytes.
pub const MAX_AXIS_NAME_LEN: usize = 32;

/// Identifier of one digital output line (board pin number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct LineId(pub u8);

impl LineId {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Electrical level that means "asserted" for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum ActiveLevel {
    /// Driving the line high asserts it.
    #[default]
    High,
    /// Driving the line low asserts it (e.g. ENN on most driver chips).
    Low,
}

impl ActiveLevel {
    /// Pin level (`true` = high) that asserts a line with this polarity.
    #[inline]
    pub const fn asserted_level(self) -> bool {
        matches!(self, ActiveLevel::High)
    }

    /// Pin level (`true` = high) that releases a line with this polarity.
    #[inline]
    pub const fn released_level(self) -> bool {
        !self.asserted_level()
    }
}

/// Per-axis identity: the three lines driving one stepper driver chip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxisConfig {
    /// Axis name (max 32 chars).
    pub name: String<MAX_AXIS_NAME_LEN>,

    /// STEP line; the driver advances on its rising edge.
    pub step_line: LineId,

    /// DIR line.
    pub direction_line: LineId,

    /// ENABLE line.
    pub enable_line: LineId,

    /// Polarity of the enable line.
    #[serde(default = "default_enable_active")]
    pub enable_active: ActiveLevel,

    /// Invert direction pin logic (clockwise drives DIR low).
    #[serde(default)]
    pub invert_direction: bool,
}

fn default_enable_active() -> ActiveLevel {
    ActiveLevel::Low
}

impl AxisConfig {
    /// Create an axis configuration with active-low enable and normal direction sense.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or too long, or if two of the
    /// three lines coincide.
    pub fn new(name: &str, step_line: u8, direction_line: u8, enable_line: u8) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::Config(ConfigError::EmptyAxisName));
        }
        let name = String::try_from(name).map_err(|_| {
            Error::Config(ConfigError::AxisNameTooLong {
                len: name.len(),
                max: MAX_AXIS_NAME_LEN,
            })
        })?;

        let config = Self {
            name,
            step_line: LineId(step_line),
            direction_line: LineId(direction_line),
            enable_line: LineId(enable_line),
            enable_active: default_enable_active(),
            invert_direction: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the enable line polarity.
    pub fn with_enable_active(mut self, level: ActiveLevel) -> Self {
        self.enable_active = level;
        self
    }

    /// Set direction inversion.
    pub fn with_inverted_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// The axis lines paired with their role, in step/direction/enable order.
    pub fn lines(&self) -> [(&'static str, LineId); 3] {
        [
            ("step", self.step_line),
            ("direction", self.direction_line),
            ("enable", self.enable_line),
        ]
    }

    /// Check that the name is set and the three lines are distinct.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::Config(ConfigError::EmptyAxisName));
        }

        let lines = self.lines();
        for (i, (role_a, line_a)) in lines.iter().enumerate() {
            for (role_b, line_b) in lines.iter().skip(i + 1) {
                if line_a == line_b {
                    return Err(Error::Config(ConfigError::DuplicateLine {
                        line: line_a.0,
                        first: signal_label(&self.name, role_a),
                        second: signal_label(&self.name, role_b),
                    }));
                }
            }
        }

        Ok(())
    }
}

/// Build a `owner.role` label for error reporting.
pub(crate) fn signal_label(owner: &str, role: &str) -> String<48> {
    let mut label = String::new();
    let _ = label.push_str(owner);
    let _ = label.push('.');
    let _ = label.push_str(role);
    label
}
