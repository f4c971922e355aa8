//! Configuration validation.

use heapless::Vec;

use crate::error::{ConfigError, Error, Result};

use super::axis::{signal_label, LineId};
use super::system::MAX_AXES;
use super::{SequenceConfig, SystemConfig};

/// Three lines per axis plus the two indicators.
const MAX_LINES: usize = MAX_AXES * 3 + 2;

/// Validate a system configuration.
///
/// Checks:
/// - At least one axis is configured
/// - Axis names are non-empty and unique
/// - Every line is used by exactly one signal, across all axes and indicators
/// - Pulse width and settle delay are positive
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if config.axes.is_empty() {
        return Err(Error::Config(ConfigError::NoAxes));
    }

    for (i, axis) in config.axes.iter().enumerate() {
        axis.validate()?;

        if config.axes[..i].iter().any(|prev| prev.name == axis.name) {
            return Err(Error::Config(ConfigError::DuplicateAxisName(axis.name.clone())));
        }
    }

    validate_lines(config)?;
    validate_sequence(&config.sequence)?;

    Ok(())
}

/// Check that the sequence timing is usable.
pub(crate) fn validate_sequence(sequence: &SequenceConfig) -> Result<()> {
    if sequence.pulse_width.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidPulseWidth(0)));
    }

    if sequence.settle_delay.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidSettleDelay(0)));
    }

    Ok(())
}

fn validate_lines(config: &SystemConfig) -> Result<()> {
    let mut claimed: Vec<(LineId, heapless::String<48>), MAX_LINES> = Vec::new();

    let axis_lines = config.axes.iter().flat_map(|axis| {
        axis.lines()
            .into_iter()
            .map(move |(role, line)| (signal_label(&axis.name, role), line))
    });
    let indicator_lines = config
        .indicators
        .lines()
        .into_iter()
        .map(|(role, line)| (signal_label("indicators", role), line));

    for (label, line) in axis_lines.chain(indicator_lines) {
        if let Some((_, owner)) = claimed.iter().find(|(l, _)| *l == line) {
            return Err(Error::Config(ConfigError::DuplicateLine {
                line: line.0,
                first: owner.clone(),
                second: label,
            }));
        }
        // Capacity covers the largest possible configuration.
        let _ = claimed.push((line, label));
    }

    Ok(())
}
