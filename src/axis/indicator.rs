//! Status indicators.
//!
//! The motion indicator is shared by every axis; the sequence controller owns
//! it and lends it to one axis at a time for the length of a motion.

use embedded_hal::digital::OutputPin;

use crate::config::ActiveLevel;
use crate::error::Result;

use super::line::Line;

/// Motion-active indicator, asserted only while an axis is energized.
pub struct MotionIndicator<P>
where
    P: OutputPin,
{
    line: Line<P>,
}

impl<P> MotionIndicator<P>
where
    P: OutputPin,
{
    /// Create the indicator in the cleared state.
    pub fn new(pin: P, active: ActiveLevel) -> Result<Self> {
        Ok(Self {
            line: Line::new_released(pin, active)?,
        })
    }

    /// Show motion.
    pub fn assert(&mut self) -> Result<()> {
        self.line.assert()
    }

    /// Show idle.
    pub fn clear(&mut self) -> Result<()> {
        self.line.release()
    }

    /// Whether motion is currently shown.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.line.is_asserted()
    }

    /// Give the pin back.
    pub fn into_inner(self) -> P {
        self.line.into_inner()
    }
}

/// Power-present indicator. Latches on and is never cleared.
pub struct PowerIndicator<P>
where
    P: OutputPin,
{
    line: Line<P>,
}

impl<P> PowerIndicator<P>
where
    P: OutputPin,
{
    /// Create the indicator, initially off.
    pub fn new(pin: P, active: ActiveLevel) -> Result<Self> {
        Ok(Self {
            line: Line::new_released(pin, active)?,
        })
    }

    /// Light the indicator. Later calls do not touch the pin.
    pub fn power_on(&mut self) -> Result<()> {
        if self.line.is_asserted() {
            return Ok(());
        }
        info!("power indicator on");
        self.line.assert()
    }

    /// Whether the indicator is lit.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.line.is_asserted()
    }

    /// Give the pin back.
    pub fn into_inner(self) -> P {
        self.line.into_inner()
    }
}
