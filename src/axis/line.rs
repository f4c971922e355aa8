//! Polarity-aware digital output.

use embedded_hal::digital::OutputPin;

use crate::config::ActiveLevel;
use crate::error::{MotorError, Result};

/// An output pin that is asserted or released rather than set high or low.
///
/// The last written state is cached so callers can inspect it without
/// reading the pin back.
pub struct Line<P>
where
    P: OutputPin,
{
    pin: P,
    active: ActiveLevel,
    asserted: bool,
}

impl<P> Line<P>
where
    P: OutputPin,
{
    /// Wrap a pin and drive it to its released level.
    pub fn new_released(pin: P, active: ActiveLevel) -> Result<Self> {
        let mut line = Self {
            pin,
            active,
            asserted: false,
        };
        line.release()?;
        Ok(line)
    }

    /// Drive the active level.
    pub fn assert(&mut self) -> Result<()> {
        self.write(true)
    }

    /// Drive the inactive level.
    pub fn release(&mut self) -> Result<()> {
        self.write(false)
    }

    /// Assert or release.
    pub fn write(&mut self, asserted: bool) -> Result<()> {
        let high = if asserted {
            self.active.asserted_level()
        } else {
            self.active.released_level()
        };

        if high {
            self.pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.asserted = asserted;
        Ok(())
    }

    /// Whether the line was last asserted.
    #[inline]
    pub fn is_asserted(&self) -> bool {
        self.asserted
    }

    /// Get the polarity.
    #[inline]
    pub fn active_level(&self) -> ActiveLevel {
        self.active
    }

    /// Give the pin back.
    pub fn into_inner(self) -> P {
        self.pin
    }
}
