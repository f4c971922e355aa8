//! Builder pattern for AxisDriver.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{validate_config, ActiveLevel, AxisConfig, SystemConfig, MAX_AXIS_NAME_LEN};
use crate::error::{ConfigError, Error, MotorError, Result};

use super::driver::AxisDriver;
use super::line::Line;

/// Builder for creating AxisDriver instances.
pub struct AxisDriverBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    enable_pin: Option<EN>,
    delay: Option<DELAY>,
    name: Option<heapless::String<MAX_AXIS_NAME_LEN>>,
    rejected_name_len: Option<usize>,
    enable_active: ActiveLevel,
    invert_direction: bool,
    config: Option<AxisConfig>,
}

impl<STEP, DIR, EN, DELAY> Default for AxisDriverBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, EN, DELAY> AxisDriverBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder (active-low enable, normal direction sense).
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            enable_pin: None,
            delay: None,
            name: None,
            rejected_name_len: None,
            enable_active: ActiveLevel::Low,
            invert_direction: false,
            config: None,
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the ENABLE pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set the delay provider used for pulse timing.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the axis name. A name longer than [`MAX_AXIS_NAME_LEN`] bytes
    /// makes [`build`](Self::build) fail.
    pub fn name(mut self, name: &str) -> Self {
        match heapless::String::try_from(name) {
            Ok(name) => {
                self.name = Some(name);
                self.rejected_name_len = None;
            }
            Err(_) => {
                self.name = None;
                self.rejected_name_len = Some(name.len());
            }
        }
        self
    }

    /// Set the enable line polarity.
    pub fn enable_active(mut self, level: ActiveLevel) -> Self {
        self.enable_active = level;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Configure from an AxisConfig.
    pub fn from_axis_config(mut self, config: &AxisConfig) -> Self {
        self.name = Some(config.name.clone());
        self.rejected_name_len = None;
        self.enable_active = config.enable_active;
        self.invert_direction = config.invert_direction;
        self.config = Some(config.clone());
        self
    }

    /// Configure from SystemConfig by axis name.
    ///
    /// # Errors
    ///
    /// Returns an error if the whole configuration fails [`validate_config`]
    /// (for example two signals sharing a line), or if no axis has that name.
    pub fn from_config(self, config: &SystemConfig, axis_name: &str) -> Result<Self> {
        validate_config(config)?;

        let axis_config = config.axis(axis_name).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(
                heapless::String::try_from(axis_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_axis_config(axis_config))
    }

    /// Build the AxisDriver.
    ///
    /// Drives the step line low and releases enable, so the axis starts
    /// `Idle` and de-energized.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin or the delay is missing, if the name is too
    /// long, if the attached configuration is invalid, or if the initial pin
    /// writes fail.
    pub fn build(self) -> Result<AxisDriver<STEP, DIR, EN, DELAY>> {
        if let Some(config) = &self.config {
            config.validate()?;
        }

        if let Some(len) = self.rejected_name_len {
            return Err(Error::Config(ConfigError::AxisNameTooLong {
                len,
                max: MAX_AXIS_NAME_LEN,
            }));
        }

        let mut step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::MissingComponent("step_pin")))?;

        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingComponent("dir_pin")))?;

        let enable_pin = self
            .enable_pin
            .ok_or(Error::Config(ConfigError::MissingComponent("enable_pin")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingComponent("delay")))?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("axis").unwrap_or_default());

        step_pin.set_low().map_err(|_| MotorError::PinError)?;
        let enable = Line::new_released(enable_pin, self.enable_active)?;

        match &self.config {
            Some(config) => info!(
                "{}: ready (step {}, dir {}, enable {})",
                name.as_str(),
                config.step_line.value(),
                config.direction_line.value(),
                config.enable_line.value()
            ),
            None => info!("{}: ready", name.as_str()),
        }

        Ok(AxisDriver::new(
            step_pin,
            dir_pin,
            enable,
            delay,
            name,
            self.invert_direction,
        ))
    }
}
