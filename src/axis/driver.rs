//! Stepper axis driver.
//!
//! Generic over embedded-hal 1.0 pin types. Every motion is bracketed by
//! enable assert and release, so the driver chip is only powered while
//! pulses are being produced.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};
use crate::motion::{Direction, Edge, MotionRequest};

use super::indicator::MotionIndicator;
use super::line::Line;
use super::state::AxisState;

/// Something that can perform one bounded motion while driving the shared
/// motion indicator.
///
/// Implemented by [`AxisDriver`]; implement it on an enum to put axes with
/// different pin types into one controller.
pub trait Axis<LED>
where
    LED: OutputPin,
{
    /// Axis name for logging.
    fn name(&self) -> &str;

    /// Perform one motion. See [`AxisDriver::move_steps`].
    fn move_steps(
        &mut self,
        request: &MotionRequest,
        indicator: &mut MotionIndicator<LED>,
    ) -> Result<()>;
}

impl<LED, T> Axis<LED> for &mut T
where
    LED: OutputPin,
    T: Axis<LED> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn move_steps(
        &mut self,
        request: &MotionRequest,
        indicator: &mut MotionIndicator<LED>,
    ) -> Result<()> {
        (**self).move_steps(request, indicator)
    }
}

/// One stepper axis driven through step, direction and enable lines.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `EN`: ENABLE pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider for pulse timing (must implement `DelayNs`)
pub struct AxisDriver<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (rising edge advances one step).
    step_pin: STEP,

    /// DIR pin (high = CW, low = CCW, or inverted).
    dir_pin: DIR,

    /// ENABLE line with its polarity.
    enable: Line<EN>,

    /// Delay provider for pulse timing.
    delay: DELAY,

    /// Axis name for logging/debugging.
    name: heapless::String<32>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Power state as of the last successful enable write.
    state: AxisState,

    /// Direction written during the last motion.
    last_direction: Option<Direction>,

    /// Motions run to completion.
    moves_completed: u32,
}

impl<STEP, DIR, EN, DELAY> AxisDriver<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new driver. The enable line must already be released.
    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        enable: Line<EN>,
        delay: DELAY,
        name: heapless::String<32>,
        invert_direction: bool,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable,
            delay,
            name,
            invert_direction,
            state: AxisState::Idle,
            last_direction: None,
            moves_completed: 0,
        }
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current power state.
    #[inline]
    pub fn state(&self) -> AxisState {
        self.state
    }

    /// Direction written during the most recent motion, if any.
    #[inline]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Number of motions that ran to completion.
    #[inline]
    pub fn moves_completed(&self) -> u32 {
        self.moves_completed
    }

    /// Perform one complete motion (blocking).
    ///
    /// Order of operations, on every call:
    /// 1. assert enable
    /// 2. assert the motion indicator
    /// 3. write the direction line
    /// 4. `step_count` times: step high, hold `pulse_width`, step low, hold `pulse_width`
    /// 5. release enable
    /// 6. clear the motion indicator
    ///
    /// A zero `step_count` still performs steps 1-3, 5 and 6.
    ///
    /// # Errors
    ///
    /// Only a failing pin write can make this return an error. In that case
    /// the driver tries to release enable, and clears the indicator only if
    /// the release succeeded.
    pub fn move_steps<LED>(
        &mut self,
        request: &MotionRequest,
        indicator: &mut MotionIndicator<LED>,
    ) -> Result<()>
    where
        LED: OutputPin,
    {
        if request.is_zero() {
            trace!("{}: zero-step move, bracket only", self.name.as_str());
        } else {
            debug!(
                "{}: moving {} steps {} at {} us",
                self.name.as_str(),
                request.step_count,
                request.direction.as_str(),
                request.pulse_width.as_micros()
            );
        }

        match self.run_motion(request, indicator) {
            Ok(()) => {
                self.moves_completed = self.moves_completed.wrapping_add(1);
                debug!("{}: move complete", self.name.as_str());
                Ok(())
            }
            Err(e) => {
                error!("{}: pin write failed during move", self.name.as_str());
                self.abort(indicator);
                Err(e)
            }
        }
    }

    fn run_motion<LED>(
        &mut self,
        request: &MotionRequest,
        indicator: &mut MotionIndicator<LED>,
    ) -> Result<()>
    where
        LED: OutputPin,
    {
        self.enable.assert()?;
        self.state = AxisState::Energized;

        indicator.assert()?;

        self.set_direction(request.direction)?;

        for pulse in request.pulse_train() {
            let written = match pulse.edge {
                Edge::Rising => self.step_pin.set_high(),
                Edge::Falling => self.step_pin.set_low(),
            };
            written.map_err(|_| MotorError::PinError)?;

            self.delay.delay_us(pulse.hold_us);
        }

        self.enable.release()?;
        self.state = AxisState::Idle;

        indicator.clear()?;

        Ok(())
    }

    /// Best-effort return to a safe state after a failed pin write.
    fn abort<LED>(&mut self, indicator: &mut MotionIndicator<LED>)
    where
        LED: OutputPin,
    {
        let _ = self.step_pin.set_low();

        if self.enable.release().is_ok() {
            self.state = AxisState::Idle;
            let _ = indicator.clear();
        } else {
            warn!("{}: enable release failed, axis may be energized", self.name.as_str());
        }
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if direction.pin_level(self.invert_direction) {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.last_direction = Some(direction);
        Ok(())
    }

    /// Take the driver apart, returning the pins and delay provider.
    pub fn into_parts(self) -> (STEP, DIR, EN, DELAY) {
        (
            self.step_pin,
            self.dir_pin,
            self.enable.into_inner(),
            self.delay,
        )
    }
}

impl<STEP, DIR, EN, DELAY, LED> Axis<LED> for AxisDriver<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
    LED: OutputPin,
{
    fn name(&self) -> &str {
        AxisDriver::name(self)
    }

    fn move_steps(
        &mut self,
        request: &MotionRequest,
        indicator: &mut MotionIndicator<LED>,
    ) -> Result<()> {
        AxisDriver::move_steps(self, request, indicator)
    }
}
