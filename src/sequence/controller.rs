//! Sequence controller: exercises every axis in turn.
//!
//! Axes run strictly one after another. The controller owns the motion
//! indicator and lends it to the active axis, so only one motion can hold it.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::Vec;

use crate::axis::{Axis, MotionIndicator, PowerIndicator};
use crate::config::{IndicatorConfig, MAX_AXES};
use crate::error::{ConfigError, Error, Result};

use super::plan::SequencePlan;

/// Drives a fixed set of axes through the clockwise / settle /
/// counter-clockwise / settle pattern.
///
/// Generic over:
/// - `A`: axis type (must implement [`Axis`])
/// - `PWR`: power indicator pin
/// - `LED`: motion indicator pin
/// - `DELAY`: delay provider for settle pauses
/// - `N`: axis capacity
///
/// # Example
///
/// ```rust,ignore
/// use stepper_sequence::{SequenceController, SequencePlan, SystemConfig};
///
/// let config = SystemConfig::default();
/// let plan = SequencePlan::from_config(&config.sequence)?;
/// let mut controller =
///     SequenceController::from_pins(plan, &config.indicators, red_led, green_led, delay)?;
/// controller.add_axis(axis_1)?;
/// controller.add_axis(axis_2)?;
/// controller.run_forever()?;
/// ```
pub struct SequenceController<A, PWR, LED, DELAY, const N: usize = MAX_AXES>
where
    A: Axis<LED>,
    PWR: OutputPin,
    LED: OutputPin,
    DELAY: DelayNs,
{
    /// Axes in exercise order.
    axes: Vec<A, N>,
    /// Power-present indicator.
    power: PowerIndicator<PWR>,
    /// Motion-active indicator, lent to one axis per motion.
    motion: MotionIndicator<LED>,
    /// Delay provider for settle pauses.
    delay: DELAY,
    /// Timing shared by every motion.
    plan: SequencePlan,
    /// Full passes over all axes.
    cycles_completed: u32,
}

impl<A, PWR, LED, DELAY, const N: usize> SequenceController<A, PWR, LED, DELAY, N>
where
    A: Axis<LED>,
    PWR: OutputPin,
    LED: OutputPin,
    DELAY: DelayNs,
{
    /// Create a controller with no axes.
    pub fn new(
        plan: SequencePlan,
        power: PowerIndicator<PWR>,
        motion: MotionIndicator<LED>,
        delay: DELAY,
    ) -> Self {
        Self {
            axes: Vec::new(),
            power,
            motion,
            delay,
            plan,
            cycles_completed: 0,
        }
    }

    /// Create a controller, wrapping the indicator pins with the configured
    /// polarity. Both indicators start off.
    pub fn from_pins(
        plan: SequencePlan,
        indicators: &IndicatorConfig,
        power_pin: PWR,
        motion_pin: LED,
        delay: DELAY,
    ) -> Result<Self> {
        let power = PowerIndicator::new(power_pin, indicators.active)?;
        let motion = MotionIndicator::new(motion_pin, indicators.active)?;
        Ok(Self::new(plan, power, motion, delay))
    }

    /// Append an axis. Axes are exercised in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TooManyAxes` when the controller is full.
    pub fn add_axis(&mut self, axis: A) -> Result<()> {
        self.axes
            .push(axis)
            .map_err(|_| Error::Config(ConfigError::TooManyAxes { max: N }))
    }

    /// Get the axes in exercise order.
    pub fn axes(&self) -> &[A] {
        &self.axes
    }

    /// Get the number of axes.
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Get the sequence plan.
    pub fn plan(&self) -> &SequencePlan {
        &self.plan
    }

    /// Number of completed passes over all axes.
    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    /// Get the power indicator.
    pub fn power_indicator(&self) -> &PowerIndicator<PWR> {
        &self.power
    }

    /// Get the motion indicator.
    pub fn motion_indicator(&self) -> &MotionIndicator<LED> {
        &self.motion
    }

    /// Duration of one full cycle over the configured axes, in microseconds.
    pub fn cycle_duration_us(&self) -> u64 {
        self.plan.cycle_duration_us(self.axes.len())
    }

    /// Light the power indicator (idempotent).
    pub fn power_on(&mut self) -> Result<()> {
        self.power.power_on()
    }

    /// Run one pass: for each axis in order, move clockwise, settle, move
    /// counter-clockwise, settle.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoAxes` if no axis was added, or the first pin
    /// error reported by an axis.
    pub fn run_cycle(&mut self) -> Result<()> {
        if self.axes.is_empty() {
            return Err(Error::Config(ConfigError::NoAxes));
        }

        self.power.power_on()?;

        let requests = self.plan.requests();
        let settle_ms = self.plan.settle_delay.as_millis();

        for axis in self.axes.iter_mut() {
            for request in requests.iter() {
                axis.move_steps(request, &mut self.motion)?;

                trace!("{}: settling {} ms", axis.name(), settle_ms);
                self.delay.delay_ms(settle_ms);
            }
        }

        self.cycles_completed = self.cycles_completed.wrapping_add(1);
        debug!("cycle {} complete", self.cycles_completed);

        Ok(())
    }

    /// Run `cycles` passes.
    pub fn run(&mut self, cycles: u32) -> Result<()> {
        for _ in 0..cycles {
            self.run_cycle()?;
        }
        Ok(())
    }

    /// Run passes until an error occurs.
    ///
    /// Never returns `Ok`; on hardware where pin writes cannot fail it never
    /// returns at all.
    pub fn run_forever(&mut self) -> Result<Infallible> {
        info!(
            "exercising {} axes: {} steps at {} us, settle {} ms",
            self.axes.len(),
            self.plan.step_count,
            self.plan.pulse_width.as_micros(),
            self.plan.settle_delay.as_millis()
        );

        loop {
            self.run_cycle()?;
        }
    }

    /// Take the controller apart.
    pub fn into_parts(self) -> (Vec<A, N>, PowerIndicator<PWR>, MotionIndicator<LED>, DELAY) {
        (self.axes, self.power, self.motion, self.delay)
    }
}
