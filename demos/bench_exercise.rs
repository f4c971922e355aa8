//! Bench exercise on the host.
//!
//! Builds the default two-axis bench from configuration, swaps in a short
//! plan, and runs one cycle on pins that print every transition.
//!
//! Run with: `cargo run --example bench_exercise`

use std::convert::Infallible;
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use stepper_sequence::{
    AxisDriverBuilder, Result, SequenceController, SequencePlan, SystemConfig,
};

/// Pin that prints its writes with a timestamp.
struct ConsolePin {
    label: String,
    start: Instant,
    quiet: bool,
}

impl ConsolePin {
    fn new(label: &str, start: Instant) -> Self {
        Self {
            label: label.to_string(),
            start,
            quiet: false,
        }
    }

    /// Step lines toggle too often to print.
    fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    fn report(&self, level: &str) {
        if !self.quiet {
            println!(
                "{:>10.3} ms  {:<16} {}",
                self.start.elapsed().as_secs_f64() * 1_000.0,
                self.label,
                level
            );
        }
    }
}

impl ErrorType for ConsolePin {
    type Error = Infallible;
}

impl OutputPin for ConsolePin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.report("LOW");
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.report("HIGH");
        Ok(())
    }
}

/// Blocking delay backed by the OS sleep.
struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

fn main() -> Result<()> {
    let mut config = SystemConfig::default();
    // A short run: 50 steps at 1 ms, 200 ms settle.
    config.sequence.step_count.0 = 50;
    config.sequence.pulse_width.0 = 1_000;
    config.sequence.settle_delay.0 = 200;
    stepper_sequence::validate_config(&config)?;

    let plan = SequencePlan::from_config(&config.sequence)?;
    let start = Instant::now();

    println!("{:#?}", plan);
    println!(
        "expected cycle time: {:.3} s",
        plan.cycle_duration_us(config.axes.len()) as f64 / 1e6
    );

    let mut controller: SequenceController<_, _, _, _> = SequenceController::from_pins(
        plan,
        &config.indicators,
        ConsolePin::new("power led", start),
        ConsolePin::new("motion led", start),
        StdDelay,
    )?;

    for axis in config.axes.iter() {
        let name = axis.name.as_str();
        let driver = AxisDriverBuilder::new()
            .from_axis_config(axis)
            .step_pin(ConsolePin::new(&format!("{name}.step"), start).quiet())
            .dir_pin(ConsolePin::new(&format!("{name}.dir"), start))
            .enable_pin(ConsolePin::new(&format!("{name}.enable"), start))
            .delay(StdDelay)
            .build()?;
        controller.add_axis(driver)?;
    }

    controller.run(1)?;

    println!(
        "cycle finished in {:.3} s",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
