//! # stepper-sequence
//!
//! Step/direction/enable pulse sequencing for stepper axes with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Safe power sequencing**: every motion is bracketed by enable assert/release;
//!   direction and step lines only change while the driver is energized
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR/ENABLE, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Deterministic timing**: symmetric 50% duty pulses, every motion takes
//!   exactly `2 * steps * pulse_width`
//! - **Configuration-driven**: Define axes, indicators and timing in TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_sequence::{AxisDriverBuilder, SequenceController, SequencePlan, SystemConfig};
//!
//! let config: SystemConfig = stepper_sequence::load_config("bench.toml")?;
//!
//! let axis = AxisDriverBuilder::new()
//!     .from_config(&config, "axis_1")?
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .enable_pin(enable_pin)
//!     .delay(delay.clone())
//!     .build()?;
//!
//! let plan = SequencePlan::from_config(&config.sequence)?;
//! let mut controller =
//!     SequenceController::from_pins(plan, &config.indicators, power_led, motion_led, delay)?;
//! controller.add_axis(axis)?;
//! controller.run_forever()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` crate

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// This must go first so the logging macros are visible to the other modules.
#[macro_use]
mod fmt;

// Core modules
pub mod axis;
pub mod config;
pub mod error;
pub mod motion;
pub mod sequence;

// Re-exports for ergonomic API
pub use axis::{Axis, AxisDriver, AxisDriverBuilder, AxisState, MotionIndicator, PowerIndicator};
pub use config::{validate_config, ActiveLevel, AxisConfig, IndicatorConfig, LineId, SequenceConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{Direction, MotionRequest, PulseTrain, PulseWidth, SettleDelay};
pub use sequence::{SequenceController, SequencePlan};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microseconds, Milliseconds, Steps};
