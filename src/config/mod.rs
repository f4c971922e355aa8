//! Configuration module for stepper-sequence.
//!
//! Provides types for loading and validating axis, indicator and sequence
//! configuration from TOML files (with `std` feature) or pre-built values.

mod axis;
mod indicator;
mod sequence;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::{ActiveLevel, AxisConfig, LineId, MAX_AXIS_NAME_LEN};
pub use indicator::IndicatorConfig;
pub use sequence::SequenceConfig;
pub use system::{SystemConfig, MAX_AXES};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microseconds, Milliseconds, Steps};
