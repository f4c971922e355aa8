//! Axis module for stepper-sequence.
//!
//! Provides the step/direction/enable axis driver, polarity-aware lines and
//! the status indicators shared by all axes.

mod builder;
mod driver;
mod indicator;
mod line;
mod state;

pub use builder::AxisDriverBuilder;
pub use driver::{Axis, AxisDriver};
pub use indicator::{MotionIndicator, PowerIndicator};
pub use line::Line;
pub use state::AxisState;
