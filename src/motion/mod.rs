//! Motion module for stepper-sequence.
//!
//! Provides motion requests, validated timing and step pulse generation.

mod pulse;
mod request;
mod timing;

pub use pulse::{Edge, PulseEdge, PulseTrain};
pub use request::{Direction, MotionRequest};
pub use timing::{PulseWidth, SettleDelay};
