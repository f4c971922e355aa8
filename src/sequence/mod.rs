//! Sequence module for stepper-sequence.
//!
//! Provides the validated sequence plan and the controller that exercises
//! each axis in turn.

mod controller;
mod plan;

pub use controller::SequenceController;
pub use plan::SequencePlan;
