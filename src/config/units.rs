//! Unit types for timing quantities.
//!
//! Keep microsecond pulse widths and millisecond settle delays apart at
//! compile time. Raw configuration values use these newtypes; the validated
//! forms live in [`crate::motion`].

use serde::Deserialize;

/// Duration in microseconds.
///
/// Used for step pulse widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Duration in milliseconds.
///
/// Used for settle delays between motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Milliseconds(pub u32);

impl Milliseconds {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Step count for one motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Steps(pub u32);

impl Steps {
    /// One revolution of a 200-step motor at 1/16 microstepping.
    pub const ONE_REVOLUTION_SIXTEENTH: Self = Self(3200);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}
