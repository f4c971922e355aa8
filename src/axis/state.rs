//! Axis power state.

/// Observable state of one axis.
///
/// An axis is only ever `Energized` inside a motion; every motion returns it
/// to `Idle` before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisState {
    /// Enable released, no pulsing.
    #[default]
    Idle,
    /// Enable asserted, direction fixed, step line toggling.
    Energized,
}

impl AxisState {
    /// Get the state name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            AxisState::Idle => "Idle",
            AxisState::Energized => "Energized",
        }
    }

    /// Whether the driver is powered.
    #[inline]
    pub fn is_energized(self) -> bool {
        self == AxisState::Energized
    }
}
