//! Error types for stepper-sequence.
//!
//! Configuration problems are caught when axes and plans are constructed;
//! the only error a running motion can report is a failed pin write.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-sequence operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor signal error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// The same line is assigned to more than one signal
    DuplicateLine {
        /// Line identifier
        line: u8,
        /// First signal using the line
        first: heapless::String<48>,
        /// Second signal using the line
        second: heapless::String<48>,
    },
    /// Duplicate axis name in configuration
    DuplicateAxisName(heapless::String<32>),
    /// Axis name is empty
    EmptyAxisName,
    /// Axis name does not fit the fixed-capacity name buffer
    AxisNameTooLong {
        /// Length of the rejected name in bytes
        len: usize,
        /// Maximum accepted length in bytes
        max: usize,
    },
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// No axes configured
    NoAxes,
    /// More axes than the controller can hold
    TooManyAxes {
        /// Maximum number of axes
        max: usize,
    },
    /// Pulse width must be > 0 microseconds
    InvalidPulseWidth(u32),
    /// Settle delay must be > 0 milliseconds
    InvalidSettleDelay(u32),
    /// A required pin or delay was not supplied to a builder
    MissingComponent(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor signal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Pin operation failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::DuplicateLine { line, first, second } => {
                write!(f, "Line {} assigned to both '{}' and '{}'", line, first, second)
            }
            ConfigError::DuplicateAxisName(name) => write!(f, "Duplicate axis name: '{}'", name),
            ConfigError::EmptyAxisName => write!(f, "Axis name must not be empty"),
            ConfigError::AxisNameTooLong { len, max } => {
                write!(f, "Axis name is {} bytes long (max {})", len, max)
            }
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::NoAxes => write!(f, "At least one axis must be configured"),
            ConfigError::TooManyAxes { max } => write!(f, "Too many axes (max {})", max),
            ConfigError::InvalidPulseWidth(v) => {
                write!(f, "Invalid pulse width: {} us. Must be > 0", v)
            }
            ConfigError::InvalidSettleDelay(v) => {
                write!(f, "Invalid settle delay: {} ms. Must be > 0", v)
            }
            ConfigError::MissingComponent(what) => write!(f, "{} is required", what),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
