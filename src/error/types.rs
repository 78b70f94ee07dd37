//! Core error types for tickwrap

use core::fmt;

/// Main error type for tick counter operations
///
/// Every variant is `Copy` so errors can be produced and inspected from
/// interrupt context without allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickError {
    // Configuration errors
    /// Tick frequency of zero makes time conversion undefined
    ZeroFrequency,
    /// Counter width outside `1..=64` bits
    InvalidCounterWidth {
        /// Requested width in bits
        bits: u32,
    },
    /// Polling interval does not fit inside one counter wrap period
    PollIntervalTooLong,

    // Sample errors
    /// Raw sample does not fit into the counter width
    SampleOutOfRange {
        /// Offending raw value
        value: u64,
        /// Counter width in bits
        bits: u32,
    },

    // Conversion errors
    /// Converted time does not fit into the target representation
    DurationOverflow,
}

impl TickError {
    /// Returns true if the error stems from an invalid tick configuration
    pub const fn is_configuration_error(&self) -> bool {
        match self {
            Self::ZeroFrequency | Self::InvalidCounterWidth { .. } | Self::PollIntervalTooLong => {
                true
            }
            Self::SampleOutOfRange { .. } | Self::DurationOverflow => false,
        }
    }

    /// Returns true if retrying with different input can succeed
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::SampleOutOfRange { .. } | Self::DurationOverflow => true,
            Self::ZeroFrequency | Self::InvalidCounterWidth { .. } | Self::PollIntervalTooLong => {
                false
            }
        }
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::ZeroFrequency | Self::InvalidCounterWidth { .. } | Self::PollIntervalTooLong => {
                "Configuration"
            }
            Self::SampleOutOfRange { .. } => "Sample",
            Self::DurationOverflow => "Conversion",
        }
    }
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrequency => f.write_str("tick frequency must be non-zero"),
            Self::InvalidCounterWidth { bits } => {
                write!(f, "counter width of {bits} bits is outside 1..=64")
            }
            Self::PollIntervalTooLong => {
                f.write_str("poll interval is not shorter than the counter wrap period")
            }
            Self::SampleOutOfRange { value, bits } => {
                write!(f, "sample {value} does not fit into a {bits}-bit counter")
            }
            Self::DurationOverflow => f.write_str("converted duration overflows"),
        }
    }
}

impl core::error::Error for TickError {}

/// Result type for tick counter operations
pub type TickResult<T> = Result<T, TickError>;
