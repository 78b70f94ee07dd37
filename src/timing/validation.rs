//! Tick configuration validation utilities
//!
//! This module provides runtime checks that a tick configuration is usable
//! and that a polling schedule keeps samples within one wrap period.

use core::time::Duration;

use crate::error::{TickError, TickResult};
use crate::timing::TickConfig;
use crate::traits::WrappingCounter;

/// Tick configuration validator for runtime verification
pub struct TickValidator;

impl TickValidator {
    /// Validates a tick configuration at runtime
    pub fn validate<C: TickConfig>() -> TickResult<()> {
        C::validate()
    }

    /// Checks that the tick frequency is non-zero
    pub fn check_frequency<C: TickConfig>() -> TickResult<()> {
        if C::FREQUENCY_HZ == 0 {
            return Err(TickError::ZeroFrequency);
        }

        Ok(())
    }

    /// Checks that the counter width lies in `1..=64` bits
    pub fn check_counter_width<C: TickConfig>() -> TickResult<()> {
        let bits = <C::Counter as WrappingCounter>::BITS;

        if !(1..=64).contains(&bits) {
            return Err(TickError::InvalidCounterWidth { bits });
        }

        Ok(())
    }

    /// Checks that samples taken `interval` apart see at most one wrap
    ///
    /// The interval must be strictly shorter than the wrap period. A wrap
    /// period too long to express as a `Duration` accepts any interval.
    ///
    /// # Example
    /// ```rust
    /// use core::time::Duration;
    /// use tickwrap::configs::Timer16Micros;
    /// use tickwrap::timing::TickValidator;
    ///
    /// // A 16-bit 1 MHz timer wraps every 65.536 ms.
    /// assert!(TickValidator::check_poll_interval::<Timer16Micros>(Duration::from_millis(10)).is_ok());
    /// assert!(TickValidator::check_poll_interval::<Timer16Micros>(Duration::from_millis(100)).is_err());
    /// ```
    pub fn check_poll_interval<C: TickConfig>(interval: Duration) -> TickResult<()> {
        match C::wrap_period() {
            Ok(period) if interval >= period => Err(TickError::PollIntervalTooLong),
            Ok(_) | Err(TickError::DurationOverflow) => Ok(()),
            Err(error) => Err(error),
        }
    }

    /// Checks that samples shared through an atomic tracker stay fresh
    ///
    /// [`AtomicElapsedTracker`](crate::tracker::AtomicElapsedTracker) treats a
    /// sample more than half the counter range ahead as stale, so its pollers
    /// must run strictly more often than every half wrap period.
    ///
    /// # Example
    /// ```rust
    /// use core::time::Duration;
    /// use tickwrap::configs::Micros32;
    /// use tickwrap::timing::TickValidator;
    ///
    /// // Half of the ~71.6 minute wrap period is ~35.8 minutes.
    /// let interval = Duration::from_secs(3000);
    /// assert!(TickValidator::check_poll_interval::<Micros32>(interval).is_ok());
    /// assert!(TickValidator::check_atomic_poll_interval::<Micros32>(interval).is_err());
    /// ```
    #[cfg(feature = "hardware-atomic")]
    pub fn check_atomic_poll_interval<C>(interval: Duration) -> TickResult<()>
    where
        C: TickConfig<Counter = u32>,
    {
        let half_period = C::wrap_period()? / 2;
        if interval >= half_period {
            return Err(TickError::PollIntervalTooLong);
        }

        Ok(())
    }

    /// Comprehensive validation of all configuration aspects
    pub fn validate_all<C: TickConfig>() -> TickResult<()> {
        Self::check_frequency::<C>()?;

        Self::check_counter_width::<C>()?;

        Self::validate::<C>()?;

        Ok(())
    }
}
