//! Tick configuration trait
//!
//! This module defines the TickConfig trait that binds a counter type to the
//! frequency it increments at.

use core::fmt::Debug;
use core::time::Duration;

use crate::error::{TickError, TickResult};
use crate::traits::WrappingCounter;

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const MICROS_PER_SECOND: u128 = 1_000_000;

/// Compile-time description of a tick source
///
/// Implement it by hand or with [`define_tick_config!`](crate::define_tick_config).
pub trait TickConfig: Clone + Copy + Debug {
    /// Counter type the source produces
    type Counter: WrappingCounter;

    /// Number of ticks per second
    const FREQUENCY_HZ: u32;

    /// Human readable name of the tick source
    const NAME: &'static str;

    /// Validates that the configuration is usable for time conversion
    fn validate() -> TickResult<()> {
        if Self::FREQUENCY_HZ == 0 {
            return Err(TickError::ZeroFrequency);
        }

        let bits = <Self::Counter as WrappingCounter>::BITS;
        if !(1..=64).contains(&bits) {
            return Err(TickError::InvalidCounterWidth { bits });
        }

        Ok(())
    }

    /// Number of ticks in one full counter period, `2^BITS`
    ///
    /// Fails for configurations rejected by [`validate`](Self::validate).
    fn period_ticks() -> TickResult<u128> {
        Self::validate()?;
        Ok(1u128 << <Self::Counter as WrappingCounter>::BITS)
    }

    /// Converts a tick count into a duration, rounding down to the nanosecond
    fn ticks_to_duration(ticks: u64) -> TickResult<Duration> {
        let freq = u64::from(Self::FREQUENCY_HZ);
        if freq == 0 {
            return Err(TickError::ZeroFrequency);
        }

        let secs = ticks / freq;
        // rem < 2^32, so rem * 10^9 stays below 2^62
        let rem = ticks % freq;
        let nanos = (rem * NANOS_PER_SECOND) / freq;

        Ok(Duration::new(secs, nanos as u32))
    }

    /// Converts a tick count into whole microseconds, rounding down
    fn ticks_to_micros(ticks: u64) -> TickResult<u64> {
        let freq = u128::from(Self::FREQUENCY_HZ);
        if freq == 0 {
            return Err(TickError::ZeroFrequency);
        }

        let micros = u128::from(ticks) * MICROS_PER_SECOND / freq;
        u64::try_from(micros).map_err(|_| TickError::DurationOverflow)
    }

    /// Time the counter takes to wrap around once
    fn wrap_period() -> TickResult<Duration> {
        let period = Self::period_ticks()?;
        let freq = u128::from(Self::FREQUENCY_HZ);

        let secs = u64::try_from(period / freq).map_err(|_| TickError::DurationOverflow)?;
        let rem = (period % freq) as u64;
        let nanos = (rem * NANOS_PER_SECOND) / freq as u64;

        Ok(Duration::new(secs, nanos as u32))
    }
}
