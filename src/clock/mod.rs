//! Tick sample module
//!
//! This module provides the TickSample type: one reading of a configured
//! counter. Samples carry their configuration as a type parameter, so
//! readings from different tick sources cannot be subtracted from each other.

use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;

use crate::error::TickResult;
use crate::timing::TickConfig;
use crate::traits::WrappingCounter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One reading of a wrapping tick counter described by `C`
///
/// # Example
/// ```rust
/// use core::time::Duration;
/// use tickwrap::prelude::*;
///
/// let start = TickSample::<Micros32>::new(u32::MAX - 499);
/// let end = TickSample::<Micros32>::new(500);
///
/// assert_eq!(end.elapsed_since(start), 1000);
/// assert_eq!(end.duration_since(start)?, Duration::from_millis(1));
/// # Ok::<(), TickError>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "C::Counter: Serialize",
        deserialize = "C::Counter: Deserialize<'de>"
    ))
)]
pub struct TickSample<C: TickConfig> {
    counter: C::Counter,
    #[cfg_attr(feature = "serde", serde(skip))]
    _config: PhantomData<C>,
}

impl<C: TickConfig> TickSample<C> {
    /// Creates a sample from a raw counter reading
    pub const fn new(counter: C::Counter) -> Self {
        Self {
            counter,
            _config: PhantomData,
        }
    }

    /// Returns the raw counter reading
    pub const fn raw(&self) -> C::Counter {
        self.counter
    }

    /// Ticks elapsed since the `earlier` sample
    ///
    /// Assumes the counter wrapped at most once in between.
    #[inline]
    pub fn elapsed_since(&self, earlier: Self) -> C::Counter {
        self.counter.wrapping_elapsed(earlier.counter)
    }

    /// Time elapsed since the `earlier` sample
    pub fn duration_since(&self, earlier: Self) -> TickResult<Duration> {
        C::ticks_to_duration(self.elapsed_since(earlier).to_u64())
    }

    /// Sample the counter would show `ticks` after this one
    pub fn advance(&self, ticks: C::Counter) -> Self {
        Self::new(self.counter.wrapping_advance(ticks))
    }
}

// Manual impls: the derives would bound `C` instead of `C::Counter`.
impl<C: TickConfig> Clone for TickSample<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TickConfig> Copy for TickSample<C> {}

impl<C: TickConfig> PartialEq for TickSample<C> {
    fn eq(&self, other: &Self) -> bool {
        self.counter == other.counter
    }
}

impl<C: TickConfig> Eq for TickSample<C> {}

impl<C: TickConfig> fmt::Debug for TickSample<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickSample")
            .field("source", &C::NAME)
            .field("counter", &self.counter)
            .finish()
    }
}
