//! Elapsed time tracking across polls
//!
//! The distance computation is stateless; callers that poll a free-running
//! counter in a loop still need to remember the previous sample. The trackers
//! in this module own that sample and extend the wrapping counter into a
//! non-wrapping 64-bit tick total.
//!
//! This module provides both standard and atomic implementations:
//! - Standard: Requires `&mut self` for polling, single-threaded
//! - Atomic: Allows `&self` for polling, interrupt and multi-thread safe

use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;

use crate::clock::TickSample;
use crate::error::TickResult;
use crate::timing::TickConfig;
use crate::traits::{TickSource, WrappingCounter};

#[cfg(feature = "hardware-atomic")]
pub mod atomic;

#[cfg(feature = "hardware-atomic")]
pub use atomic::AtomicElapsedTracker;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tracks ticks elapsed between successive polls of one counter
///
/// Each poll must follow the previous one by less than a full wrap period of
/// the counter; the tracker cannot notice a missed wrap.
///
/// # Memory Usage
/// - `Option<C::Counter>` + 8 bytes, e.g. 16 bytes for a `u32` counter
///
/// # Example
/// ```rust
/// use tickwrap::prelude::*;
///
/// let mut tracker = ElapsedTracker::<Micros32>::new();
///
/// assert_eq!(tracker.poll(TickSample::new(u32::MAX - 9)), 0); // baseline
/// assert_eq!(tracker.poll(TickSample::new(5)), 15);
/// assert_eq!(tracker.poll(TickSample::new(30)), 25);
/// assert_eq!(tracker.total_ticks(), 40);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "C::Counter: Serialize",
        deserialize = "C::Counter: Deserialize<'de>"
    ))
)]
pub struct ElapsedTracker<C: TickConfig> {
    /// Counter value seen by the most recent poll
    last: Option<C::Counter>,

    /// Ticks accumulated since the baseline, saturating
    total: u64,

    #[cfg_attr(feature = "serde", serde(skip))]
    _config: PhantomData<C>,
}

impl<C: TickConfig> ElapsedTracker<C> {
    /// Creates a tracker without a baseline; the first poll sets it
    pub const fn new() -> Self {
        Self {
            last: None,
            total: 0,
            _config: PhantomData,
        }
    }

    /// Creates a tracker whose baseline is `sample`
    pub const fn with_baseline(sample: TickSample<C>) -> Self {
        Self {
            last: Some(sample.raw()),
            total: 0,
            _config: PhantomData,
        }
    }

    /// Records `sample` and returns the ticks elapsed since the previous poll
    ///
    /// Returns zero when no baseline exists yet.
    pub fn poll(&mut self, sample: TickSample<C>) -> C::Counter {
        let current = sample.raw();
        let delta = match self.last {
            Some(previous) => current.wrapping_elapsed(previous),
            None => C::Counter::ZERO,
        };

        self.last = Some(current);
        self.total = self.total.saturating_add(delta.to_u64());

        delta
    }

    /// Samples `source` and polls with the result
    pub fn poll_source<S>(&mut self, source: &S) -> C::Counter
    where
        S: TickSource<Config = C> + ?Sized,
    {
        self.poll(source.sample())
    }

    /// Returns the most recent sample, if any
    pub fn last(&self) -> Option<TickSample<C>> {
        self.last.map(TickSample::new)
    }

    /// Ticks accumulated since the baseline
    pub fn total_ticks(&self) -> u64 {
        self.total
    }

    /// Time accumulated since the baseline
    pub fn total_duration(&self) -> TickResult<Duration> {
        C::ticks_to_duration(self.total)
    }

    /// Forgets the baseline and clears the running total
    pub fn reset(&mut self) {
        self.last = None;
        self.total = 0;
    }
}

impl<C: TickConfig> Default for ElapsedTracker<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TickConfig> Clone for ElapsedTracker<C> {
    fn clone(&self) -> Self {
        Self {
            last: self.last,
            total: self.total,
            _config: PhantomData,
        }
    }
}

impl<C: TickConfig> fmt::Debug for ElapsedTracker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElapsedTracker")
            .field("source", &C::NAME)
            .field("last", &self.last)
            .field("total", &self.total)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::{Rtc24, Timer16Micros};
    use crate::counter::NarrowCounter;
    use core::cell::Cell;

    struct StepTimer {
        value: Cell<u16>,
        step: u16,
    }

    impl TickSource for StepTimer {
        type Config = Timer16Micros;

        fn sample(&self) -> TickSample<Timer16Micros> {
            let now = self.value.get();
            self.value.set(now.wrapping_add(self.step));
            TickSample::new(now)
        }
    }

    #[test]
    fn test_first_poll_sets_baseline() {
        let mut tracker = ElapsedTracker::<Timer16Micros>::new();
        assert!(tracker.last().is_none());

        assert_eq!(tracker.poll(TickSample::new(1234)), 0);
        assert_eq!(tracker.last(), Some(TickSample::new(1234)));
        assert_eq!(tracker.total_ticks(), 0);
    }

    #[test]
    fn test_with_baseline() {
        let mut tracker = ElapsedTracker::<Timer16Micros>::with_baseline(TickSample::new(65_000));
        assert_eq!(tracker.poll(TickSample::new(464)), 1000);
        assert_eq!(tracker.total_duration(), Ok(Duration::from_millis(1)));
    }

    #[test]
    fn test_total_extends_past_counter_width() {
        let timer = StepTimer {
            value: Cell::new(0),
            step: 40_000,
        };
        let mut tracker = ElapsedTracker::<Timer16Micros>::new();

        tracker.poll_source(&timer);
        for _ in 0..10 {
            assert_eq!(tracker.poll_source(&timer), 40_000);
        }

        // 400 ms worth of ticks from a counter that wraps every 65.536 ms.
        assert_eq!(tracker.total_ticks(), 400_000);
        assert_eq!(tracker.total_duration(), Ok(Duration::from_millis(400)));
    }

    #[test]
    fn test_narrow_counter_tracking() {
        let mut tracker = ElapsedTracker::<Rtc24>::new();
        tracker.poll(TickSample::new(NarrowCounter::truncate(0x00FF_0000)));
        let delta = tracker.poll(TickSample::new(NarrowCounter::truncate(0x0001_0000)));

        assert_eq!(delta.get(), 0x0002_0000);
        assert_eq!(tracker.total_duration(), Ok(Duration::from_secs(4)));
    }

    #[test]
    fn test_reset() {
        let mut tracker = ElapsedTracker::<Timer16Micros>::new();
        tracker.poll(TickSample::new(10));
        tracker.poll(TickSample::new(20));
        tracker.reset();

        assert!(tracker.last().is_none());
        assert_eq!(tracker.total_ticks(), 0);
        assert_eq!(tracker.poll(TickSample::new(500)), 0);
    }
}
