//! Lock-free elapsed tracking for 32-bit counters
//!
//! Requires the `hardware-atomic` feature.

use core::fmt;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::clock::TickSample;
use crate::timing::TickConfig;
use crate::traits::TickSource;

/// Largest distance accepted as forward progress, half the counter range
const MAX_FORWARD: u32 = u32::MAX / 2;

/// Tracks the last sample of a 32-bit counter through a shared reference
///
/// Several pollers (threads, or a task and an interrupt handler) may share one
/// tracker. Every tick between two accepted samples is reported to exactly one
/// poller, so the reported deltas add up to the total elapsed ticks.
///
/// A poller that is preempted between reading the counter and calling
/// [`poll`](Self::poll) may arrive with a sample older than the stored one.
/// Such a sample reads as "behind" the stored one (a wrapping distance above
/// half the counter range), is ignored and yields zero. Consequently,
/// successive polls must be less than half a wrap period apart, a tighter
/// bound than the single wrap [`ElapsedTracker`](super::ElapsedTracker)
/// tolerates. A poll that arrives later is indistinguishable from a stale one:
/// its ticks are dropped and the baseline stays put. Check a polling schedule
/// with [`TickValidator::check_atomic_poll_interval`], and use
/// [`rebase`](Self::rebase) to resume after a known gap.
///
/// [`TickValidator::check_atomic_poll_interval`]: crate::timing::TickValidator::check_atomic_poll_interval
///
/// # Example
/// ```rust
/// use tickwrap::prelude::*;
///
/// let tracker = AtomicElapsedTracker::<Micros32>::new(TickSample::new(100));
///
/// assert_eq!(tracker.poll(TickSample::new(150)), 50);
/// assert_eq!(tracker.poll(TickSample::new(120)), 0); // stale, ignored
/// assert_eq!(tracker.poll(TickSample::new(175)), 25);
/// ```
pub struct AtomicElapsedTracker<C: TickConfig<Counter = u32>> {
    last: AtomicU32,
    _config: PhantomData<C>,
}

impl<C: TickConfig<Counter = u32>> AtomicElapsedTracker<C> {
    /// Creates a tracker whose baseline is `sample`
    pub const fn new(sample: TickSample<C>) -> Self {
        Self {
            last: AtomicU32::new(sample.raw()),
            _config: PhantomData,
        }
    }

    /// Records `sample` and returns the ticks elapsed since the last
    /// accepted sample
    pub fn poll(&self, sample: TickSample<C>) -> u32 {
        let current = sample.raw();

        match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |previous| {
                let delta = current.wrapping_sub(previous);
                (delta <= MAX_FORWARD).then_some(current)
            }) {
            Ok(previous) => current.wrapping_sub(previous),
            Err(_) => 0,
        }
    }

    /// Samples `source` and polls with the result
    pub fn poll_source<S>(&self, source: &S) -> u32
    where
        S: TickSource<Config = C> + ?Sized,
    {
        self.poll(source.sample())
    }

    /// Replaces the baseline with `sample` without reporting any ticks
    ///
    /// Resumes tracking after the pollers were stopped for longer than half a
    /// wrap period.
    pub fn rebase(&self, sample: TickSample<C>) {
        self.last.store(sample.raw(), Ordering::Release);
    }

    /// Returns the last accepted sample
    pub fn last(&self) -> TickSample<C> {
        TickSample::new(self.last.load(Ordering::Acquire))
    }
}

impl<C: TickConfig<Counter = u32>> fmt::Debug for AtomicElapsedTracker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicElapsedTracker")
            .field("source", &C::NAME)
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish()
    }
}
