//! Tick source trait definition
//!
//! This module defines the seam to the timer or clock that produces samples.
//! The crate never reads hardware itself; a HAL timer, an RTOS tick or a test
//! double implements [`TickSource`].

use crate::clock::TickSample;
use crate::timing::TickConfig;

/// Something that can be sampled for the current counter value
///
/// # Example
/// ```rust
/// use core::cell::Cell;
/// use tickwrap::prelude::*;
///
/// struct FakeTimer(Cell<u32>);
///
/// impl TickSource for FakeTimer {
///     type Config = Micros32;
///
///     fn sample(&self) -> TickSample<Micros32> {
///         TickSample::new(self.0.get())
///     }
/// }
///
/// let timer = FakeTimer(Cell::new(10));
/// let start = timer.sample();
/// timer.0.set(25);
/// assert_eq!(timer.sample().elapsed_since(start), 15);
/// ```
pub trait TickSource {
    /// Configuration of the counter this source reads
    type Config: TickConfig;

    /// Reads the counter once
    fn sample(&self) -> TickSample<Self::Config>;
}

impl<S: TickSource + ?Sized> TickSource for &S {
    type Config = S::Config;

    #[inline]
    fn sample(&self) -> TickSample<Self::Config> {
        (**self).sample()
    }
}
