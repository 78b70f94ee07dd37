#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Wrapping tick counter arithmetic for embedded timers**
//!
//! tickwrap is a `no_std` library for measuring elapsed time with hardware
//! and software tick counters that overflow silently. Timer peripherals are
//! often 16, 24 or 32 bits wide; a free-running 1 MHz 32-bit timer wraps
//! every ~71.6 minutes. The forward distance between two samples is the
//! modular difference `(current - previous) mod 2^W`, which unsigned wrapping
//! subtraction produces directly, without a branch for the overflow case.
//!
//! ## Features
//!
//! - **Branch-free distance** - correct across a single counter wraparound
//! - **Any counter width** - native `u8`..`u64`/`usize` and [`NarrowCounter`] for 1..=64 bits
//! - **Typed samples** - samples of different tick sources cannot be mixed
//! - **Tick rate conversion** - ticks to [`core::time::Duration`] and microseconds
//! - **No Dynamic Allocation** - `no_std`, allocation-free, O(1) everywhere
//!
//! ## Feature Flags
//!
//! - `hardware-atomic` - [`AtomicElapsedTracker`] for polling from interrupts or threads
//! - `hardware` - Enable all hardware optimizations
//! - `serde` - Serde serialization support (no_std compatible)
//!
//! ## Limitation
//!
//! Two samples can only be told apart modulo `2^W`. If the counter wraps more
//! than once between them, the distance aliases to a smaller value. Sample
//! more often than the wrap period; [`TickValidator::check_poll_interval`]
//! checks a polling schedule against a configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use tickwrap::prelude::*;
//!
//! // 32-bit microsecond timer that just wrapped
//! assert_eq!(elapsed(50u32, 100), 4_294_967_246);
//! assert_eq!(elapsed(0u32, u32::MAX), 1);
//!
//! // Define a tick configuration for your timer
//! define_tick_config! {
//!     name: Tim5,
//!     counter: u32,
//!     frequency_hz: 1_000_000,
//! }
//!
//! fn example() -> Result<(), TickError> {
//!     let start = TickSample::<Tim5>::new(u32::MAX - 999);
//!     let end = TickSample::<Tim5>::new(1_000);
//!     assert_eq!(end.duration_since(start)?.as_micros(), 2_000);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! [`NarrowCounter`]: crate::counter::NarrowCounter
//! [`AtomicElapsedTracker`]: crate::tracker::AtomicElapsedTracker
//! [`TickValidator::check_poll_interval`]: crate::timing::TickValidator::check_poll_interval

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::manual_range_contains)]

// Core infrastructure modules
pub mod clock;
pub mod error;
pub mod timing;
pub mod traits;

// Wrapping distance and polling helpers
pub mod counter;
pub mod tracker;

// Configuration presets
pub mod configs;

/// Prelude module of tickwrap
///
/// Convenient re-exports for common tickwrap types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;

    // Re-export tick configuration
    pub use crate::timing::{TickConfig, TickValidator, define_tick_config};

    // Re-export error types
    pub use crate::error::{TickError, TickResult};

    // Re-export sample types
    pub use crate::clock::TickSample;

    // Re-export configuration presets
    pub use crate::configs::*;

    // Re-export the distance functions
    pub use crate::counter::{NarrowCounter, elapsed, elapsed_bits, elapsed_u32};

    // Re-export trackers
    pub use crate::tracker::ElapsedTracker;

    #[cfg(feature = "hardware-atomic")]
    pub use crate::tracker::AtomicElapsedTracker;
}
