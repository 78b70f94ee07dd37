//! Wrapping counter distance
//!
//! Hardware and software tick counters are often only 16, 24 or 32 bits wide
//! and overflow silently. The forward distance between an earlier and a later
//! sample is the modular difference `(current - previous) mod 2^W`, which
//! unsigned wrapping subtraction yields directly, with no branch for the
//! overflow case.
//!
//! The result is only meaningful while the counter wraps at most once between
//! the two samples. A counter that wrapped twice or more produces an aliased,
//! smaller distance. Callers uphold this by sampling more often than the wrap
//! period; see [`TickValidator::check_poll_interval`].
//!
//! [`TickValidator::check_poll_interval`]: crate::timing::TickValidator::check_poll_interval

pub mod narrow;

pub use narrow::NarrowCounter;

use crate::error::{TickError, TickResult};
use crate::traits::WrappingCounter;
use narrow::width_mask;

/// Ticks elapsed from `previous` to `current` on a wrapping counter
///
/// Total over all inputs: never fails and never panics, in debug builds too.
///
/// # Example
/// ```rust
/// use tickwrap::counter::elapsed;
///
/// assert_eq!(elapsed(100u32, 50), 50);
/// assert_eq!(elapsed(50u32, 100), 4_294_967_246);
/// assert_eq!(elapsed(0u32, u32::MAX), 1);
/// ```
#[inline]
pub fn elapsed<T: WrappingCounter>(current: T, previous: T) -> T {
    current.wrapping_elapsed(previous)
}

/// Ticks elapsed between two samples of a 32-bit counter
///
/// `const` form of [`elapsed`] for the common 32-bit timer, e.g. a free-running
/// 1 MHz microsecond timer.
#[inline]
pub const fn elapsed_u32(current: u32, previous: u32) -> u32 {
    current.wrapping_sub(previous)
}

/// Ticks elapsed on a counter whose width is only known at runtime
///
/// Both samples must fit into `bits`; unlike [`elapsed`] this validates its
/// inputs since the width is not carried by the type.
///
/// # Errors
/// - [`TickError::InvalidCounterWidth`] if `bits` is not in `1..=64`
/// - [`TickError::SampleOutOfRange`] if either sample is `>= 2^bits`
///
/// # Example
/// ```rust
/// use tickwrap::counter::elapsed_bits;
///
/// assert_eq!(elapsed_bits(3, 0xFFF, 12)?, 4);
/// assert!(elapsed_bits(0x1000, 0, 12).is_err());
/// # Ok::<(), tickwrap::error::TickError>(())
/// ```
pub fn elapsed_bits(current: u64, previous: u64, bits: u32) -> TickResult<u64> {
    if !(1..=64).contains(&bits) {
        return Err(TickError::InvalidCounterWidth { bits });
    }

    let mask = width_mask(bits);
    for value in [current, previous] {
        if value > mask {
            return Err(TickError::SampleOutOfRange { value, bits });
        }
    }

    Ok(current.wrapping_sub(previous) & mask)
}
