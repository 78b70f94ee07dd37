//! Wrapping counter trait definition
//!
//! This module defines the width abstraction shared by every counter type the
//! crate can measure: the native unsigned integers and
//! [`NarrowCounter`](crate::counter::NarrowCounter).

use core::fmt::Debug;

/// A fixed-width unsigned counter that wraps modulo `2^BITS`
///
/// Implementors describe a hardware or software tick counter that increments
/// monotonically and silently overflows back to zero.
///
/// # Example
/// ```rust
/// use tickwrap::traits::WrappingCounter;
///
/// assert_eq!(5u8.wrapping_elapsed(250), 11);
/// assert_eq!(250u8.wrapping_advance(11), 5);
/// assert_eq!(<u16 as WrappingCounter>::BITS, 16);
/// ```
pub trait WrappingCounter: Copy + Eq + Ord + Debug {
    /// Counter width in bits, `1..=64`
    const BITS: u32;

    /// Counter value right after a wrap
    const ZERO: Self;

    /// Largest representable counter value, `2^BITS - 1`
    const MAX: Self;

    /// Forward distance from `previous` to `self`, modulo `2^BITS`
    ///
    /// Correct across a single wraparound. If the counter wrapped more than
    /// once between the two samples the result aliases to a smaller value;
    /// this cannot be detected from the samples alone.
    fn wrapping_elapsed(self, previous: Self) -> Self;

    /// Counter value `ticks` after `self`, modulo `2^BITS`
    fn wrapping_advance(self, ticks: Self) -> Self;

    /// Widens the counter value to `u64`
    fn to_u64(self) -> u64;
}

macro_rules! impl_wrapping_counter {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WrappingCounter for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn wrapping_elapsed(self, previous: Self) -> Self {
                    self.wrapping_sub(previous)
                }

                #[inline]
                fn wrapping_advance(self, ticks: Self) -> Self {
                    self.wrapping_add(ticks)
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_wrapping_counter!(u8, u16, u32, u64, usize);
