//! Counters narrower than a native integer
//!
//! Many timer peripherals expose counters that do not match a Rust integer
//! width: the Cortex-M SysTick is 24 bits wide, the nRF RTC counter is 24 bits,
//! some capture units are 12 or 48 bits. Native wrapping subtraction would
//! wrap at the wrong modulus for those, so [`NarrowCounter`] masks the result
//! down to its own width.

use crate::error::{TickError, TickResult};
use crate::traits::WrappingCounter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the value mask for a counter of `bits` width
///
/// `bits` must already be validated to lie in `1..=64`.
#[inline]
pub(crate) const fn width_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Unsigned counter of `BITS` width, `1 <= BITS <= 64`
///
/// The value is stored in a `u64` and is always below `2^BITS`. With the
/// `serde` feature it serializes as a bare integer, and deserialization goes
/// through [`NarrowCounter::new`], so out-of-range input is rejected.
///
/// # Example
/// ```rust
/// use tickwrap::counter::NarrowCounter;
/// use tickwrap::traits::WrappingCounter;
///
/// type SysTick = NarrowCounter<24>;
///
/// let before = SysTick::new(0x00FF_FFF0)?;
/// let after = SysTick::new(0x0000_0010)?;
/// assert_eq!(after.wrapping_elapsed(before).get(), 0x20);
/// # Ok::<(), tickwrap::error::TickError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct NarrowCounter<const BITS: u32>(u64);

impl<const BITS: u32> NarrowCounter<BITS> {
    /// Rejects widths outside `1..=64` at compile time
    const VALID_WIDTH: () = assert!(BITS >= 1 && BITS <= 64, "counter width must be 1..=64 bits");

    /// Bit mask covering every representable value
    pub const MASK: u64 = {
        let () = Self::VALID_WIDTH;
        width_mask(BITS)
    };

    /// Creates a counter value, rejecting raw values that do not fit
    pub const fn new(raw: u64) -> TickResult<Self> {
        if raw > Self::MASK {
            return Err(TickError::SampleOutOfRange {
                value: raw,
                bits: BITS,
            });
        }
        Ok(Self(raw))
    }

    /// Creates a counter value by discarding bits above the counter width
    ///
    /// Useful when a peripheral register is wider than the counter it holds
    /// and its upper bits are undefined.
    pub const fn truncate(raw: u64) -> Self {
        Self(raw & Self::MASK)
    }

    /// Returns the raw counter value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl<const BITS: u32> WrappingCounter for NarrowCounter<BITS> {
    const BITS: u32 = BITS;
    const ZERO: Self = Self(0);
    const MAX: Self = Self(Self::MASK);

    #[inline]
    fn wrapping_elapsed(self, previous: Self) -> Self {
        Self(self.0.wrapping_sub(previous.0) & Self::MASK)
    }

    #[inline]
    fn wrapping_advance(self, ticks: Self) -> Self {
        Self(self.0.wrapping_add(ticks.0) & Self::MASK)
    }

    #[inline]
    fn to_u64(self) -> u64 {
        self.0
    }
}

impl<const BITS: u32> From<NarrowCounter<BITS>> for u64 {
    fn from(counter: NarrowCounter<BITS>) -> Self {
        counter.0
    }
}

impl<const BITS: u32> TryFrom<u64> for NarrowCounter<BITS> {
    type Error = TickError;

    fn try_from(raw: u64) -> TickResult<Self> {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks() {
        assert_eq!(NarrowCounter::<1>::MASK, 1);
        assert_eq!(NarrowCounter::<24>::MASK, 0x00FF_FFFF);
        assert_eq!(NarrowCounter::<63>::MASK, u64::MAX >> 1);
        assert_eq!(NarrowCounter::<64>::MASK, u64::MAX);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            NarrowCounter::<24>::new(1 << 24),
            Err(TickError::SampleOutOfRange {
                value: 1 << 24,
                bits: 24
            })
        );
        assert!(NarrowCounter::<24>::new((1 << 24) - 1).is_ok());
        assert!(NarrowCounter::<64>::new(u64::MAX).is_ok());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(NarrowCounter::<12>::truncate(0xABCD).get(), 0xBCD);
        assert_eq!(NarrowCounter::<64>::truncate(u64::MAX).get(), u64::MAX);
    }

    #[test]
    fn test_elapsed_wraps_at_counter_width() {
        let previous = NarrowCounter::<24>::truncate(0x00FF_FFFF);
        let current = NarrowCounter::<24>::truncate(0);
        assert_eq!(current.wrapping_elapsed(previous).get(), 1);

        // Same samples, other direction: one short of a full period.
        assert_eq!(previous.wrapping_elapsed(current).get(), 0x00FF_FFFF);
    }

    #[test]
    fn test_single_bit_counter() {
        let zero = NarrowCounter::<1>::ZERO;
        let one = NarrowCounter::<1>::MAX;
        assert_eq!(zero.wrapping_elapsed(one).get(), 1);
        assert_eq!(one.wrapping_advance(one).get(), 0);
    }

    #[test]
    fn test_advance_is_inverse_of_elapsed() {
        let previous = NarrowCounter::<12>::truncate(4000);
        let current = NarrowCounter::<12>::truncate(17);
        let delta = current.wrapping_elapsed(previous);
        assert_eq!(previous.wrapping_advance(delta), current);
    }
}
