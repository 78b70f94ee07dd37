//! Common utilities and shared code for property-based testing of tickwrap
//!
//! This module provides:
//! - Proptest configuration for different test scenarios
//! - Generators for counter samples of any width
//! - A `u128` reference model of modular counter distance

#![allow(dead_code)]
#![allow(special_module_name)]
#![allow(unused)]

use proptest::prelude::*;

/// Standard proptest configuration for arithmetic property tests
pub fn counter_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    }
}

/// Proptest configuration for tracker sequences (fewer, longer cases)
pub fn tracker_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 100,
        timeout: 2000,
        ..ProptestConfig::default()
    }
}

/// Proptest configuration for atomic/concurrent tests (fewer cases, longer timeout)
pub fn atomic_config() -> ProptestConfig {
    ProptestConfig {
        cases: 20,
        max_shrink_iters: 50,
        timeout: 5000,
        ..ProptestConfig::default()
    }
}

/// Value mask of a counter `bits` wide
pub fn mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Reference distance `(current - previous + M) mod M`, computed without wrapping
pub fn model_elapsed(current: u64, previous: u64, bits: u32) -> u64 {
    let modulus = 1u128 << bits;
    ((u128::from(current) + modulus - u128::from(previous)) % modulus) as u64
}

/// Generate valid counter widths
pub fn width_strategy() -> impl Strategy<Value = u32> {
    1u32..=64
}

/// Generate a width together with two samples that fit into it
pub fn width_and_samples_strategy() -> impl Strategy<Value = (u32, u64, u64)> {
    width_strategy().prop_flat_map(|bits| {
        let max = mask(bits);
        (Just(bits), 0..=max, 0..=max)
    })
}

/// Generate a pair of 32-bit samples where the second is not after the first
pub fn forward_pair_strategy() -> impl Strategy<Value = (u32, u32)> {
    any::<u32>().prop_flat_map(|current| (Just(current), 0..=current))
}

/// Generate a pair of 32-bit samples where the counter wrapped in between
pub fn wrapped_pair_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..u32::MAX).prop_flat_map(|current| (Just(current), (current + 1)..=u32::MAX))
}

/// Generate per-poll tick steps that stay below the 16-bit wrap period
pub fn step_sequence_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(any::<u16>(), 0..64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_matches_spot_values() {
        assert_eq!(model_elapsed(100, 50, 32), 50);
        assert_eq!(model_elapsed(50, 100, 32), 4_294_967_246);
        assert_eq!(model_elapsed(0, u64::MAX, 64), 1);
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask(1), 1);
        assert_eq!(mask(32), u64::from(u32::MAX));
        assert_eq!(mask(64), u64::MAX);
    }
}
