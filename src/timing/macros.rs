//! Tick configuration macros
//!
//! This module provides the `define_tick_config!` macro for easy creation
//! of custom tick configurations.

/// Macro to define a custom tick configuration
///
/// This macro creates a new unit struct that implements the `TickConfig`
/// trait. A zero frequency is rejected at compile time.
///
/// # Example
///
/// ```rust
/// use tickwrap::timing::{TickConfig, define_tick_config};
///
/// define_tick_config! {
///     name: Tim2Micros,
///     counter: u32,
///     frequency_hz: 1_000_000,
///     label: "TIM2 @ 1 MHz",
/// }
///
/// assert_eq!(Tim2Micros::NAME, "TIM2 @ 1 MHz");
/// assert_eq!(Tim2Micros::ticks_to_micros(250)?, 250);
/// # Ok::<(), tickwrap::error::TickError>(())
/// ```
#[macro_export]
macro_rules! define_tick_config {
    (
        name: $name:ident,
        counter: $counter:ty,
        frequency_hz: $freq:expr
        $(, label: $label:expr)?
        $(,)?
    ) => {
        /// Custom tick configuration
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::timing::TickConfig for $name {
            type Counter = $counter;
            const FREQUENCY_HZ: u32 = $freq;

            // Optional label, defaults to the struct name
            const NAME: &'static str =
                $crate::define_tick_config!(@default $($label)?, stringify!($name));
        }

        const _: () = assert!(
            <$name as $crate::timing::TickConfig>::FREQUENCY_HZ > 0,
            "tick frequency must be non-zero"
        );
    };

    // Helper macro for default values
    (@default $value:expr, $default:expr) => { $value };
    (@default , $default:expr) => { $default };
}

// Re-export the macro for convenience
pub use crate::define_tick_config;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::NarrowCounter;
    use crate::timing::TickConfig;
    use crate::traits::WrappingCounter;

    define_tick_config! {
        name: TestConfig,
        counter: u16,
        frequency_hz: 1_000,
    }

    #[test]
    fn test_macro_generated_config() {
        assert_eq!(TestConfig::FREQUENCY_HZ, 1_000);
        assert_eq!(<<TestConfig as TickConfig>::Counter as WrappingCounter>::BITS, 16);

        // Check defaults
        assert_eq!(TestConfig::NAME, "TestConfig");
    }

    #[test]
    fn test_macro_validation() {
        assert!(TestConfig::validate().is_ok());
    }

    define_tick_config! {
        name: LabelledConfig,
        counter: NarrowCounter<24>,
        frequency_hz: 32_768,
        label: "RTC0",
    }

    #[test]
    fn test_macro_with_custom_values() {
        assert_eq!(LabelledConfig::NAME, "RTC0");
        assert_eq!(LabelledConfig::period_ticks(), Ok(1 << 24));
        assert!(LabelledConfig::validate().is_ok());
    }
}
