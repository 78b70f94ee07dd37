//! Tick rate configuration module for tickwrap
//!
//! Elapsed ticks only become time once the tick frequency is known. This
//! module describes a tick source at compile time (counter type and
//! frequency), converts ticks into [`core::time::Duration`] and checks that a
//! polling schedule can uphold the at-most-one-wrap precondition.

pub mod config;
pub mod macros;
pub mod validation;

// Re-export main types
pub use config::TickConfig;
pub use macros::define_tick_config;
pub use validation::TickValidator;
