//! Error handling module for tickwrap
//!
//! The wrapping distance itself is total and never fails. Errors only arise in
//! the auxiliary layers: runtime-width validation, tick-rate conversion and
//! configuration checks.

pub mod types;

// Re-export main types
pub use types::{TickError, TickResult};
