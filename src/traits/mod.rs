//! Core traits module
//!
//! This module defines the two seams of the crate: the width of a wrapping
//! counter and the source that produces its samples.

pub mod counter;
pub mod source;

// Re-export main traits
pub use counter::WrappingCounter;
pub use source::TickSource;
