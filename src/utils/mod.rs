//! Utility modules for timing and formatting.

pub mod timer;

// Re-export commonly used items
pub use timer::{format_duration, timed, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
