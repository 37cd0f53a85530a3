//! Domain services: pure functions over domain values.

pub mod categorizer;
pub mod sanitizer;

pub use categorizer::Origin;
pub use sanitizer::sanitize;
