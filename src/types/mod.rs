//! This module defines the core, strongly-typed data representations shared
//! by the kernels, the unwinder and the driver.

pub mod digit_sequence;

// Re-export the main type(s) for easier access.
pub use digit_sequence::DigitSequence;
