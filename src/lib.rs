//! This file is the root of the `speedy` Rust crate.
//!
//! Its responsibilities are strictly limited to declaring the top-level modules
//! and re-exporting the handful of items most callers need.
//!
//! Layout, leaves first:
//! 1.  `kernels`: the scalar codec and the rank-to-digit mapper.
//! 2.  `pipeline`: the layer unwinder and its telemetry log.
//! 3.  `driver`: candidate loading, selection, reporting and test-set generation.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod driver;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod types;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use config::{Selection, SpeedyConfig, UnwindMode};
pub use error::{Result, SpeedyError};
pub use kernels::{decode, encode, ith_digits};
pub use pipeline::{layer_count, unwind, TelemetryLog, TimingSample, UnwindOutput};
pub use types::DigitSequence;
