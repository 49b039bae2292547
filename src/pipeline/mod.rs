// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Unwind Pipeline
// ====================================================================================
//
//   [Driver] -- (rank, L, n, k, mode) --> [unwinder::unwind]
//                                              |
//                                              |  L x codec::decode(value, 1)
//                                              |  + mode correction + truncation
//                                              v
//                                         [rank::digits] at depth 0
//                                              |
//   [Driver] <-- UnwindOutput { digits, terminal_value, telemetry } --'
//
// The telemetry log is created, filled and returned by a single call. Nothing in
// this module holds state between calls.
// ====================================================================================

pub mod telemetry;
pub mod unwinder;

pub use telemetry::{TelemetryLog, TimingSample};
pub use unwinder::{unwind, UnwindOutput};

use crate::error::{ensure_positive, Result, SpeedyError};

/// Number of layers to unwind for a domain of size `n` and selection size `k`:
/// `ceil(k * log2(n))`.
///
/// # Errors
/// Returns `SpeedyError::InvalidArgument` if `n` or `k` is zero, or if the
/// layer count does not fit a `u32`.
pub fn layer_count(n: u64, k: u32) -> Result<u32> {
    ensure_positive(n, k)?;
    let layers = (f64::from(k) * (n as f64).log2()).ceil();
    if layers > f64::from(u32::MAX) {
        return Err(SpeedyError::InvalidArgument(format!(
            "layer count for n={} k={} exceeds {}",
            n,
            k,
            u32::MAX
        )));
    }
    Ok(layers as u32)
}
