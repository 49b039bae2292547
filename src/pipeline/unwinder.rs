//! The layer unwinder.
//!
//! Starting from a carried value at depth `L`, each step decodes one layer,
//! applies the mode's per-depth correction and truncates toward zero, until
//! depth 0 is reached and the rank mapper runs once on the final value.
//!
//! The walk is an explicit loop rather than recursion. The descent records the
//! start instant of every step; once the mapper returns, the ascent emits one
//! sample per step from depth 1 up to depth `L`, the order in which the nested
//! steps would complete.

use std::time::Instant;

use crate::config::UnwindMode;
use crate::error::{ensure_positive, Result};
use crate::kernels::{codec, rank};
use crate::pipeline::telemetry::{TelemetryLog, TimingSample};
use crate::types::DigitSequence;

/// Result of one top-level unwind call.
#[derive(Debug, Clone)]
pub struct UnwindOutput {
    /// Digit sequence produced by the mapper at depth 0.
    pub digits: DigitSequence,
    /// Value handed to the mapper after the last step.
    pub terminal_value: i64,
    /// One sample per step, in completion order.
    pub telemetry: TelemetryLog,
}

/// Unwinds `initial` through `depth` layers, then expands it into `k` digits.
///
/// `n` and `k` are validated before any step runs. With `depth == 0` this is
/// the mapper applied directly to `initial` and the telemetry log is empty.
///
/// # Errors
/// Returns `SpeedyError::InvalidArgument` if `n` or `k` is zero.
pub fn unwind(initial: i64, depth: u32, n: u64, k: u32, mode: UnwindMode) -> Result<UnwindOutput> {
    ensure_positive(n, k)?;

    let mut step_starts: Vec<Instant> = Vec::with_capacity(depth as usize);
    let mut value = initial;

    // Descent: step_starts[0] is depth L, the last entry depth 1.
    for current_depth in (1..=depth).rev() {
        step_starts.push(Instant::now());
        let decoded = codec::decode(value as f64, 1);
        value = truncate(mode.adjust(decoded, current_depth));
        log::trace!("unwind depth {} -> {}", current_depth, value);
    }

    let digits = rank::digits_unchecked(k, value);
    let byte_size = digits.byte_size();

    // Ascent: innermost step completes first.
    let mut telemetry = TelemetryLog::with_capacity(step_starts.len());
    for (idx, start) in step_starts.iter().enumerate().rev() {
        let step_depth = depth - idx as u32;
        telemetry.record(TimingSample::new(step_depth, start.elapsed(), byte_size));
    }

    log_metric!(
        "event" = "unwind",
        "mode" = format!("{:?}", mode),
        "layers" = depth,
        "initial" = initial,
        "terminal" = value,
        "step_ns" = telemetry.total_elapsed_ns()
    );

    Ok(UnwindOutput {
        digits,
        terminal_value: value,
        telemetry,
    })
}

/// Truncates toward zero. Saturates at the `i64` range; NaN maps to 0.
#[inline]
fn truncate(x: f64) -> i64 {
    x.trunc() as i64
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpeedyError;
    use crate::kernels::ith_digits;

    /// Reference implementation: the nested form the loop replaces.
    fn unwind_recursive(value: i64, depth: u32, mode: UnwindMode) -> i64 {
        if depth == 0 {
            return value;
        }
        let next = truncate(mode.adjust(codec::decode(value as f64, 1), depth));
        unwind_recursive(next, depth - 1, mode)
    }

    #[test]
    fn test_depth_zero_is_the_mapper() {
        let out = unwind(37, 0, 10, 3, UnwindMode::default()).unwrap();
        assert_eq!(out.digits, ith_digits(10, 3, 37).unwrap());
        assert_eq!(out.terminal_value, 37);
        assert!(out.telemetry.is_empty());
    }

    #[test]
    fn test_one_sample_per_layer() {
        for &initial in &[0i64, 1, 65_536, -9, i64::MAX] {
            let out = unwind(initial, 16, 2, 16, UnwindMode::default()).unwrap();
            assert_eq!(out.telemetry.len(), 16);
            assert_eq!(out.digits.len(), 16);
            assert!(out.digits.is_well_formed());
        }
    }

    #[test]
    fn test_samples_are_in_completion_order() {
        let out = unwind(1_000, 5, 4, 3, UnwindMode::default()).unwrap();
        let depths: Vec<u32> = out.telemetry.iter().map(|s| s.depth).collect();
        assert_eq!(depths, vec![1, 2, 3, 4, 5]);
        // Outer steps enclose inner ones.
        let times: Vec<u64> = out.telemetry.iter().map(|s| s.elapsed_ns).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        assert!(out.telemetry.iter().all(|s| s.byte_size == 12));
    }

    #[test]
    fn test_double_subtraction_trace() {
        // depth 2: decode(100,1) = 49.5, - 1.0 -> 48
        // depth 1: decode(48,1)  = 23.5, - 0.5 -> 23
        let out = unwind(100, 2, 4, 2, UnwindMode::DoubleSubtraction).unwrap();
        assert_eq!(out.terminal_value, 23);
        assert_eq!(out.digits, ith_digits(4, 2, 23).unwrap());
    }

    #[test]
    fn test_alternate_modes_trace() {
        // single: 100 -> 49 -> 24
        let single = unwind(100, 2, 4, 2, UnwindMode::SingleSubtraction).unwrap();
        assert_eq!(single.terminal_value, 24);
        // ascending: 100 -> trunc(49.5 + 1.0) = 50 -> trunc(24.5 + 0.5) = 25
        let ascending = unwind(100, 2, 4, 2, UnwindMode::Ascending).unwrap();
        assert_eq!(ascending.terminal_value, 25);
    }

    #[test]
    fn test_loop_matches_recursive_form() {
        for mode in [
            UnwindMode::DoubleSubtraction,
            UnwindMode::SingleSubtraction,
            UnwindMode::Ascending,
        ] {
            for &initial in &[0i64, 7, 123_456, -42] {
                let out = unwind(initial, 12, 8, 4, mode).unwrap();
                assert_eq!(out.terminal_value, unwind_recursive(initial, 12, mode));
            }
        }
    }

    #[test]
    fn test_invalid_arguments_fail_before_unwinding() {
        let err = unwind(5, 10, 0, 5, UnwindMode::default()).unwrap_err();
        assert!(matches!(err, SpeedyError::InvalidArgument(_)));
        let err = unwind(5, 10, 3, 0, UnwindMode::default()).unwrap_err();
        assert!(matches!(err, SpeedyError::InvalidArgument(_)));
    }

    #[test]
    fn test_truncate_saturates() {
        assert_eq!(truncate(-2.7), -2);
        assert_eq!(truncate(2.7), 2);
        assert_eq!(truncate(f64::NAN), 0);
        assert_eq!(truncate(1.0e300), i64::MAX);
    }
}
