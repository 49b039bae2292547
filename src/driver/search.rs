//! The candidate driver: pick one candidate, unwind it, time the whole call.

use serde::Serialize;
use std::time::Instant;

use crate::config::{Selection, SpeedyConfig, UnwindMode};
use crate::error::{Result, SpeedyError};
use crate::pipeline::{self, TelemetryLog};
use crate::types::DigitSequence;

/// Everything one driver run produced.
#[derive(Serialize, Debug, Clone)]
pub struct SearchReport {
    pub n: u64,
    pub k: u32,
    pub selection: Selection,
    pub unwind_mode: UnwindMode,
    /// The candidate that was unwound.
    pub selected: i64,
    /// Position of the first occurrence of `selected` in the input.
    pub selected_index: usize,
    /// `ceil(k * log2(n))`.
    pub layers: u32,
    pub terminal_value: i64,
    pub digits: DigitSequence,
    pub telemetry: TelemetryLog,
    /// Wall-clock time around selection and unwinding.
    pub total_elapsed_ns: u64,
}

/// Returns the index and value of the smallest or largest candidate. Ties
/// resolve to the first occurrence.
///
/// # Errors
/// `SpeedyError::EmptyInput` if `values` is empty.
pub fn select_candidate(values: &[i64], selection: Selection) -> Result<(usize, i64)> {
    let mut iter = values.iter().copied().enumerate();
    let first = iter.next().ok_or(SpeedyError::EmptyInput)?;
    Ok(iter.fold(first, |best, (idx, value)| {
        let better = match selection {
            Selection::Minimum => value < best.1,
            Selection::Maximum => value > best.1,
        };
        if better {
            (idx, value)
        } else {
            best
        }
    }))
}

/// Runs one search over `values` for a domain of size `n` and selection size `k`.
///
/// `n` and `k` are validated first, then the candidate is selected, then the
/// unwinder runs exactly once.
pub fn run(values: &[i64], n: u64, k: u32, config: &SpeedyConfig) -> Result<SearchReport> {
    let layers = pipeline::layer_count(n, k)?;

    let start = Instant::now();
    let (selected_index, selected) = select_candidate(values, config.selection)?;
    let output = pipeline::unwind(selected, layers, n, k, config.unwind_mode)?;
    let total_elapsed_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

    log_metric!(
        "event" = "search",
        "candidates" = values.len(),
        "selected" = selected,
        "index" = selected_index,
        "layers" = layers,
        "total_ns" = total_elapsed_ns
    );

    Ok(SearchReport {
        n,
        k,
        selection: config.selection,
        unwind_mode: config.unwind_mode,
        selected,
        selected_index,
        layers,
        terminal_value: output.terminal_value,
        digits: output.digits,
        telemetry: output.telemetry,
        total_elapsed_ns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_candidate() {
        let values = [9, -4, 17, 0];
        assert_eq!(select_candidate(&values, Selection::Minimum).unwrap(), (1, -4));
        assert_eq!(select_candidate(&values, Selection::Maximum).unwrap(), (2, 17));
        assert!(matches!(
            select_candidate(&[], Selection::Minimum),
            Err(SpeedyError::EmptyInput)
        ));
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() {
        let values = [7, 2, 9, 2, 9];
        assert_eq!(select_candidate(&values, Selection::Minimum).unwrap(), (1, 2));
        assert_eq!(select_candidate(&values, Selection::Maximum).unwrap(), (2, 9));

        let report = run(&values, 4, 2, &SpeedyConfig::default()).unwrap();
        assert_eq!(report.selected, 2);
        assert_eq!(report.selected_index, 1);
    }

    #[test]
    fn test_run_two_sixteen() {
        let values: Vec<i64> = (1..=64).rev().collect();
        let report = run(&values, 2, 16, &SpeedyConfig::default()).unwrap();
        assert_eq!(report.selected, 1);
        assert_eq!(report.selected_index, 63);
        assert_eq!(report.layers, 16);
        assert_eq!(report.telemetry.len(), 16);
        assert_eq!(report.digits.len(), 16);
        assert!(report.total_elapsed_ns >= report.telemetry.samples()[15].elapsed_ns);
    }

    #[test]
    fn test_run_validates_before_selecting() {
        // Both problems present: the argument error wins.
        let err = run(&[], 0, 5, &SpeedyConfig::default()).unwrap_err();
        assert!(matches!(err, SpeedyError::InvalidArgument(_)));
    }

    #[test]
    fn test_run_empty_input() {
        let err = run(&[], 4, 2, &SpeedyConfig::default()).unwrap_err();
        assert!(matches!(err, SpeedyError::EmptyInput));
    }

    #[test]
    fn test_run_maximum_ascending() {
        let config = SpeedyConfig {
            selection: Selection::Maximum,
            unwind_mode: UnwindMode::Ascending,
            ..SpeedyConfig::default()
        };
        let report = run(&[3, 100, 42], 2, 2, &config).unwrap();
        assert_eq!(report.selected, 100);
        assert_eq!(report.selected_index, 1);
        // Same trace as the unwinder's ascending test: 100 -> 50 -> 25.
        assert_eq!(report.terminal_value, 25);
    }
}
