//! Per-step timing and size telemetry for one unwind invocation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One completed unwind step.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// Depth the step operated at (`1..=L`).
    pub depth: u32,
    /// Wall-clock time spent in the step and everything beneath it.
    pub elapsed_ns: u64,
    /// Byte size of the digit sequence the step returned.
    pub byte_size: usize,
}

impl TimingSample {
    pub(crate) fn new(depth: u32, elapsed: Duration, byte_size: usize) -> Self {
        Self {
            depth,
            // u64 nanoseconds cover ~584 years.
            elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            byte_size,
        }
    }
}

/// Append-only log of `TimingSample`s, in completion order.
///
/// Owned by a single top-level unwind call. Appending is crate-internal;
/// consumers only get read access, so recorded entries are never modified.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TelemetryLog {
    samples: Vec<TimingSample>,
}

impl TelemetryLog {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, sample: TimingSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimingSample> {
        self.samples.iter()
    }

    /// Sum of all step timings. Steps nest, so this over-counts wall time; it
    /// mirrors the "total search timing" figure of the reports.
    pub fn total_elapsed_ns(&self) -> u64 {
        self.samples
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.elapsed_ns))
    }

    pub fn total_byte_size(&self) -> usize {
        self.samples.iter().map(|s| s.byte_size).sum()
    }

    pub fn peak_byte_size(&self) -> usize {
        self.samples.iter().map(|s| s.byte_size).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a TelemetryLog {
    type Item = &'a TimingSample;
    type IntoIter = std::slice::Iter<'a, TimingSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
