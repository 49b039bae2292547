// In: src/config.rs

//! The single source of truth for all speedy run configuration.
//!
//! `SpeedyConfig` is created once at the application boundary (from a JSON file,
//! CLI flags, or `Default`) and passed down by reference to the driver and the
//! unwinder. Every field has a serde default, so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Result, SpeedyError};

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Which candidate the driver hands to the unwinder.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// **Default:** unwind the smallest candidate.
    #[default]
    Minimum,
    /// Unwind the largest candidate. Usually paired with `UnwindMode::Ascending`.
    Maximum,
}

/// How each unwind step derives the next carried value from `decode(value, 1)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnwindMode {
    /// **Default:** `truncate(decode(value, 1) - depth / 2)`. The `depth / 2`
    /// term is subtracted on top of the offset `decode` already removes.
    #[default]
    DoubleSubtraction,

    /// Experimental: `truncate(decode(value, 1))`, without the extra term.
    SingleSubtraction,

    /// `truncate(decode(value, 1) + depth / 2)`, for walking toward the largest
    /// value instead of the smallest.
    Ascending,
}

impl UnwindMode {
    /// Applies the per-depth correction to an already decoded value.
    #[inline]
    pub fn adjust(self, decoded: f64, depth: u32) -> f64 {
        let half_depth = f64::from(depth) / 2.0;
        match self {
            UnwindMode::DoubleSubtraction => decoded - half_depth,
            UnwindMode::SingleSubtraction => decoded,
            UnwindMode::Ascending => decoded + half_depth,
        }
    }
}

//==================================================================================
// II. The Unified SpeedyConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SpeedyConfig {
    /// Which candidate to unwind.
    #[serde(default)]
    pub selection: Selection,

    /// Per-step value derivation used by the unwinder.
    #[serde(default)]
    pub unwind_mode: UnwindMode,

    /// If true, reports include one line per telemetry sample. The log itself
    /// is always collected.
    #[serde(default = "default_true")]
    pub record_telemetry: bool,

    /// Upper bound on `n^k` accepted by the test-set generator.
    #[serde(default = "default_max_generated_values")]
    pub max_generated_values: u64,

    /// Log filter applied by the binary (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SpeedyConfig {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            unwind_mode: UnwindMode::default(),
            record_telemetry: true,
            max_generated_values: default_max_generated_values(),
            log_level: default_log_level(),
        }
    }
}

impl SpeedyConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file on disk.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Parses `log_level` into a filter for the logger.
    ///
    /// # Errors
    /// `SpeedyError::InvalidArgument` if the level name is not recognised.
    pub fn log_filter(&self) -> Result<log::LevelFilter> {
        self.log_level.parse().map_err(|_| {
            SpeedyError::InvalidArgument(format!(
                "unknown log level '{}' (expected off, error, warn, info, debug or trace)",
                self.log_level
            ))
        })
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

/// 2^24 values, about 16.7M rows of CSV.
fn default_max_generated_values() -> u64 {
    1 << 24
}

fn default_log_level() -> String {
    "warn".to_string()
}
