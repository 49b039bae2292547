//! Rendering of a `SearchReport` for the command line.

use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::driver::search::SearchReport;
use crate::error::Result;

/// Output style for a finished search.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// **Default:** the selected value, then `"<total> ns"`.
    #[default]
    Text,
    /// Text plus layer count, digits, aggregates and per-layer samples.
    Verbose,
    /// The whole report as pretty-printed JSON.
    Json,
}

/// Writes `report` in the requested format. `per_layer` controls whether the
/// verbose format lists every telemetry sample.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SearchReport,
    format: ReportFormat,
    per_layer: bool,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(out, report)?,
        ReportFormat::Verbose => write_verbose(out, report, per_layer)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, report: &SearchReport) -> Result<()> {
    writeln!(out, "{}", report.selected)?;
    writeln!(out, "{} ns", report.total_elapsed_ns)?;
    Ok(())
}

fn write_verbose<W: Write>(out: &mut W, report: &SearchReport, per_layer: bool) -> Result<()> {
    let telemetry = &report.telemetry;

    writeln!(out, "{}", "--- SEARCH SUMMARY ---".bold())?;
    writeln!(out, "Selected value ({:?}): {}", report.selection, report.selected)?;
    writeln!(out, "Index of selected value in input: {}", report.selected_index)?;
    writeln!(out, "Number of steps/layers: {}", report.layers)?;
    writeln!(out, "Unwind mode: {:?}", report.unwind_mode)?;
    writeln!(out, "Terminal value: {}", report.terminal_value)?;
    writeln!(out, "Digits: {}", report.digits)?;
    writeln!(out, "Total processing time: {} ns", report.total_elapsed_ns)?;
    writeln!(out, "Total step timing: {} ns", telemetry.total_elapsed_ns())?;
    writeln!(
        out,
        "Memory: peak {} bytes, total {} bytes",
        telemetry.peak_byte_size(),
        telemetry.total_byte_size()
    )?;

    if per_layer && !telemetry.is_empty() {
        writeln!(out, "{}", "--- PER-LAYER TELEMETRY ---".bold())?;
        for sample in telemetry {
            writeln!(
                out,
                "  layer {:>4}: {:>12} ns, {:>6} bytes",
                sample.depth, sample.elapsed_ns, sample.byte_size
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpeedyConfig;
    use crate::driver::search::run;

    fn sample_report() -> SearchReport {
        run(&[12, 5, 40], 2, 3, &SpeedyConfig::default()).unwrap()
    }

    #[test]
    fn test_text_format_is_two_lines() {
        let report = sample_report();
        let mut buf = Vec::new();
        write_report(&mut buf, &report, ReportFormat::Text, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "5");
        assert_eq!(lines[1], format!("{} ns", report.total_elapsed_ns));
    }

    #[test]
    fn test_verbose_lists_each_layer() {
        colored::control::set_override(false);
        let report = sample_report();
        let mut buf = Vec::new();
        write_report(&mut buf, &report, ReportFormat::Verbose, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Number of steps/layers: 3"));
        assert!(text.contains("Index of selected value in input: 1"));
        assert_eq!(text.matches("  layer ").count(), 3);

        let mut quiet = Vec::new();
        write_report(&mut quiet, &report, ReportFormat::Verbose, false).unwrap();
        assert!(!String::from_utf8(quiet).unwrap().contains("  layer "));
    }

    #[test]
    fn test_json_format_round_trips_through_value() {
        let report = sample_report();
        let mut buf = Vec::new();
        write_report(&mut buf, &report, ReportFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["selected"], 5);
        assert_eq!(value["selected_index"], 1);
        assert_eq!(value["layers"], 3);
        assert_eq!(value["selection"], "minimum");
        assert_eq!(value["telemetry"].as_array().unwrap().len(), 3);
    }
}
