//! Machine-readable run reports.
//!
//! Every invocation leaves a `.report.json` record next to its artifacts
//! (or next to the would-be output on failure): the structured half of
//! the diagnostic output, alongside the human-readable console lines.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bitfont_core::FontTable;
use serde::{Deserialize, Serialize};

/// Report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Font-level summary recorded in a run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSummary {
    pub short_name: String,
    pub family: String,
    pub size: u32,
    pub height: u32,
    pub style: String,
    pub inverted: bool,
    pub glyph_count: usize,
}

impl FontSummary {
    /// Summarize an assembled table; the count is read live.
    pub fn from_table(font: &FontTable) -> Self {
        Self {
            short_name: font.short_name(),
            family: font.family().to_string(),
            size: font.point_size(),
            height: font.line_height(),
            style: font.style().to_string(),
            inverted: font.inverted(),
            glyph_count: font.glyph_count(),
        }
    }
}

/// Failure record inside a run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    pub exit_code: u8,
    pub message: String,
}

/// One generation run, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub report_version: u32,
    pub tool_version: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSummary>,
    pub outputs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
    pub duration_ms: u64,
}

impl RunReport {
    /// Report for a completed run.
    pub fn success(font: FontSummary, outputs: Vec<String>, duration_ms: u64) -> Self {
        Self {
            report_version: REPORT_VERSION,
            tool_version: tool_version(),
            ok: true,
            font: Some(font),
            outputs,
            error: None,
            duration_ms,
        }
    }

    /// Report for an aborted run. No artifacts were written.
    pub fn failure(message: impl Into<String>, exit_code: u8, duration_ms: u64) -> Self {
        Self {
            report_version: REPORT_VERSION,
            tool_version: tool_version(),
            ok: false,
            font: None,
            outputs: Vec::new(),
            error: Some(ReportError {
                exit_code,
                message: message.into(),
            }),
            duration_ms,
        }
    }
}

fn tool_version() -> String {
    format!("bitfontgen v{}", env!("CARGO_PKG_VERSION"))
}

/// Report path for an output base: `<base>.report.json`.
pub fn report_path(base: &str) -> PathBuf {
    PathBuf::from(format!("{}.report.json", base))
}

/// Serialize and write a report.
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize run report")?;
    fs::write(path, json).with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}
