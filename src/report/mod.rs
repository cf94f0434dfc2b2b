//! Report and summary persistence.
//!
//! Writes the row table as CSV and the summary as plain text. The
//! fallible [`ReportWriter::write`] surfaces I/O problems; a finished
//! run goes through [`ReportWriter::persist`] instead, which logs a
//! failure and keeps the process alive.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReportResult;
use crate::logs::{log_error, log_success};
use crate::processor::ValidationOutcome;

/// Report column headers, in output order.
///
/// The order must match the field order of
/// [`crate::models::ValidationRow`].
pub const REPORT_HEADERS: [&str; 7] = [
    "Section",
    "Sub-Section",
    "Given DataType",
    "Expected DataType",
    "Given Length",
    "Expected MaxLength",
    "Error Code",
];

/// Destination paths for one run's outputs.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    report_path: PathBuf,
    summary_path: PathBuf,
}

impl ReportWriter {
    pub fn new(report_path: impl Into<PathBuf>, summary_path: impl Into<PathBuf>) -> Self {
        Self {
            report_path: report_path.into(),
            summary_path: summary_path.into(),
        }
    }

    /// Write the report CSV and the summary text, creating parent
    /// directories as needed.
    ///
    /// The header row is always written, even for an empty table.
    pub fn write(&self, outcome: &ValidationOutcome) -> ReportResult<()> {
        ensure_parent(&self.report_path)?;
        ensure_parent(&self.summary_path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.report_path)?;
        writer.write_record(REPORT_HEADERS)?;
        for row in &outcome.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        fs::write(&self.summary_path, &outcome.summary)?;
        Ok(())
    }

    /// Write both outputs, logging instead of failing.
    ///
    /// In-memory results stay with the caller; a failed write is
    /// visible on the run log only.
    pub fn persist(&self, outcome: &ValidationOutcome) {
        match self.write(outcome) {
            Ok(()) => log_success(format!(
                "Report written to {}, summary to {}",
                self.report_path.display(),
                self.summary_path.display()
            )),
            Err(e) => log_error(format!("Failed to write outputs: {}", e)),
        }
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
