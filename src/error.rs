//! Error types for the fieldcheck validation pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`LoadError`] - Startup file loading errors (schema, codes, input)
//! - [`ReportError`] - Report and summary persistence errors
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading the schema definition, the error code file, or
/// the input records.
///
/// These occur before any record is processed and are never caught: a
/// missing or malformed startup file fails the whole run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON.
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

// =============================================================================
// Report Errors
// =============================================================================

/// Errors while persisting the report table or the summary text.
///
/// Caught at the I/O boundary: a failed write is logged and the run
/// carries on with its in-memory results intact.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write file.
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to serialize a report row.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::processor::run`].
/// It wraps all lower-level errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Startup file loading error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Persistence error.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for persistence operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
