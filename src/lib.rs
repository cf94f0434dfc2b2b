//! # Fieldcheck - schema-driven record validation and error reporting
//!
//! Fieldcheck checks `&`-delimited text records against a standard
//! definition of expected data types and maximum lengths. Every
//! checked field becomes an error code and a templated, human-readable
//! message.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Input lines │────▶│  Processor  │────▶│   Outcome   │────▶│ report.csv  │
//! │ (L1&1&AB…)  │     │ classify +  │     │ row table + │     │ summary.txt │
//! │             │     │ resolve     │     │ summary     │     │ summary.log │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::{run, RunConfig};
//!
//! fn main() {
//!     let outcome = run(&RunConfig::default()).unwrap();
//!     println!("Checked {} rows, {} issues", outcome.rows.len(), outcome.issue_count());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (DataType, ErrorCode, ValidationRow)
//! - [`schema`] - Standard definition loading and section lookup
//! - [`validation`] - Field classification and error code resolution
//! - [`render`] - Message catalog and template rendering
//! - [`processor`] - Line-by-line record processing pipeline
//! - [`report`] - Report and summary persistence
//! - [`config`] - Run configuration
//! - [`logs`] - Run log sink

// Core modules
pub mod error;
pub mod models;

// Configuration
pub mod config;

// Schema
pub mod schema;

// Validation
pub mod validation;

// Rendering
pub mod render;

// Processing
pub mod processor;

// Reporting
pub mod report;

// Run log
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    LoadError,
    LoadResult,
    PipelineError,
    PipelineResult,
    ReportError,
    ReportResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    DataType,
    ErrorCode,
    ValidationRow,
};

// =============================================================================
// Re-exports - Schema
// =============================================================================

pub use schema::{
    SectionDef,
    StandardDefinition,
    SubSectionDef,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{classify, resolve};

// =============================================================================
// Re-exports - Rendering
// =============================================================================

pub use render::{CodeTemplate, MessageCatalog};

// =============================================================================
// Re-exports - Processing
// =============================================================================

pub use processor::{
    run,
    RecordProcessor,
    ValidationOutcome,
    FIELD_DELIMITER,
};

// =============================================================================
// Re-exports - Reporting
// =============================================================================

pub use report::{ReportWriter, REPORT_HEADERS};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{
    LoadedInputs,
    RunConfig,
    DEFAULT_CODES_FILE,
    DEFAULT_DEFINITION_FILE,
    DEFAULT_INPUT_FILE,
    DEFAULT_LOG_FILE,
    DEFAULT_OUT_DIR,
};
