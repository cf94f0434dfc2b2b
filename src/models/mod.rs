//! Domain models for the fieldcheck validation pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`DataType`] - Closed set of field value categories
//! - [`ErrorCode`] - The five-code classification of one field check
//! - [`ValidationRow`] - One report row per checked sub-section

use serde::{Deserialize, Serialize};

// =============================================================================
// Data Type
// =============================================================================

/// Category of a field value.
///
/// Schema files spell these `"digits"`, `"word_characters"` and
/// `"others"`; the report columns use the same spellings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Decimal digits only.
    Digits,
    /// Letters and spaces only.
    WordCharacters,
    /// Anything else, including the empty string.
    Others,
}

impl DataType {
    /// The schema file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Digits => "digits",
            DataType::WordCharacters => "word_characters",
            DataType::Others => "others",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Error Code
// =============================================================================

/// Outcome of checking one sub-section value against the schema.
///
/// `E05` bypasses classification entirely: it marks a position the
/// input record never supplied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCode {
    /// Type and length both satisfy the schema (E01).
    #[serde(rename = "E01")]
    Valid,
    /// Wrong data type, length within bounds (E02).
    #[serde(rename = "E02")]
    TypeMismatch,
    /// Correct data type, length over the maximum (E03).
    #[serde(rename = "E03")]
    LengthExceeded,
    /// Data type and length both violated (E04).
    #[serde(rename = "E04")]
    TypeAndLengthMismatch,
    /// No value supplied at this position (E05).
    #[serde(rename = "E05")]
    MissingField,
}

impl ErrorCode {
    /// The code as it appears in the report and the error code file.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Valid => "E01",
            ErrorCode::TypeMismatch => "E02",
            ErrorCode::LengthExceeded => "E03",
            ErrorCode::TypeAndLengthMismatch => "E04",
            ErrorCode::MissingField => "E05",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Validation Row
// =============================================================================

/// One row of the final report.
///
/// Created once per (section, sub-section) pair and never mutated; the
/// row table grows in memory and is converted to CSV only when the
/// report is flushed. `given_data_type` and `given_length` stay empty
/// for [`ErrorCode::MissingField`] rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationRow {
    /// Section key from the input record.
    pub section: String,
    /// Sub-section key from the schema.
    pub sub_section: String,
    /// Observed category of the supplied value.
    pub given_data_type: Option<DataType>,
    /// Expected category from the schema.
    pub expected_data_type: DataType,
    /// Character count of the supplied value.
    pub given_length: Option<usize>,
    /// Maximum length from the schema.
    pub expected_max_length: usize,
    /// Classification outcome.
    pub error_code: ErrorCode,
}

// =============================================================================
// Tests
// =============================================================================
