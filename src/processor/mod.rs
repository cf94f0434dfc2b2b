//! Line-by-line record processing.
//!
//! [`RecordProcessor`] walks input lines one at a time. A line is
//! split on the `&` delimiter; its first field selects a section in
//! the standard definition, and every declared sub-section is then
//! classified and coded in order. Rows and summary text accumulate in
//! a [`ValidationOutcome`] until the report writer flushes them.
//!
//! [`run`] is the whole pipeline for one configuration: load the
//! startup files, process every line, persist the outputs.

use crate::config::RunConfig;
use crate::error::PipelineResult;
use crate::logs::{log_info, log_warning};
use crate::models::{ErrorCode, ValidationRow};
use crate::render::MessageCatalog;
use crate::report::ReportWriter;
use crate::schema::StandardDefinition;
use crate::validation::{classify, resolve};

/// Field delimiter of the input records.
pub const FIELD_DELIMITER: char = '&';

// =============================================================================
// Outcome
// =============================================================================

/// Accumulated output of one processing run.
///
/// Rows and summary grow append-only while lines are processed and are
/// converted to their file formats only at flush time.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    /// One row per checked sub-section, in input order.
    pub rows: Vec<ValidationRow>,
    /// Rendered messages, blank-line-separated per input line.
    pub summary: String,
}

impl ValidationOutcome {
    /// Number of rows that did not come out fully valid.
    pub fn issue_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.error_code != ErrorCode::Valid)
            .count()
    }
}

// =============================================================================
// Processor
// =============================================================================

/// Drives classification over input lines.
///
/// Borrows the loaded standard definition and message catalog for the
/// duration of one run; owns nothing and keeps no state between calls.
pub struct RecordProcessor<'a> {
    definition: &'a StandardDefinition,
    catalog: &'a MessageCatalog,
}

impl<'a> RecordProcessor<'a> {
    pub fn new(definition: &'a StandardDefinition, catalog: &'a MessageCatalog) -> Self {
        Self { definition, catalog }
    }

    /// Process input lines in order.
    ///
    /// Lines are expected without their terminators. A line whose
    /// section key is unknown contributes nothing to the outcome
    /// beyond a warning on the run log.
    pub fn process<I, S>(&self, lines: I) -> ValidationOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = ValidationOutcome::default();
        for line in lines {
            self.process_line(line.as_ref(), &mut outcome);
        }
        outcome
    }

    fn process_line(&self, line: &str, outcome: &mut ValidationOutcome) {
        log_info(format!("Processing line: {}", line));

        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        // split always yields at least one field
        let section_key = fields.first().copied().unwrap_or_default();

        let Some(sub_sections) = self.definition.lookup(section_key) else {
            log_warning(format!(
                "Section {} not found in the standard definition",
                section_key
            ));
            return;
        };

        // fields[0] is the section key itself; values start at 1.
        for (position, sub_section) in sub_sections.iter().enumerate() {
            let row = match fields.get(position + 1) {
                Some(value) => {
                    let given_type = classify(value);
                    let given_length = value.chars().count();
                    ValidationRow {
                        section: section_key.to_string(),
                        sub_section: sub_section.key.clone(),
                        given_data_type: Some(given_type),
                        expected_data_type: sub_section.data_type,
                        given_length: Some(given_length),
                        expected_max_length: sub_section.max_length,
                        error_code: resolve(
                            sub_section.data_type,
                            sub_section.max_length,
                            given_type,
                            given_length,
                        ),
                    }
                }
                None => ValidationRow {
                    section: section_key.to_string(),
                    sub_section: sub_section.key.clone(),
                    given_data_type: None,
                    expected_data_type: sub_section.data_type,
                    given_length: None,
                    expected_max_length: sub_section.max_length,
                    error_code: ErrorCode::MissingField,
                },
            };

            let message = self.catalog.render(
                row.error_code,
                sub_section.data_type,
                sub_section.max_length,
                section_key,
                &sub_section.key,
            );
            outcome.summary.push_str(&message);
            outcome.summary.push('\n');

            log_info(format!("Row added: {:?}", row));
            outcome.rows.push(row);
        }

        // Blank line between the messages of consecutive input lines.
        outcome.summary.push('\n');
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Run the whole pipeline for one configuration.
///
/// Loads the startup files and processes every input line, then
/// persists the report and summary. Loading failures abort the run;
/// persistence failures are logged at the I/O boundary and leave the
/// returned outcome intact.
pub fn run(config: &RunConfig) -> PipelineResult<ValidationOutcome> {
    let inputs = config.load()?;
    log_info(format!(
        "Loaded {} sections and {} code templates",
        inputs.definition.sections().len(),
        inputs.catalog.templates().len()
    ));

    let processor = RecordProcessor::new(&inputs.definition, &inputs.catalog);
    let outcome = processor.process(&inputs.lines);

    log_info(format!("Report rows: {}", outcome.rows.len()));
    log_info(format!("Summary\n\n{}", outcome.summary));

    ReportWriter::new(config.report_path(), config.summary_path()).persist(&outcome);

    Ok(outcome)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DataType;
    use std::fs;

    const DEFINITION_JSON: &str = r#"[
        {
            "key": "L1",
            "sub_sections": [
                { "key": "L11", "data_type": "digits", "max_length": 1 },
                { "key": "L12", "data_type": "word_characters", "max_length": 2 },
                { "key": "L13", "data_type": "digits", "max_length": 1 }
            ]
        },
        {
            "key": "L3",
            "sub_sections": [
                { "key": "L31", "data_type": "word_characters", "max_length": 2 }
            ]
        }
    ]"#;

    const CODES_JSON: &str = r#"[
        { "code": "E01", "message_template": "LXY under LX is valid" },
        { "code": "E02", "message_template": "LXY under LX must be of type {data_type}" },
        { "code": "E03", "message_template": "LXY under LX must not exceed {max_length} characters" },
        { "code": "E04", "message_template": "LXY under LX must be of type {data_type} and must not exceed {max_length} characters" },
        { "code": "E05", "message_template": "LXY under LX is missing" }
    ]"#;

    fn fixtures() -> (StandardDefinition, MessageCatalog) {
        (
            StandardDefinition::from_json(DEFINITION_JSON).unwrap(),
            MessageCatalog::from_json(CODES_JSON).unwrap(),
        )
    }

    fn codes_of(outcome: &ValidationOutcome) -> Vec<ErrorCode> {
        outcome.rows.iter().map(|row| row.error_code).collect()
    }

    #[test]
    fn test_valid_values_and_missing_tail() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process(["L1&1&AB"]);
        assert_eq!(
            codes_of(&outcome),
            vec![ErrorCode::Valid, ErrorCode::Valid, ErrorCode::MissingField]
        );
        assert_eq!(
            outcome.rows[0],
            ValidationRow {
                section: "L1".into(),
                sub_section: "L11".into(),
                given_data_type: Some(DataType::Digits),
                expected_data_type: DataType::Digits,
                given_length: Some(1),
                expected_max_length: 1,
                error_code: ErrorCode::Valid,
            }
        );
        // The missing third sub-section carries no observed values.
        assert_eq!(outcome.rows[2].given_data_type, None);
        assert_eq!(outcome.rows[2].given_length, None);
        assert!(outcome.summary.contains("L13 under L1 is missing"));
    }

    #[test]
    fn test_empty_line_is_skipped() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process([""]);
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.summary, "");
    }

    #[test]
    fn test_unknown_section_is_skipped() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        for line in ["L6&1&AB", "invalid&string", "&&"] {
            let outcome = processor.process([line]);
            assert!(outcome.rows.is_empty(), "line {:?} produced rows", line);
            assert_eq!(outcome.summary, "");
        }
    }

    #[test]
    fn test_section_without_values_is_all_missing() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process(["L3"]);
        assert_eq!(codes_of(&outcome), vec![ErrorCode::MissingField]);
    }

    #[test]
    fn test_extra_values_are_ignored() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        // L3 declares one sub-section; only "b" is consumed.
        let outcome = processor.process(["L3&b&1&Ab&34"]);
        assert_eq!(codes_of(&outcome), vec![ErrorCode::Valid]);
        assert_eq!(outcome.rows[0].given_data_type, Some(DataType::WordCharacters));
        assert_eq!(outcome.rows[0].given_length, Some(1));
    }

    #[test]
    fn test_space_value_is_word_characters() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process(["L3& "]);
        assert_eq!(codes_of(&outcome), vec![ErrorCode::Valid]);
    }

    #[test]
    fn test_punctuation_value_is_type_mismatch() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process(["L3&."]);
        assert_eq!(codes_of(&outcome), vec![ErrorCode::TypeMismatch]);
    }

    #[test]
    fn test_double_mismatch_and_length_exceeded() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        // "ab!" is neither digits nor within one character.
        let outcome = processor.process(["L1&ab!"]);
        assert_eq!(
            codes_of(&outcome),
            vec![
                ErrorCode::TypeAndLengthMismatch,
                ErrorCode::MissingField,
                ErrorCode::MissingField
            ]
        );

        // "12" is digits but one character over.
        let outcome = processor.process(["L1&12"]);
        assert_eq!(codes_of(&outcome)[0], ErrorCode::LengthExceeded);
    }

    #[test]
    fn test_summary_accumulates_per_line() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process(["L3&b", "L3&."]);
        assert_eq!(
            outcome.summary,
            "L31 under L3 is valid\n\n\
             L31 under L3 must be of type word_characters\n\n"
        );
    }

    #[test]
    fn test_skipped_lines_leave_no_summary_trace() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process(["L6&x", "L3&b"]);
        assert_eq!(outcome.summary, "L31 under L3 is valid\n\n");
        assert_eq!(outcome.rows.len(), 1);
    }

    #[test]
    fn test_rows_keep_input_order() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process(["L1&1", "L3&b"]);
        let sections: Vec<&str> = outcome.rows.iter().map(|r| r.section.as_str()).collect();
        assert_eq!(sections, vec!["L1", "L1", "L1", "L3"]);
        let subs: Vec<&str> = outcome.rows.iter().map(|r| r.sub_section.as_str()).collect();
        assert_eq!(subs, vec!["L11", "L12", "L13", "L31"]);
    }

    #[test]
    fn test_issue_count() {
        let (definition, catalog) = fixtures();
        let processor = RecordProcessor::new(&definition, &catalog);

        let outcome = processor.process(["L1&1&AB"]);
        assert_eq!(outcome.issue_count(), 1);
        let outcome = processor.process(["L3&b"]);
        assert_eq!(outcome.issue_count(), 0);
    }

    #[test]
    fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let definition_path = dir.path().join("standard_definition.json");
        let codes_path = dir.path().join("error_codes.json");
        let input_path = dir.path().join("input_file.txt");
        fs::write(&definition_path, DEFINITION_JSON).unwrap();
        fs::write(&codes_path, CODES_JSON).unwrap();
        fs::write(&input_path, "L1&1&AB\nL6&z\n\nL3&abc\n").unwrap();

        let config = RunConfig {
            definition_path,
            codes_path,
            input_path,
            out_dir: dir.path().join("parsed"),
            log_path: dir.path().join("logs").join("summary.log"),
        };

        let outcome = run(&config).unwrap();
        assert_eq!(outcome.rows.len(), 4);
        assert_eq!(
            codes_of(&outcome),
            vec![
                ErrorCode::Valid,
                ErrorCode::Valid,
                ErrorCode::MissingField,
                ErrorCode::LengthExceeded
            ]
        );

        let report = fs::read_to_string(config.report_path()).unwrap();
        let mut lines = report.lines();
        assert_eq!(
            lines.next(),
            Some("Section,Sub-Section,Given DataType,Expected DataType,Given Length,Expected MaxLength,Error Code")
        );
        assert_eq!(lines.clone().count(), 4);
        assert!(report.contains("L1,L13,,digits,,1,E05"));
        assert!(report.contains("L3,L31,word_characters,word_characters,3,2,E03"));

        let summary = fs::read_to_string(config.summary_path()).unwrap();
        assert_eq!(summary, outcome.summary);
        assert!(summary.contains("L31 under L3 must not exceed 2 characters"));
    }

    #[test]
    fn test_run_fails_fast_on_malformed_startup_files() {
        let dir = tempfile::tempdir().unwrap();
        let definition_path = dir.path().join("standard_definition.json");
        let codes_path = dir.path().join("error_codes.json");
        let input_path = dir.path().join("input_file.txt");
        fs::write(&definition_path, "{ not json").unwrap();
        fs::write(&codes_path, CODES_JSON).unwrap();
        fs::write(&input_path, "L3&b\n").unwrap();

        let config = RunConfig {
            definition_path,
            codes_path,
            input_path,
            out_dir: dir.path().join("parsed"),
            log_path: dir.path().join("logs").join("summary.log"),
        };

        assert!(run(&config).is_err());
        assert!(!config.report_path().exists());
    }
}
