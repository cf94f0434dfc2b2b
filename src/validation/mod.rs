//! Field classification and error code resolution.
//!
//! [`classify`] buckets a raw field value into a [`DataType`];
//! [`resolve`] folds the expected and observed shape of one field into
//! an [`ErrorCode`]. Both are pure and total.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{DataType, ErrorCode};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern"));

static WORD_CHARACTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z ]+$").expect("word characters pattern"));

/// Bucket a raw field value into its observed category.
///
/// Digits means decimal digits only; word characters means letters and
/// spaces only. Everything else, the empty string included, is
/// [`DataType::Others`].
pub fn classify(value: &str) -> DataType {
    if DIGITS.is_match(value) {
        DataType::Digits
    } else if WORD_CHARACTERS.is_match(value) {
        DataType::WordCharacters
    } else {
        DataType::Others
    }
}

/// Fold the expected and observed shape of one field into an error code.
///
/// The branches are exclusion-ordered: the double mismatch is decided
/// first, then full validity, then each single mismatch. A sub-section
/// the record never supplied does not reach this point; it is assigned
/// [`ErrorCode::MissingField`] directly by the processor.
pub fn resolve(
    expected_type: DataType,
    expected_max_length: usize,
    given_type: DataType,
    given_length: usize,
) -> ErrorCode {
    let type_match = expected_type == given_type;
    let length_match = given_length <= expected_max_length;

    if !type_match && !length_match {
        ErrorCode::TypeAndLengthMismatch
    } else if type_match && length_match {
        ErrorCode::Valid
    } else if type_match {
        ErrorCode::LengthExceeded
    } else {
        ErrorCode::TypeMismatch
    }
}
