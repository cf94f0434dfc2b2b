//! Error code templates and message rendering.
//!
//! An error code file is a JSON array of `{code, message_template}`
//! objects. Templates carry two literal identifier tokens, `LXY` for
//! the sub-section key and `LX` for the section key, plus the named
//! slots `{data_type}` and `{max_length}` for the schema expectation:
//!
//! ```json
//! [
//!   {
//!     "code": "E03",
//!     "message_template": "LXY under LX must not exceed {max_length} characters"
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LoadResult;
use crate::logs::log_warning;
use crate::models::{DataType, ErrorCode};

/// One error code with its message template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeTemplate {
    /// Error code (e.g. `E01`).
    pub code: String,
    /// Template with `LXY`/`LX` tokens and `{data_type}`/`{max_length}` slots.
    pub message_template: String,
}

/// All known error code templates.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCatalog {
    templates: Vec<CodeTemplate>,
}

impl MessageCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        let templates: Vec<CodeTemplate> = serde_json::from_str(json)?;
        Ok(Self { templates })
    }

    /// Load a catalog from a file.
    pub fn from_path(path: impl AsRef<Path>) -> LoadResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Template for an exact code match, if any.
    pub fn template_for(&self, code: &str) -> Option<&str> {
        self.templates
            .iter()
            .find(|template| template.code == code)
            .map(|template| template.message_template.as_str())
    }

    /// All templates, in file order.
    pub fn templates(&self) -> &[CodeTemplate] {
        &self.templates
    }

    /// Render the message for one checked sub-section.
    ///
    /// The identifier tokens are substituted first, `LXY` before `LX`
    /// (`LX` is a prefix of `LXY`, so the order is fixed), then the
    /// named slots are filled from the schema expectation. A code with
    /// no template renders as an empty message; a warning lands on the
    /// run log so the gap stays visible without failing the run.
    pub fn render(
        &self,
        code: ErrorCode,
        expected_type: DataType,
        expected_max_length: usize,
        section_key: &str,
        sub_section_key: &str,
    ) -> String {
        let Some(template) = self.template_for(code.as_str()) else {
            log_warning(format!("No message template for code {}", code));
            return String::new();
        };
        template
            .replace("LXY", sub_section_key)
            .replace("LX", section_key)
            .replace("{data_type}", expected_type.as_str())
            .replace("{max_length}", &expected_max_length.to_string())
    }
}
