//! Standard definition loading and section lookup.
//!
//! A standard definition file is a JSON array of sections. Each
//! section declares the ordered sub-sections a record of that kind
//! must carry, with the expected data type and maximum length of each:
//!
//! ```json
//! [
//!   {
//!     "key": "L1",
//!     "sub_sections": [
//!       { "key": "L11", "data_type": "digits", "max_length": 1 }
//!     ]
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LoadResult;
use crate::models::DataType;

/// Expected shape of one positional field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubSectionDef {
    /// Sub-section identifier (e.g. `L11`).
    pub key: String,
    /// Expected category of the value.
    pub data_type: DataType,
    /// Maximum number of characters allowed.
    pub max_length: usize,
}

/// One section with its ordered sub-sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionDef {
    /// Section identifier, matched against the first field of a record.
    pub key: String,
    /// Sub-sections in the positional order of the record's fields.
    pub sub_sections: Vec<SubSectionDef>,
}

/// The full standard definition, indexed by section key.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardDefinition {
    sections: Vec<SectionDef>,
}

impl StandardDefinition {
    /// Parse a definition from a JSON string.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        let sections: Vec<SectionDef> = serde_json::from_str(json)?;
        Ok(Self { sections })
    }

    /// Load a definition from a file.
    pub fn from_path(path: impl AsRef<Path>) -> LoadResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Sub-sections of the first section whose key matches exactly.
    ///
    /// Section keys are expected to be unique; duplicates are not
    /// rejected and the first match wins.
    pub fn lookup(&self, section_key: &str) -> Option<&[SubSectionDef]> {
        self.sections
            .iter()
            .find(|section| section.key == section_key)
            .map(|section| section.sub_sections.as_slice())
    }

    /// All sections, in file order.
    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }
}
