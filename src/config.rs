//! Run configuration.
//!
//! [`RunConfig`] names every file a run touches. It is constructed
//! once at startup and passed by reference into the pipeline; nothing
//! else carries configuration state. The log file it names is
//! installed separately by the caller (see [`crate::logs::init_file`]).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadResult;
use crate::render::MessageCatalog;
use crate::schema::StandardDefinition;

/// Default standard definition file.
pub const DEFAULT_DEFINITION_FILE: &str = "standard_definition.json";

/// Default error code file.
pub const DEFAULT_CODES_FILE: &str = "error_codes.json";

/// Default input records file.
pub const DEFAULT_INPUT_FILE: &str = "input_file.txt";

/// Default directory for the report and summary.
pub const DEFAULT_OUT_DIR: &str = "parsed";

/// Default run log file.
pub const DEFAULT_LOG_FILE: &str = "logs/summary.log";

/// Paths for one validation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Standard definition file (JSON).
    pub definition_path: PathBuf,
    /// Error code template file (JSON).
    pub codes_path: PathBuf,
    /// Input records file, one `&`-delimited record per line.
    pub input_path: PathBuf,
    /// Directory receiving `report.csv` and `summary.txt`.
    pub out_dir: PathBuf,
    /// Run log file.
    pub log_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            definition_path: DEFAULT_DEFINITION_FILE.into(),
            codes_path: DEFAULT_CODES_FILE.into(),
            input_path: DEFAULT_INPUT_FILE.into(),
            out_dir: DEFAULT_OUT_DIR.into(),
            log_path: DEFAULT_LOG_FILE.into(),
        }
    }
}

impl RunConfig {
    /// Report CSV destination.
    pub fn report_path(&self) -> PathBuf {
        self.out_dir.join("report.csv")
    }

    /// Summary text destination.
    pub fn summary_path(&self) -> PathBuf {
        self.out_dir.join("summary.txt")
    }

    /// Load the standard definition, the code templates and the input
    /// lines.
    ///
    /// Any unreadable or malformed file fails the run here, before
    /// processing starts.
    pub fn load(&self) -> LoadResult<LoadedInputs> {
        let definition = StandardDefinition::from_path(&self.definition_path)?;
        let catalog = MessageCatalog::from_path(&self.codes_path)?;
        let lines = read_lines(&self.input_path)?;
        Ok(LoadedInputs {
            definition,
            catalog,
            lines,
        })
    }
}

/// Parsed startup files, ready for processing.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub definition: StandardDefinition,
    pub catalog: MessageCatalog,
    /// Input lines without terminators.
    pub lines: Vec<String>,
}

fn read_lines(path: &Path) -> LoadResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}
