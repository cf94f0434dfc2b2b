//! Run log for pipeline diagnostics.
//!
//! A process-wide sink collects entries during a run and appends them
//! to a log file, one line per entry. [`init_file`] installs the file
//! and truncates any previous contents; when no file is installed
//! (library use, tests), entries are dropped.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Log level of a run log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Label written to the log file.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into() }
    }
}

/// Global run log sink
pub static RUN_LOG: Lazy<RunLog> = Lazy::new(RunLog::new);

/// Appends log entries to the installed log file.
pub struct RunLog {
    sink: Mutex<Option<BufWriter<File>>>,
}

impl RunLog {
    pub fn new() -> Self {
        Self { sink: Mutex::new(None) }
    }

    /// Install a log file, truncating any previous contents.
    ///
    /// The parent directory is created if missing.
    pub fn init_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        if let Ok(mut sink) = self.sink.lock() {
            *sink = Some(BufWriter::new(file));
        }
        Ok(())
    }

    /// Append an entry to the installed file, if any.
    ///
    /// Write failures are ignored; the log is not part of the
    /// functional contract.
    pub fn log(&self, entry: LogEntry) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if let Some(writer) = sink.as_mut() {
            let timestamp = chrono::Utc::now().to_rfc3339();
            let _ = writeln!(writer, "{} {} {}", timestamp, entry.level.label(), entry.message);
            let _ = writer.flush();
        }
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    RUN_LOG.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    RUN_LOG.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    RUN_LOG.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    RUN_LOG.log(LogEntry::error(msg));
}

/// Install the process-wide run log file (see [`RunLog::init_file`]).
pub fn init_file(path: impl AsRef<Path>) -> std::io::Result<()> {
    RUN_LOG.init_file(path)
}
