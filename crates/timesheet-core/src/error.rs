//! Errors surfaced by a timesheet run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a run.
///
/// Malformed timesheet lines are never errors; they are skipped or bucketed
/// under `Other` by the parser.
#[derive(Debug, Error)]
pub enum TimesheetError {
    /// The timesheet file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The timesheet file exists but could not be opened.
    #[error("Unable to open file: {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading lines or writing the report failed mid-run.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
