//! Error types for the data-loader crate.
//!
//! Every variant describes why a single input file was skipped. None of them
//! abort a load: the loader collects them into the `LoadReport` and moves on
//! to the next file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading one dataset file
///
/// `FileNotFound` is the "missing file" case; every other variant means the
/// file exists but could not be turned into movie records.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Configured path does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File is not valid JSON
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Workbook could not be opened or read
    #[error("{0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    /// File parsed but does not have the expected layout
    ///
    /// e.g. a JSON object where an array of records was expected,
    /// or a workbook without any worksheet
    #[error("Unexpected layout: {reason}")]
    InvalidShape { reason: String },
}

impl DataLoadError {
    /// True when the file simply wasn't there (as opposed to being unreadable)
    pub fn is_missing_file(&self) -> bool {
        match self {
            DataLoadError::FileNotFound { .. } => true,
            DataLoadError::IoError(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
