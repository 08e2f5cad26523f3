//! Loading the whole dataset from a directory.
//!
//! The dataset is a fixed list of files: JSON files first, then
//! spreadsheets. Files are read one after another; a missing or malformed
//! file is recorded in the report and skipped so that partial data still
//! produces a usable collection.

use crate::error::DataLoadError;
use crate::parser;
use crate::types::{MovieCollection, MovieRecord};
use std::fmt;
use std::path::{Path, PathBuf};

/// How many files of each format the conventional layout names
pub const FILES_PER_FORMAT: usize = 4;

// =============================================================================
// Layout
// =============================================================================

/// Where the dataset files live and in which order they are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    pub data_dir: PathBuf,
    pub json_files: Vec<PathBuf>,
    pub spreadsheet_files: Vec<PathBuf>,
}

impl DatasetLayout {
    /// `movies_1.json` .. `movies_4.json`, then `movies_1.xlsx` .. `movies_4.xlsx`
    pub fn conventional(data_dir: impl Into<PathBuf>) -> Self {
        let json = (1..=FILES_PER_FORMAT).map(|i| format!("movies_{}.json", i));
        let sheets = (1..=FILES_PER_FORMAT).map(|i| format!("movies_{}.xlsx", i));
        Self::new(data_dir, json, sheets)
    }

    /// Custom file lists, relative to `data_dir`
    pub fn new<J, S>(data_dir: impl Into<PathBuf>, json_files: J, spreadsheet_files: S) -> Self
    where
        J: IntoIterator,
        J::Item: AsRef<Path>,
        S: IntoIterator,
        S::Item: AsRef<Path>,
    {
        let data_dir = data_dir.into();
        Self {
            json_files: json_files.into_iter().map(|f| data_dir.join(f)).collect(),
            spreadsheet_files: spreadsheet_files
                .into_iter()
                .map(|f| data_dir.join(f))
                .collect(),
            data_dir,
        }
    }
}

// =============================================================================
// Report
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Spreadsheet,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Json => write!(f, "JSON"),
            SourceFormat::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

/// A file that contributed rows to the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub format: SourceFormat,
    pub rows: usize,
}

/// A file that was skipped, and why
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub format: SourceFormat,
    pub error: DataLoadError,
}

impl SkippedFile {
    /// Human-readable line describing the skip
    pub fn diagnostic(&self) -> String {
        if self.error.is_missing_file() {
            format!("File not found: {}", self.path.display())
        } else {
            format!("Error loading {}: {}", self.path.display(), self.error)
        }
    }
}

/// Outcome of loading a dataset
#[derive(Debug, Default)]
pub struct LoadReport {
    pub collection: MovieCollection,
    pub loaded: Vec<LoadedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl LoadReport {
    /// Diagnostics for every skipped file, in load order
    pub fn diagnostics(&self) -> impl Iterator<Item = String> + '_ {
        self.skipped.iter().map(SkippedFile::diagnostic)
    }

    fn record(
        &mut self,
        path: &Path,
        format: SourceFormat,
        outcome: crate::Result<Vec<MovieRecord>>,
    ) {
        match outcome {
            Ok(records) => {
                tracing::debug!("Loaded {} rows from {}", records.len(), path.display());
                self.loaded.push(LoadedFile {
                    path: path.to_path_buf(),
                    format,
                    rows: records.len(),
                });
                self.collection.append(records);
            }
            Err(error) => {
                tracing::warn!("Skipping {} file {}: {}", format, path.display(), error);
                self.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    format,
                    error,
                });
            }
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

impl MovieCollection {
    /// Load every file named by `layout` into one collection.
    ///
    /// Never fails: unreadable files end up in `LoadReport::skipped` and the
    /// collection holds whatever the other files provided (possibly nothing).
    pub fn load(layout: &DatasetLayout) -> LoadReport {
        tracing::info!("Loading movie dataset from {}", layout.data_dir.display());

        let mut report = LoadReport::default();

        for path in &layout.json_files {
            report.record(path, SourceFormat::Json, parser::parse_json_file(path));
        }
        for path in &layout.spreadsheet_files {
            report.record(
                path,
                SourceFormat::Spreadsheet,
                parser::parse_spreadsheet_file(path),
            );
        }

        tracing::info!(
            "Loaded {} movies from {} files ({} skipped)",
            report.collection.len(),
            report.loaded.len(),
            report.skipped.len()
        );
        report
    }
}
