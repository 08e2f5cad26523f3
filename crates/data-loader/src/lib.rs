//! # Data Loader Crate
//!
//! This crate loads movie records from a directory of JSON and XLSX files and
//! merges them into a single `MovieCollection`.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, FieldValue, MovieCollection)
//! - **parser**: Parse `.json` and `.xlsx` files into records
//! - **loader**: Dataset layout and the best-effort multi-file load
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DatasetLayout, MovieCollection};
//!
//! let report = MovieCollection::load(&DatasetLayout::conventional("data"));
//! for line in report.diagnostics() {
//!     println!("{}", line);
//! }
//!
//! println!("Loaded {} movies", report.collection.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use loader::{
    DatasetLayout, LoadReport, LoadedFile, SkippedFile, SourceFormat, FILES_PER_FORMAT,
};
pub use types::{FieldValue, MovieCollection, MovieRecord};
