//! Parsers for the two input formats.
//!
//! - JSON: a top-level array of objects, one object per movie
//! - XLSX: the first worksheet, header row first, one row per movie
//!
//! Both produce `Vec<MovieRecord>`; neither knows about the other files in
//! the dataset. Skipping a bad file is the loader's decision.

use crate::error::{DataLoadError, Result};
use crate::types::{FieldValue, MovieRecord};
use calamine::{Data, Range, Reader, Xlsx};
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Open a dataset file, reporting a missing file as `FileNotFound`
fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DataLoadError::IoError(e),
    })
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Parse a `movies_N.json` file
///
/// Expected layout:
///
/// ```json
/// [
///   { "title": "Heat", "genre": "Crime", "rating": 8.3, "release_year": 1995 },
///   ...
/// ]
/// ```
pub fn parse_json_file(path: &Path) -> Result<Vec<MovieRecord>> {
    let reader = BufReader::new(open(path)?);
    let root: JsonValue = serde_json::from_reader(reader)?;
    records_from_json(root)
}

/// Turn a parsed JSON document into records
pub fn records_from_json(root: JsonValue) -> Result<Vec<MovieRecord>> {
    let items = match root {
        JsonValue::Array(items) => items,
        other => {
            return Err(DataLoadError::InvalidShape {
                reason: format!("expected a JSON array of movies, found {}", json_kind(&other)),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            JsonValue::Object(obj) => Ok(MovieRecord::from_fields(
                obj.into_iter().map(|(key, val)| (key, json_to_field(val))),
            )),
            other => Err(DataLoadError::InvalidShape {
                reason: format!("element {} is {}, not an object", i, json_kind(&other)),
            }),
        })
        .collect()
}

fn json_to_field(val: JsonValue) -> FieldValue {
    match val {
        JsonValue::Null => FieldValue::Null,
        JsonValue::Bool(b) => FieldValue::Bool(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                FieldValue::Float(f)
            } else {
                FieldValue::Text(n.to_string())
            }
        }
        JsonValue::String(s) => FieldValue::Text(s),
        // ["Action", "Sci-Fi"] reads as "Action, Sci-Fi"
        JsonValue::Array(items) => {
            let parts: Vec<String> = items
                .into_iter()
                .map(json_to_field)
                .filter(|v| !v.is_null())
                .map(|v| v.to_string())
                .collect();
            if parts.is_empty() {
                FieldValue::Null
            } else {
                FieldValue::Text(parts.join(", "))
            }
        }
        obj @ JsonValue::Object(_) => FieldValue::Text(obj.to_string()),
    }
}

fn json_kind(val: &JsonValue) -> &'static str {
    match val {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// XLSX
// ---------------------------------------------------------------------------

/// Parse a `movies_N.xlsx` workbook (first worksheet only)
pub fn parse_spreadsheet_file(path: &Path) -> Result<Vec<MovieRecord>> {
    let reader = BufReader::new(open(path)?);
    let mut workbook: Xlsx<_> = Xlsx::new(reader)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DataLoadError::InvalidShape {
            reason: "workbook has no worksheets".to_string(),
        })??;

    Ok(records_from_range(&range))
}

/// Turn a worksheet range into records.
///
/// The first row is the header. Blank header cells get a positional name
/// (`column_3`), blank rows are skipped.
pub fn records_from_range(range: &Range<Data>) -> Vec<MovieRecord> {
    let mut rows = range.rows();

    let header: Vec<String> = match rows.next() {
        Some(cells) => cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| match cell_to_field(cell) {
                FieldValue::Null => format!("column_{}", idx + 1),
                other => other.to_string().trim().to_string(),
            })
            .collect(),
        None => return Vec::new(),
    };

    rows.filter_map(|cells| {
        let fields: Vec<(String, FieldValue)> = header
            .iter()
            .cloned()
            .zip(cells.iter().map(cell_to_field))
            .collect();

        if fields.iter().all(|(_, v)| v.is_null()) {
            return None;
        }
        Some(MovieRecord::from_fields(fields))
    })
    .collect()
}

fn cell_to_field(cell: &Data) -> FieldValue {
    match cell {
        Data::Empty | Data::Error(_) => FieldValue::Null,
        Data::Int(i) => FieldValue::Integer(*i),
        Data::Float(f) => FieldValue::Float(*f),
        Data::Bool(b) => FieldValue::Bool(*b),
        Data::String(s) if s.trim().is_empty() => FieldValue::Null,
        Data::String(s) => FieldValue::Text(s.clone()),
        other => FieldValue::Text(other.to_string()),
    }
}
