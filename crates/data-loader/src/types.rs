//! Core domain types for the movie dataset.
//!
//! Input files are loosely structured: any column may be missing, numbers may
//! arrive as text, and column names vary in case. The types here absorb that
//! looseness once so the rest of the system can work with plain `Option`s.

use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Field values
// =============================================================================

/// A single cell / JSON value as read from an input file.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Non-blank text content. Numbers and booleans are not text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric view of the value. Numeric strings ("7.5") are accepted,
    /// non-finite values are not.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            FieldValue::Integer(i) => *i as f64,
            FieldValue::Float(f) => *f,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
            FieldValue::Null | FieldValue::Bool(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Year view of the value
    ///
    /// Spreadsheets store every number as a float, so `1999.0` is a year
    /// but `1999.5` is not.
    pub fn as_year(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| whole_number(trimmed.parse::<f64>().ok()?))
            }
            FieldValue::Float(f) => whole_number(*f),
            FieldValue::Null | FieldValue::Bool(_) => None,
        }
    }
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

// =============================================================================
// MovieRecord
// =============================================================================

/// Canonical names of the fields the filters understand
pub const TITLE_FIELD: &str = "title";
pub const GENRE_FIELD: &str = "genre";
pub const RATING_FIELD: &str = "rating";
pub const RELEASE_YEAR_FIELD: &str = "release_year";

/// Map a raw column name onto its canonical form.
///
/// Matching is case-insensitive and treats spaces and dashes as underscores,
/// so `Genre`, `Release Year` and `release-year` all resolve.
pub fn canonical_field_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// One movie's attributes as loaded from a file.
///
/// Every well-known field is optional; a record without a rating simply never
/// passes a minimum-rating filter. Columns that aren't well-known (or whose
/// value couldn't be interpreted) are kept in `extra` under their original
/// name; a repeated name gets a numeric suffix (`Director`, `Director.1`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieRecord {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub release_year: Option<i64>,
    pub extra: BTreeMap<String, FieldValue>,
}

impl MovieRecord {
    /// Build a record from `(column name, value)` pairs.
    ///
    /// When two columns resolve to the same canonical field (e.g. `Genre` and
    /// `genre`), the first usable value wins and the other is kept in `extra`.
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        let mut record = MovieRecord::default();

        for (name, value) in fields {
            let name = name.into();
            let accepted = match canonical_field_name(&name).as_str() {
                TITLE_FIELD => fill(&mut record.title, value.as_text().map(str::to_string)),
                GENRE_FIELD => fill(&mut record.genre, value.as_text().map(str::to_string)),
                RATING_FIELD => fill(&mut record.rating, value.as_f64()),
                RELEASE_YEAR_FIELD => fill(&mut record.release_year, value.as_year()),
                _ => false,
            };
            if !accepted && !value.is_null() {
                let key = unique_key(&record.extra, name);
                record.extra.insert(key, value);
            }
        }

        record
    }
}

/// `name`, or `name.1`, `name.2`, ... if already taken
fn unique_key(extra: &BTreeMap<String, FieldValue>, name: String) -> String {
    if !extra.contains_key(&name) {
        return name;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{}.{}", name, n);
        if !extra.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Store `value` in `slot` unless the slot is taken or there's nothing to store
fn fill<T>(slot: &mut Option<T>, value: Option<T>) -> bool {
    if slot.is_some() || value.is_none() {
        return false;
    }
    *slot = value;
    true
}

// =============================================================================
// MovieCollection
// =============================================================================

/// The merged set of records for one run, in file-processing order.
///
/// Only the loader appends to a collection; everything downstream gets a
/// shared reference and produces borrowed subsets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieCollection {
    records: Vec<MovieRecord>,
}

impl MovieCollection {
    /// Creates a new, empty collection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    /// Distinct non-empty genre values, in the order they first appear
    pub fn available_genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for genre in self.records.iter().filter_map(|r| r.genre.as_deref()) {
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }
        genres
    }

    /// Names of the extra columns present in any record, sorted
    pub fn extra_columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self
            .records
            .iter()
            .flat_map(|r| r.extra.keys().map(String::as_str))
            .collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }

    pub(crate) fn append(&mut self, records: Vec<MovieRecord>) {
        self.records.extend(records);
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
