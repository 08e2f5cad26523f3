//! Filter for recent-enough movies.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies released in `min_year` or later.
///
/// Movies with an unknown release year are dropped.
pub struct ReleaseYearFilter {
    min_year: i64,
}

impl ReleaseYearFilter {
    /// Create a new ReleaseYearFilter.
    ///
    /// # Arguments
    /// * `min_year` - Earliest release year to keep (inclusive)
    pub fn new(min_year: i64) -> Self {
        Self { min_year }
    }
}

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        movie.release_year.is_some_and(|year| year >= self.min_year)
    }
}
