//! Filter to keep only movies whose genre mentions the requested text.
//!
//! Genre values are free text ("Action/Adventure", "Crime, Thriller"), so
//! matching is a case-insensitive substring test rather than an exact
//! comparison.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies whose genre contains `needle`, ignoring case.
///
/// Movies without a genre never match.
pub struct GenreFilter {
    needle: String,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `genre` - Text to look for, e.g. "action" matches "Action/Adventure"
    pub fn new(genre: &str) -> Self {
        Self {
            needle: genre.to_lowercase(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        movie
            .genre
            .as_deref()
            .is_some_and(|genre| genre.to_lowercase().contains(&self.needle))
    }
}
