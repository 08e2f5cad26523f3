//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a movie collection.

use data_loader::MovieRecord;

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// Filters work on borrowed records: the collection they came from is never
/// modified, and the output is a subset of the input in the same order.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single movie passes this filter
    fn matches(&self, movie: &MovieRecord) -> bool;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership of the list, not the records)
    ///
    /// # Returns
    /// The movies that passed, in their original order
    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie))
            .collect()
    }
}
