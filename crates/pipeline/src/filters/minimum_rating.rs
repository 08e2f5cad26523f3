//! Filter to ensure a minimum rating.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies rated at or above `min_rating`.
///
/// The bound is inclusive; unrated movies are dropped.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        movie.rating.is_some_and(|rating| rating >= self.min_rating)
    }
}
