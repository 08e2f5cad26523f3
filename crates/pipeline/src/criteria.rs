//! User-facing filter criteria.
//!
//! `FilterCriteria` holds the three optional constraints a user can ask
//! for. `filter_movies` turns them into a `FilterPipeline` and runs it.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, MinimumRatingFilter, ReleaseYearFilter};
use data_loader::{MovieCollection, MovieRecord};

/// Optional genre / rating / year constraints.
///
/// A blank genre and a zero rating or year impose no constraint, the same as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    pub min_release_year: Option<i64>,
}

impl FilterCriteria {
    /// No constraints at all
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_min_release_year(mut self, year: i64) -> Self {
        self.min_release_year = Some(year);
        self
    }

    fn active_genre(&self) -> Option<&str> {
        self.genre.as_deref().map(str::trim).filter(|g| !g.is_empty())
    }

    fn active_min_rating(&self) -> Option<f64> {
        self.min_rating.filter(|r| *r != 0.0)
    }

    fn active_min_release_year(&self) -> Option<i64> {
        self.min_release_year.filter(|y| *y != 0)
    }

    /// True when applying these criteria would keep every movie
    pub fn is_unconstrained(&self) -> bool {
        self.active_genre().is_none()
            && self.active_min_rating().is_none()
            && self.active_min_release_year().is_none()
    }

    /// Build the pipeline for these criteria: genre, then rating, then year
    pub fn to_pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if let Some(genre) = self.active_genre() {
            pipeline = pipeline.add_filter(GenreFilter::new(genre));
        }
        if let Some(min_rating) = self.active_min_rating() {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }
        if let Some(year) = self.active_min_release_year() {
            pipeline = pipeline.add_filter(ReleaseYearFilter::new(year));
        }
        pipeline
    }
}

/// Movies from `movies` that satisfy every constraint in `criteria`.
///
/// The result borrows from `movies` and keeps its order.
pub fn filter_movies<'a>(
    movies: &'a MovieCollection,
    criteria: &FilterCriteria,
) -> Vec<&'a MovieRecord> {
    let pipeline = criteria.to_pipeline();
    tracing::debug!(
        "Filtering {} movies with {:?}",
        movies.len(),
        pipeline.filter_names()
    );
    pipeline.apply(movies)
}
