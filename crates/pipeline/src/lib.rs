//! Rule-based filtering of a movie collection.
//!
//! This crate provides:
//! - Filter trait and implementations (genre, minimum rating, release year)
//! - FilterPipeline for composing filters
//! - FilterCriteria and `filter_movies`, the entry point used by the CLI
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_movies, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_genre("action")
//!     .with_min_rating(7.5)
//!     .with_min_release_year(2000);
//!
//! for movie in filter_movies(&collection, &criteria) {
//!     println!("{:?}", movie.title);
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod criteria;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use criteria::{filter_movies, FilterCriteria};
