//! Integration tests for the pipeline.
//!
//! These tests verify that the criteria, filters and pipeline work together
//! on a realistic, loosely-typed collection.

use data_loader::{FieldValue, MovieCollection, MovieRecord};
use pipeline::{filter_movies, FilterCriteria};

fn movie(title: &str, genre: Option<&str>, rating: Option<f64>, year: Option<i64>) -> MovieRecord {
    let mut fields = vec![("title", FieldValue::Text(title.to_string()))];
    if let Some(genre) = genre {
        fields.push(("genre", FieldValue::Text(genre.to_string())));
    }
    if let Some(rating) = rating {
        fields.push(("rating", FieldValue::Float(rating)));
    }
    if let Some(year) = year {
        fields.push(("release_year", FieldValue::Integer(year)));
    }
    MovieRecord::from_fields(fields)
}

fn create_test_collection() -> MovieCollection {
    MovieCollection::from_records(vec![
        movie("Raiders of the Lost Ark", Some("Action/Adventure"), Some(8.4), Some(1981)),
        movie("Airplane!", Some("Comedy"), Some(7.7), Some(1980)),
        movie("Mad Max: Fury Road", Some("action, sci-fi"), Some(8.1), Some(2015)),
        movie("Speed", Some("Action"), Some(7.0), Some(1994)),
        movie("Unknown Action", Some("Action"), None, None),
        movie("No Genre", None, Some(9.0), Some(2010)),
        movie("Knives Out", Some("Mystery"), Some(7.5), Some(2019)),
    ])
}

fn titles<'a>(movies: &[&'a MovieRecord]) -> Vec<&'a str> {
    movies.iter().filter_map(|m| m.title.as_deref()).collect()
}

#[test]
fn test_no_criteria_returns_everything_in_order() {
    let movies = create_test_collection();

    let filtered = filter_movies(&movies, &FilterCriteria::new());

    assert_eq!(filtered.len(), movies.len());
    for (kept, original) in filtered.iter().zip(movies.iter()) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn test_genre_substring_match() {
    let movies = create_test_collection();

    let filtered = filter_movies(&movies, &FilterCriteria::new().with_genre("Action"));

    assert_eq!(
        titles(&filtered),
        vec!["Raiders of the Lost Ark", "Mad Max: Fury Road", "Speed", "Unknown Action"]
    );
    assert!(!titles(&filtered).contains(&"Airplane!"));
}

#[test]
fn test_minimum_rating_is_inclusive() {
    let movies = create_test_collection();

    let filtered = filter_movies(&movies, &FilterCriteria::new().with_min_rating(7.5));
    let kept = titles(&filtered);

    assert!(kept.contains(&"Knives Out"));
    assert!(!kept.contains(&"Speed"));
    // Missing rating never passes a rating filter
    assert!(!kept.contains(&"Unknown Action"));
}

#[test]
fn test_criteria_combine() {
    let movies = create_test_collection();

    let criteria = FilterCriteria::new()
        .with_genre("action")
        .with_min_rating(7.5)
        .with_min_release_year(1990);
    let filtered = filter_movies(&movies, &criteria);

    assert_eq!(titles(&filtered), vec!["Mad Max: Fury Road"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let movies = create_test_collection();
    let criteria = FilterCriteria::new()
        .with_genre("a")
        .with_min_release_year(1981);

    let once = filter_movies(&movies, &criteria);
    let once_collection = MovieCollection::from_records(once.iter().map(|m| (*m).clone()).collect());
    let twice = filter_movies(&once_collection, &criteria);

    assert_eq!(once, twice);
}

#[test]
fn test_no_matches() {
    let movies = create_test_collection();

    let filtered = filter_movies(&movies, &FilterCriteria::new().with_genre("Western"));

    assert!(filtered.is_empty());
    assert_eq!(movies.len(), 7);
}
