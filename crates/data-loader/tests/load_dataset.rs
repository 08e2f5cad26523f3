//! Integration tests for loading a dataset directory.
//!
//! These tests build small datasets in a temporary directory and check
//! that the merged collection matches the files that could be read.

use data_loader::{DatasetLayout, FieldValue, MovieCollection, SourceFormat};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Write a one-sheet workbook; `None` cells are left empty
fn write_workbook(dir: &Path, name: &str, header: &[&str], rows: &[Vec<Option<FieldValue>>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, title) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *title).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        let r = r as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Some(FieldValue::Text(s)) => {
                    sheet.write_string(r, col, s.as_str()).unwrap();
                }
                Some(FieldValue::Float(f)) => {
                    sheet.write_number(r, col, *f).unwrap();
                }
                Some(FieldValue::Integer(i)) => {
                    sheet.write_number(r, col, *i as f64).unwrap();
                }
                _ => {}
            }
        }
    }

    workbook.save(dir.join(name)).unwrap();
}

fn text(s: &str) -> Option<FieldValue> {
    Some(FieldValue::Text(s.to_string()))
}

#[test]
fn test_collection_size_is_sum_of_parsed_files() {
    let dir = tempfile::tempdir().unwrap();

    write(
        dir.path(),
        "movies_1.json",
        r#"[
            {"title": "Heat", "genre": "Crime", "rating": 8.3, "release_year": 1995},
            {"title": "Clue", "genre": "Comedy", "rating": 7.2, "release_year": 1985}
        ]"#,
    );
    // movies_2.json is missing
    write(dir.path(), "movies_3.json", "not json at all");
    write(
        dir.path(),
        "movies_4.json",
        r#"[{"Title": "Alien", "Genre": "Horror/Sci-Fi", "Rating": 8.5, "Release_Year": 1979}]"#,
    );
    write(dir.path(), "movies_1.xlsx", "definitely not a workbook");

    let report = MovieCollection::load(&DatasetLayout::conventional(dir.path()));

    let loaded_rows: usize = report.loaded.iter().map(|f| f.rows).sum();
    assert_eq!(report.collection.len(), loaded_rows);
    assert_eq!(report.collection.len(), 3);

    assert_eq!(report.loaded.len(), 2);
    assert_eq!(report.skipped.len(), 6);

    let malformed: Vec<_> = report
        .skipped
        .iter()
        .filter(|s| !s.error.is_missing_file())
        .collect();
    assert_eq!(malformed.len(), 2);
    assert_eq!(malformed[0].format, SourceFormat::Json);
    assert_eq!(malformed[1].format, SourceFormat::Spreadsheet);
}

#[test]
fn test_records_keep_file_order() {
    let dir = tempfile::tempdir().unwrap();

    write(dir.path(), "movies_2.json", r#"[{"title": "B1"}, {"title": "B2"}]"#);
    write(dir.path(), "movies_1.json", r#"[{"title": "A1"}]"#);
    write(dir.path(), "movies_4.json", r#"[{"title": "D1"}]"#);

    let report = MovieCollection::load(&DatasetLayout::conventional(dir.path()));

    let titles: Vec<&str> = report
        .collection
        .iter()
        .filter_map(|r| r.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["A1", "B1", "B2", "D1"]);
}

#[test]
fn test_duplicates_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let movie = r#"[{"title": "Heat", "genre": "Crime"}]"#;

    write(dir.path(), "movies_1.json", movie);
    write(dir.path(), "movies_2.json", movie);

    let report = MovieCollection::load(&DatasetLayout::conventional(dir.path()));

    assert_eq!(report.collection.len(), 2);
    assert_eq!(report.collection.records()[0], report.collection.records()[1]);
}

#[test]
fn test_diagnostics_follow_load_order() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "movies_1.json", "{}");

    let report = MovieCollection::load(&DatasetLayout::conventional(dir.path()));
    let diagnostics: Vec<String> = report.diagnostics().collect();

    assert_eq!(diagnostics.len(), 8);
    assert!(diagnostics[0].starts_with("Error loading "));
    assert!(diagnostics[0].contains("expected a JSON array"));
    assert!(diagnostics[1].starts_with("File not found: "));
    assert!(diagnostics[7].ends_with("movies_4.xlsx"));
    assert!(report.collection.is_empty());
}

#[test]
fn test_spreadsheets_load_after_json() {
    let dir = tempfile::tempdir().unwrap();

    write(
        dir.path(),
        "movies_2.json",
        r#"[{"title": "Jaws", "genre": "Thriller", "rating": 8.1, "release_year": 1975}]"#,
    );
    write_workbook(
        dir.path(),
        "movies_1.xlsx",
        &["Title", "Genre", "Rating", "Release Year", "Director"],
        &[
            vec![
                text("Alien"),
                text("Horror"),
                Some(FieldValue::Float(8.5)),
                Some(FieldValue::Integer(1979)),
                text("Scott"),
            ],
            vec![None, None, None, None, None],
            vec![text("Clue"), None, None, None, None],
        ],
    );
    write_workbook(dir.path(), "movies_2.xlsx", &["Title", "Genre"], &[]);

    let report = MovieCollection::load(&DatasetLayout::conventional(dir.path()));

    let titles: Vec<&str> = report
        .collection
        .iter()
        .filter_map(|r| r.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["Jaws", "Alien", "Clue"]);

    let rows: Vec<(SourceFormat, usize)> = report.loaded.iter().map(|f| (f.format, f.rows)).collect();
    assert_eq!(
        rows,
        vec![
            (SourceFormat::Json, 1),
            (SourceFormat::Spreadsheet, 2),
            (SourceFormat::Spreadsheet, 0),
        ]
    );
    let loaded_rows: usize = report.loaded.iter().map(|f| f.rows).sum();
    assert_eq!(report.collection.len(), loaded_rows);

    let alien = &report.collection.records()[1];
    assert_eq!(alien.genre.as_deref(), Some("Horror"));
    assert_eq!(alien.rating, Some(8.5));
    assert_eq!(alien.release_year, Some(1979));
    assert_eq!(alien.extra.get("Director"), Some(&FieldValue::Text("Scott".to_string())));

    let clue = &report.collection.records()[2];
    assert_eq!(clue.genre, None);
    assert_eq!(clue.rating, None);
}
