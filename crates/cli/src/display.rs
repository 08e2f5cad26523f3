//! Plain-text table of movie records.

use data_loader::{MovieRecord, types};

const MISSING: &str = "-";

/// Render `movies` as an aligned table.
///
/// Columns: rank, the four well-known fields, then `extra_columns` in the
/// given order.
pub fn render_table(movies: &[&MovieRecord], extra_columns: &[&str]) -> String {
    let mut header: Vec<String> = vec![
        "#".to_string(),
        types::TITLE_FIELD.to_string(),
        types::GENRE_FIELD.to_string(),
        types::RATING_FIELD.to_string(),
        types::RELEASE_YEAR_FIELD.to_string(),
    ];
    header.extend(extra_columns.iter().map(|c| c.to_string()));

    let rows: Vec<Vec<String>> = movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let mut row = vec![
                (i + 1).to_string(),
                cell(movie.title.as_deref()),
                cell(movie.genre.as_deref()),
                cell(movie.rating.map(|r| r.to_string()).as_deref()),
                cell(movie.release_year.map(|y| y.to_string()).as_deref()),
            ];
            row.extend(extra_columns.iter().map(|column| {
                movie
                    .extra
                    .get(*column)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| MISSING.to_string())
            }));
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(rows.iter())
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| format_row(row, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    let line = row
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (value, width))| {
            // Rank is right-aligned, everything else left-aligned
            if col == 0 {
                format!("{:>width$}", value, width = width)
            } else {
                format!("{:<width$}", value, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}
