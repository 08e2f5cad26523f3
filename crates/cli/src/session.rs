//! The interactive session: report what loaded, ask for criteria, print
//! the matches.
//!
//! Generic over the input and output streams so the whole conversation can
//! be driven from a byte slice in tests.

use crate::display::render_table;
use crate::prompt::{ask, parse_min_rating, parse_min_year};
use colored::Colorize;
use data_loader::LoadReport;
use pipeline::{filter_movies, FilterCriteria};
use std::io::{self, BufRead, Write};

pub const NO_DATA_MESSAGE: &str = "No movie data found. Please check the dataset files.";
pub const NO_MATCHES_MESSAGE: &str = "No movies found matching your criteria.";
pub const RESULTS_HEADING: &str = "Recommended movies:";

const GENRE_PROMPT: &str = "Enter a genre (or leave blank to skip): ";
const RATING_PROMPT: &str = "Enter a minimum rating (or leave blank to skip): ";
const YEAR_PROMPT: &str = "Enter a minimum release year (or leave blank to skip): ";

/// How a session ended. Every variant is a normal exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing could be loaded; no prompts were shown
    NoData,
    NoMatches,
    Matches(usize),
}

pub struct Session<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Run one session against an already-loaded dataset.
    ///
    /// Only I/O errors on the streams themselves are returned.
    pub fn run(&mut self, report: &LoadReport) -> io::Result<Outcome> {
        for line in report.diagnostics() {
            writeln!(self.output, "{}", line)?;
        }

        let movies = &report.collection;
        if movies.is_empty() {
            writeln!(self.output, "{}", NO_DATA_MESSAGE)?;
            return Ok(Outcome::NoData);
        }

        writeln!(
            self.output,
            "Available genres: {}",
            movies.available_genres().join(", ")
        )?;

        let criteria = self.ask_criteria()?;
        tracing::debug!("Criteria: {:?}", criteria);

        let matches = filter_movies(movies, &criteria);
        if matches.is_empty() {
            writeln!(self.output, "{}", NO_MATCHES_MESSAGE)?;
            return Ok(Outcome::NoMatches);
        }

        let heading = if self.color {
            RESULTS_HEADING.bold().green().to_string()
        } else {
            RESULTS_HEADING.to_string()
        };
        writeln!(self.output, "{}", heading)?;
        writeln!(
            self.output,
            "{}",
            render_table(&matches, &movies.extra_columns())
        )?;

        Ok(Outcome::Matches(matches.len()))
    }

    fn ask_criteria(&mut self) -> io::Result<FilterCriteria> {
        let genre = ask(&mut self.input, &mut self.output, GENRE_PROMPT)?;

        let rating_text = ask(&mut self.input, &mut self.output, RATING_PROMPT)?;
        let min_rating = match parse_min_rating(&rating_text) {
            Some(rating) => rating,
            None => {
                tracing::warn!("Invalid rating input: {:?}", rating_text);
                self.warn("Invalid rating. Defaulting to 0.")?;
                0.0
            }
        };

        let year_text = ask(&mut self.input, &mut self.output, YEAR_PROMPT)?;
        let min_year = match parse_min_year(&year_text) {
            Some(year) => year,
            None => {
                tracing::warn!("Invalid year input: {:?}", year_text);
                self.warn("Invalid year. Defaulting to 0.")?;
                0
            }
        };

        let mut criteria = FilterCriteria::new()
            .with_min_rating(min_rating)
            .with_min_release_year(min_year);
        if !genre.is_empty() {
            criteria = criteria.with_genre(genre);
        }
        Ok(criteria)
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", message.yellow())
        } else {
            writeln!(self.output, "{}", message)
        }
    }
}
