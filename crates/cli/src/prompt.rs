//! Reading and coercing answers to the interactive prompts.

use std::io::{self, BufRead, Write};

/// Print `prompt`, then read one line of input, trimmed.
///
/// End of input counts as a blank answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Blank means 0. `None` means the text isn't a number.
///
/// `inf` and `nan` parse; no movie can satisfy them.
pub fn parse_min_rating(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok()
}

/// Blank means 0. `None` means the text isn't a whole year.
pub fn parse_min_year(text: &str) -> Option<i64> {
    if text.is_empty() {
        return Some(0);
    }
    text.parse::<i64>().ok()
}
