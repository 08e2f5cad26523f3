mod display;
mod prompt;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use data_loader::{DatasetLayout, MovieCollection};
use session::Session;
use std::io;
use std::path::PathBuf;

/// movie-filter - pick movies from local JSON and XLSX files
#[derive(Parser)]
#[command(name = "movie-filter")]
#[command(about = "Filter movies by genre, minimum rating and release year", long_about = None)]
struct Cli {
    /// Directory holding movies_1.json .. movies_4.json and movies_1.xlsx .. movies_4.xlsx
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let report = MovieCollection::load(&DatasetLayout::conventional(cli.data_dir.clone()));

    let outcome = Session::new(io::stdin().lock(), io::stdout().lock())
        .with_color(!cli.no_color)
        .run(&report)
        .context("Failed to read input or write output")?;

    tracing::debug!("Session finished: {:?}", outcome);
    Ok(())
}
