//! Movie Scout - a movie discovery tool.
//!
//! Browses trending movies, searches by title, filters by genre and shows
//! movie details, combining the Trakt catalog with OMDb posters and plots.
//! Searches are debounced, stale results are dropped, and every successful
//! search can be recorded to a local analytics database.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod model;
pub mod search;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("movie_scout=info".parse()?))
        .init();

    cli::run_command(&args)
}
