//! Command-line interface for movie-scout.
//!
//! This module provides CLI commands for browsing trending movies, searching,
//! filtering by genre, viewing details and reading back search analytics.

mod commands;

pub use commands::{Cli, Commands, run_command};
