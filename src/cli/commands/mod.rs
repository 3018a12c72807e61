//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `browse`: trending, search, genre listing and the interactive prompt
//! - `details`: single-movie view
//! - `analytics`: most frequent recorded searches

mod analytics;
mod browse;
mod details;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::config::{self, Config};
use crate::db::{self, SqliteSearchAnalytics};
use crate::enrichment::MovieService;
use crate::model::Movie;

pub use analytics::cmd_top_searches;
pub use browse::{cmd_genres, cmd_interactive, cmd_search, cmd_trending};
pub use details::cmd_details;

/// Movie Scout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Trakt client id
    #[arg(long, global = true, env = "TRAKT_CLIENT_ID", hide_env_values = true)]
    pub trakt_client_id: Option<String>,

    /// OMDb API key
    #[arg(long, global = true, env = "OMDB_API_KEY", hide_env_values = true)]
    pub omdb_api_key: Option<String>,

    /// Search analytics database path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Show trending movies
    Trending {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search by title and/or filter by genre
    Search {
        /// Title search text
        query: Option<String>,
        /// Genre slug (see `genres`)
        #[arg(short, long)]
        genre: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show details for one movie
    Details {
        /// Catalog (Trakt) id or slug
        id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the built-in genre filters
    Genres,
    /// Show the most frequent searches
    TopSearches {
        /// Number of entries to show
        #[arg(short, long, default_value = "5")]
        limit: u32,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Read search input line by line from stdin
    ///
    /// A line `genre:<slug>` sets the genre filter, `genre:` clears it.
    /// Any other line replaces the search text.
    Interactive,
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = load_config(cli);

    match &cli.command {
        Commands::Trending { json } => cmd_trending(&rt, &config, *json),
        Commands::Search { query, genre, json } => cmd_search(
            &rt,
            &config,
            query.as_deref().unwrap_or_default(),
            genre.as_deref(),
            *json,
        ),
        Commands::Details { id, json } => cmd_details(&rt, &config, id, *json),
        Commands::Genres => cmd_genres(),
        Commands::TopSearches { limit, json } => cmd_top_searches(&rt, &config, *limit, *json),
        Commands::Interactive => cmd_interactive(&rt, &config),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Config file merged with flag / environment overrides.
fn load_config(cli: &Cli) -> Config {
    let file = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    file.with_overrides(
        cli.trakt_client_id.as_deref(),
        cli.omdb_api_key.as_deref(),
        cli.db.as_deref(),
    )
}

pub(crate) fn build_service(config: &Config) -> anyhow::Result<Arc<MovieService>> {
    Ok(Arc::new(MovieService::from_config(config)?))
}

/// Open the analytics store.
///
/// Returns `None` when analytics are disabled. Other failures are errors.
pub(crate) async fn open_analytics(
    config: &Config,
) -> anyhow::Result<Option<Arc<SqliteSearchAnalytics>>> {
    if !config.analytics.enabled {
        return Ok(None);
    }
    let path = config
        .analytics
        .resolved_db_path()
        .ok_or(config::ConfigError::NoDataDir)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let analytics = SqliteSearchAnalytics::connect(&db::db_url(Some(&path))).await?;
    info!(db = %path.display(), "Search analytics enabled");
    Ok(Some(Arc::new(analytics)))
}

/// Like [`open_analytics`], but a broken store only disables recording.
pub(crate) async fn open_analytics_best_effort(
    config: &Config,
) -> Option<Arc<SqliteSearchAnalytics>> {
    match open_analytics(config).await {
        Ok(analytics) => analytics,
        Err(e) => {
            warn!(error = %e, "Search analytics unavailable, searches will not be recorded");
            None
        }
    }
}

/// Print a movie list as a table or JSON.
pub(crate) fn print_movies(movies: &[Movie], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        println!("No movies found.");
        return Ok(());
    }

    for movie in movies {
        println!("{}", movie_line(movie));
    }
    println!("\n{} movies", movies.len());
    Ok(())
}

fn movie_line(movie: &Movie) -> String {
    let year = movie.release_date.get(..4).unwrap_or(&movie.release_date);
    let poster = if movie.poster_path.is_some() { "" } else { "  (no poster)" };
    format!(
        "{:>8}  {} ({})  rating {:.1}{}",
        movie.id, movie.title, year, movie.vote_average, poster
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_movie;

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from([
            "movie-scout",
            "search",
            "batman",
            "--genre",
            "action",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Search { query, genre, json } => {
                assert_eq!(query.as_deref(), Some("batman"));
                assert_eq!(genre.as_deref(), Some("action"));
                assert!(json);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_cli_global_overrides() {
        let cli = Cli::try_parse_from([
            "movie-scout",
            "trending",
            "--trakt-client-id",
            "abc",
            "--omdb-api-key",
            "def",
            "--db",
            "/tmp/s.db",
        ])
        .unwrap();

        let config = Config::default().with_overrides(
            cli.trakt_client_id.as_deref(),
            cli.omdb_api_key.as_deref(),
            cli.db.as_deref(),
        );
        assert_eq!(config.trakt_client_id().unwrap(), "abc");
        assert_eq!(config.omdb_api_key().unwrap(), "def");
    }

    #[test]
    fn test_top_searches_default_limit() {
        let cli = Cli::try_parse_from(["movie-scout", "top-searches"]).unwrap();
        assert!(matches!(cli.command, Commands::TopSearches { limit: 5, .. }));
    }

    #[test]
    fn test_movie_line() {
        let line = movie_line(&mock_movie(7, "Heat"));
        assert!(line.contains("Heat (2020)"));
        assert!(line.contains("rating 14.0"));
        assert!(!line.contains("no poster"));

        let bare = Movie {
            poster_path: None,
            release_date: "N/A".to_string(),
            ..mock_movie(8, "Unknown")
        };
        assert!(movie_line(&bare).contains("(N/A)"));
        assert!(movie_line(&bare).contains("no poster"));
    }

    #[tokio::test]
    async fn test_disabled_analytics_opens_nothing() {
        let mut config = Config::default();
        config.analytics.enabled = false;
        assert!(open_analytics(&config).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_analytics_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("a.db");
        let config = Config::default().with_overrides(None, None, Some(&path));

        let analytics = open_analytics(&config).await.unwrap();

        assert!(analytics.is_some());
        assert!(path.exists());
    }
}
