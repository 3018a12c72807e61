//! Trending, search, genre and interactive commands.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::{build_service, open_analytics_best_effort, print_movies};
use crate::config::Config;
use crate::db::SearchAnalytics;
use crate::model::{GENRE_FILTERS, find_genre};
use crate::search::{SearchController, SearchOutcome};

/// Show trending movies
pub fn cmd_trending(rt: &Runtime, config: &Config, json: bool) -> anyhow::Result<()> {
    let service = build_service(config)?;
    rt.block_on(async {
        let movies = service.fetch_movies("", None).await?;
        print_movies(&movies, json)
    })
}

/// One-shot search. Goes through the controller so the search is recorded.
pub fn cmd_search(
    rt: &Runtime,
    config: &Config,
    query: &str,
    genre: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(slug) = genre {
        warn_unknown_genre(slug);
    }
    let service = build_service(config)?;

    rt.block_on(async {
        let analytics = open_analytics_best_effort(config)
            .await
            .map(|a| a as Arc<dyn SearchAnalytics>);
        let controller = SearchController::new(service, analytics, std::time::Duration::ZERO);

        match controller.submit(query, genre).await {
            SearchOutcome::Committed(movies) => print_movies(&movies, json),
            SearchOutcome::Failed(e) => Err(e.into()),
            SearchOutcome::Reset => {
                eprintln!("Nothing to search for. Give a query or --genre, or use `trending`.");
                Ok(())
            }
            SearchOutcome::Superseded => Ok(()),
        }
    })
}

/// List the built-in genre filters
pub fn cmd_genres() -> anyhow::Result<()> {
    for genre in GENRE_FILTERS {
        println!("{:<12} {}", genre.slug, genre.name);
    }
    Ok(())
}

/// Read search input from stdin, one line per edit.
///
/// Each line supersedes the pending search, exactly as a keystroke would, and
/// only committed results are printed.
pub fn cmd_interactive(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    let service = build_service(config)?;

    rt.block_on(async {
        let analytics = open_analytics_best_effort(config)
            .await
            .map(|a| a as Arc<dyn SearchAnalytics>);
        let controller = Arc::new(SearchController::new(
            service,
            analytics,
            config.search.debounce(),
        ));

        println!("Type to search. `genre:<slug>` sets a genre, `genre:` clears it. Ctrl+D to quit.");

        let mut query = String::new();
        let mut genre: Option<String> = None;
        let mut tasks = JoinSet::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            match parse_line(&line) {
                InputLine::Genre(slug) => {
                    if let Some(slug) = &slug {
                        warn_unknown_genre(slug);
                    }
                    genre = slug;
                }
                InputLine::Query(text) => query = text,
            }

            let controller = Arc::clone(&controller);
            let (query, genre) = (query.clone(), genre.clone());
            tasks.spawn(async move {
                let outcome = controller.submit(&query, genre.as_deref()).await;
                report(&outcome);
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "Search task failed");
            }
        }
        Ok::<_, anyhow::Error>(())
    })
}

fn report(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Committed(movies) => {
            if let Err(e) = print_movies(movies, false) {
                eprintln!("Failed to print results: {}", e);
            }
        }
        SearchOutcome::Failed(e) => eprintln!("Error: {}", e),
        SearchOutcome::Reset => println!("(cleared)"),
        SearchOutcome::Superseded => debug!("Superseded search dropped"),
    }
}

#[derive(Debug, PartialEq)]
enum InputLine {
    /// `genre:<slug>`; `None` clears the filter
    Genre(Option<String>),
    Query(String),
}

fn parse_line(line: &str) -> InputLine {
    match line.trim_start().strip_prefix("genre:") {
        Some(slug) => {
            let slug = slug.trim();
            InputLine::Genre((!slug.is_empty()).then(|| slug.to_string()))
        }
        None => InputLine::Query(line.to_string()),
    }
}

fn warn_unknown_genre(slug: &str) {
    if find_genre(slug).is_none() {
        eprintln!(
            "Warning: '{}' is not a built-in genre (see `genres`); searching anyway.",
            slug
        );
    }
}
