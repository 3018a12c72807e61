//! Debounced search controller.
//!
//! Holds the "pending async value" for the search screen: the current inputs,
//! the last committed movies, a loading flag and the last error. Every input
//! change bumps a generation counter; a fetch only commits if its generation
//! is still current when it finishes, so stale responses never overwrite
//! newer state. In-flight network calls are not cancelled, only ignored.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::catalog::CatalogError;
use crate::db::SearchAnalytics;
use crate::enrichment::MovieService;
use crate::model::Movie;

/// Snapshot of the controller state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub genre: Option<String>,
    pub movies: Vec<Movie>,
    pub loading: bool,
    pub error: Option<String>,
    /// Incremented on every submit, refetch and reset
    pub generation: u64,
}

/// What happened to one `submit` / `refetch` call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Results were committed to state
    Committed(Vec<Movie>),
    /// The catalog failed; the error was committed to state
    Failed(CatalogError),
    /// A newer input arrived first; nothing was committed
    Superseded,
    /// Empty input; state was cleared
    Reset,
}

pub struct SearchController {
    service: Arc<MovieService>,
    analytics: Option<Arc<dyn SearchAnalytics>>,
    debounce: Duration,
    state: RwLock<SearchState>,
}

impl SearchController {
    pub fn new(
        service: Arc<MovieService>,
        analytics: Option<Arc<dyn SearchAnalytics>>,
        debounce: Duration,
    ) -> Self {
        Self {
            service,
            analytics,
            debounce,
            state: RwLock::new(SearchState::default()),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> SearchState {
        self.state.read().clone()
    }

    /// Submit new inputs.
    ///
    /// Waits out the debounce period, then fetches unless a newer submit,
    /// refetch or reset has happened in the meantime. An empty query with no
    /// genre clears the state instead of fetching.
    pub async fn submit(&self, query: &str, genre: Option<&str>) -> SearchOutcome {
        let genre = genre.map(str::trim).filter(|g| !g.is_empty());

        let generation = {
            let mut state = self.state.write();
            state.generation += 1;
            state.query = query.to_string();
            state.genre = genre.map(String::from);
            if query.trim().is_empty() && genre.is_none() {
                state.movies.clear();
                state.error = None;
                state.loading = false;
                return SearchOutcome::Reset;
            }
            state.generation
        };

        tokio::time::sleep(self.debounce).await;

        if !self.is_current(generation) {
            tracing::debug!(generation, "Search superseded during debounce");
            return SearchOutcome::Superseded;
        }

        self.run(generation).await
    }

    /// Re-run the last inputs immediately, without debouncing.
    pub async fn refetch(&self) -> SearchOutcome {
        let generation = {
            let mut state = self.state.write();
            state.generation += 1;
            state.generation
        };
        self.run(generation).await
    }

    /// Clear results and error, superseding anything in flight.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.generation += 1;
        state.movies.clear();
        state.error = None;
        state.loading = false;
    }

    fn is_current(&self, generation: u64) -> bool {
        self.state.read().generation == generation
    }

    async fn run(&self, generation: u64) -> SearchOutcome {
        let (query, genre) = {
            let mut state = self.state.write();
            if state.generation != generation {
                return SearchOutcome::Superseded;
            }
            state.loading = true;
            state.error = None;
            (state.query.clone(), state.genre.clone())
        };

        let result = self.service.fetch_movies(&query, genre.as_deref()).await;

        {
            let mut state = self.state.write();
            if state.generation != generation {
                tracing::debug!(generation, current = state.generation, "Discarding stale search result");
                return SearchOutcome::Superseded;
            }
            state.loading = false;
            match &result {
                Ok(movies) => {
                    state.movies = movies.clone();
                    state.error = None;
                }
                Err(e) => state.error = Some(e.to_string()),
            }
        }

        match result {
            Ok(movies) => {
                tracing::info!(%query, count = movies.len(), "Search committed");
                self.record(&query, &movies).await;
                SearchOutcome::Committed(movies)
            }
            Err(e) => {
                tracing::warn!(%query, error = %e, "Search failed");
                SearchOutcome::Failed(e)
            }
        }
    }

    async fn record(&self, query: &str, movies: &[Movie]) {
        let (Some(analytics), Some(first)) = (&self.analytics, movies.first()) else {
            return;
        };
        if query.trim().is_empty() {
            return;
        }
        if let Err(e) = analytics.record_search(query, first).await {
            tracing::warn!(%query, error = %e, "Failed to record search");
        }
    }
}
