//! Movie service - orchestrates catalog queries, enrichment and merging
//!
//! This is the high-level API for getting display-ready movies:
//! 1. Query the catalog (search, trending or genre)
//! 2. Look up every stub's IMDb id on OMDb, concurrently and best-effort
//! 3. Merge both sources into canonical records, keeping catalog order

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::catalog::dto::{CatalogMovie, MovieDetailsResponse};
use crate::catalog::{CatalogClient, CatalogError, CatalogRequest};
use crate::config::{Config, RatingScale, SearchConfig};
use crate::enrichment::{
    domain::{EnrichmentRecord, LookupOutcome, PlotLength},
    merge,
    omdb::OmdbClient,
    traits::{CatalogApi, EnrichmentApi},
};
use crate::error::Result;
use crate::model::{Movie, MovieDetails};

/// Service for fetching and normalizing movies
pub struct MovieService {
    catalog: Arc<dyn CatalogApi>,
    enrichment: Arc<dyn EnrichmentApi>,
    rating_scale: RatingScale,
    max_concurrent_lookups: usize,
}

impl MovieService {
    /// Create a service over the given API implementations
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        enrichment: Arc<dyn EnrichmentApi>,
        search: &SearchConfig,
    ) -> Self {
        Self {
            catalog,
            enrichment,
            rating_scale: search.rating_scale,
            max_concurrent_lookups: search.max_concurrent_lookups.max(1),
        }
    }

    /// Build the real Trakt + OMDb clients from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = CatalogClient::new(
            config.trakt_client_id()?,
            &config.endpoints,
            config.search.page_size,
        )?;
        let enrichment = OmdbClient::new(config.omdb_api_key()?, &config.endpoints)?;

        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(enrichment),
            &config.search,
        ))
    }

    /// Fetch a list for the current input and normalize it.
    ///
    /// Only a catalog failure is an error; enrichment failures just leave
    /// the affected movies without posters.
    pub async fn fetch_movies(
        &self,
        query: &str,
        genre: Option<&str>,
    ) -> std::result::Result<Vec<Movie>, CatalogError> {
        let request = CatalogRequest::from_input(query, genre);
        tracing::info!(endpoint = %request.endpoint(), "Fetching movies");

        let stubs = self.catalog.query(&request).await?;
        Ok(self.normalize_all(stubs).await)
    }

    /// Enrich and normalize stubs concurrently.
    ///
    /// Output order matches input order regardless of which lookups finish
    /// first. Stubs without a catalog id are dropped.
    pub async fn normalize_all(&self, stubs: Vec<CatalogMovie>) -> Vec<Movie> {
        let total = stubs.len();

        let movies: Vec<Movie> = stream::iter(stubs.into_iter().enumerate())
            .map(|(index, stub)| self.normalize_one(index, stub))
            .buffered(self.max_concurrent_lookups)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .flatten()
            .collect();

        if movies.len() < total {
            tracing::info!(
                kept = movies.len(),
                dropped = total - movies.len(),
                "Dropped catalog stubs without identifiers"
            );
        }
        movies
    }

    async fn normalize_one(&self, index: usize, stub: CatalogMovie) -> Option<Movie> {
        if stub.catalog_id().is_none() {
            tracing::warn!(index, title = ?stub.title, "Dropping catalog stub without an identifier");
            return None;
        }

        let enrichment = self.lookup(stub.imdb_id(), PlotLength::Short).await;
        merge::normalize_stub(&stub, enrichment.as_ref(), self.rating_scale)
    }

    /// Fetch one movie's details and normalize them.
    pub async fn fetch_movie_details(
        &self,
        movie_id: &str,
    ) -> std::result::Result<MovieDetails, CatalogError> {
        tracing::info!(%movie_id, "Fetching movie details");
        let primary = self.catalog.movie_details(movie_id).await?;
        self.normalize_details(primary).await
    }

    /// Enrich and normalize a details record.
    pub async fn normalize_details(
        &self,
        primary: MovieDetailsResponse,
    ) -> std::result::Result<MovieDetails, CatalogError> {
        if primary.catalog_id().is_none() {
            tracing::warn!(title = ?primary.title, "Catalog details have no identifier");
            return Err(CatalogError::MissingIdentifier);
        }

        let enrichment = self.lookup(primary.imdb_id(), PlotLength::Full).await;
        merge::normalize_details(&primary, enrichment.as_ref(), self.rating_scale)
    }

    /// Best-effort secondary lookup. Never fails; problems become `None`.
    async fn lookup(&self, imdb_id: Option<&str>, plot: PlotLength) -> Option<EnrichmentRecord> {
        let imdb_id = imdb_id?;

        let outcome = LookupOutcome::from(self.enrichment.lookup(imdb_id, plot).await);
        match &outcome {
            LookupOutcome::Found(record) => {
                tracing::debug!(%imdb_id, has_poster = record.poster.is_some(), "Enrichment found");
            }
            LookupOutcome::NotFound => {
                tracing::debug!(%imdb_id, "Enrichment has no data for title");
            }
            LookupOutcome::Failed(reason) => {
                tracing::warn!(%imdb_id, %reason, "Enrichment lookup failed");
            }
        }
        outcome.into_record()
    }
}
