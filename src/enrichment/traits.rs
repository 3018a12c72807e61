//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use super::domain::{EnrichmentError, EnrichmentRecord, PlotLength};
use crate::catalog::dto::{CatalogMovie, MovieDetailsResponse};
use crate::catalog::{CatalogError, CatalogRequest};

/// Trait for the movie catalog (Trakt).
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Run a list request and return its stubs in response order.
    async fn query(&self, request: &CatalogRequest) -> Result<Vec<CatalogMovie>, CatalogError>;

    /// Fetch the extended record for one movie.
    async fn movie_details(&self, movie_id: &str) -> Result<MovieDetailsResponse, CatalogError>;
}

/// Trait for the secondary enrichment lookup (OMDb).
#[async_trait]
pub trait EnrichmentApi: Send + Sync {
    /// Look up a title by IMDb id.
    async fn lookup(
        &self,
        imdb_id: &str,
        plot: PlotLength,
    ) -> Result<EnrichmentRecord, EnrichmentError>;
}

// Implement traits for real clients

#[async_trait]
impl CatalogApi for crate::catalog::CatalogClient {
    async fn query(&self, request: &CatalogRequest) -> Result<Vec<CatalogMovie>, CatalogError> {
        self.query(request).await
    }

    async fn movie_details(&self, movie_id: &str) -> Result<MovieDetailsResponse, CatalogError> {
        self.movie_details(movie_id).await
    }
}

#[async_trait]
impl EnrichmentApi for super::omdb::OmdbClient {
    async fn lookup(
        &self,
        imdb_id: &str,
        plot: PlotLength,
    ) -> Result<EnrichmentRecord, EnrichmentError> {
        self.lookup(imdb_id, plot).await
    }
}
