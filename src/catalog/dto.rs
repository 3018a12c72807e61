//! Catalog API Data Transfer Objects
//!
//! These types match what the Trakt API returns. Every field is optional
//! because the three list endpoints disagree on which ones they fill in.
//! Convert to [`crate::model`] types before handing anything to callers.
//!
//! API Reference: https://trakt.docs.apiary.io

use serde::{Deserialize, Serialize};

/// One movie inside a list response (a "stub").
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogMovie {
    pub title: Option<String>,
    /// Release year when no full date is known
    pub year: Option<i32>,
    /// Nested id set (search and trending envelopes)
    pub ids: Option<CatalogIds>,
    /// Top-level id (some genre-filtered responses)
    pub id: Option<i64>,
    /// Full release date, `YYYY-MM-DD`
    pub released: Option<String>,
    pub overview: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<u64>,
    pub genres: Option<Vec<String>>,
}

impl CatalogMovie {
    /// Catalog-side id: the nested Trakt id, falling back to a top-level id.
    pub fn catalog_id(&self) -> Option<i64> {
        self.ids.as_ref().and_then(|ids| ids.trakt).or(self.id)
    }

    /// External (IMDb) id used for enrichment lookups.
    pub fn imdb_id(&self) -> Option<&str> {
        self.ids.as_ref().and_then(CatalogIds::imdb)
    }
}

/// Identifier set attached to catalog movies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogIds {
    pub trakt: Option<i64>,
    pub slug: Option<String>,
    pub imdb: Option<String>,
    /// Older responses spell the IMDb id this way
    pub imdb_id: Option<String>,
    pub tmdb: Option<i64>,
}

impl CatalogIds {
    /// IMDb id from either spelling, ignoring empty strings.
    pub fn imdb(&self) -> Option<&str> {
        non_blank(self.imdb.as_deref()).or_else(|| non_blank(self.imdb_id.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Wrapper item used by the search and trending envelopes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ListItem {
    /// Result type (`"movie"` for search results)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Search relevance score
    pub score: Option<f64>,
    /// Current watchers (trending only)
    pub watchers: Option<u64>,
    pub movie: Option<CatalogMovie>,
}

/// `/movies/{id}?extended=full` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MovieDetailsResponse {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub ids: Option<CatalogIds>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub released: Option<String>,
    /// Runtime in minutes
    pub runtime: Option<u32>,
    pub country: Option<String>,
    pub trailer: Option<String>,
    pub homepage: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<u64>,
    pub language: Option<String>,
    pub genres: Option<Vec<String>>,
    pub certification: Option<String>,
    /// Single studio name, when present
    pub studio: Option<String>,
}

impl MovieDetailsResponse {
    pub fn catalog_id(&self) -> Option<i64> {
        self.ids.as_ref().and_then(|ids| ids.trakt)
    }

    pub fn imdb_id(&self) -> Option<&str> {
        self.ids.as_ref().and_then(CatalogIds::imdb)
    }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
