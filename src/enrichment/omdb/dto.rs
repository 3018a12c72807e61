//! OMDb API Data Transfer Objects
//!
//! These types match what OMDb returns for `/?i=<imdb id>`.
//! DO NOT use these types outside the omdb module - convert to domain types.
//!
//! OMDb encodes everything as strings, uses `"N/A"` for missing values and
//! signals success with `"Response": "True"` rather than an HTTP status.

use serde::{Deserialize, Serialize};

/// The literal OMDb uses for "no value".
pub const NOT_AVAILABLE: &str = "N/A";

/// Title lookup response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TitleResponse {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    /// Comma-separated actor names
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    /// Poster URL or `"N/A"`
    pub poster: Option<String>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    /// e.g. `"$206,852,432"`
    pub box_office: Option<String>,
    /// Not part of the documented schema, but returned for some titles
    pub budget: Option<String>,
    pub production: Option<String>,
    pub website: Option<String>,
    /// `"True"` or `"False"`
    pub response: Option<String>,
    /// Present when `response` is `"False"`
    pub error: Option<String>,
}

impl TitleResponse {
    pub fn is_found(&self) -> bool {
        self.response.as_deref() == Some("True")
    }
}

/// Third-party rating entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
