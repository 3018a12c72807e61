//! Canonical movie records handed to presentation and analytics.
//!
//! These are the normalized shapes produced by [`crate::enrichment::merge`].
//! They never carry raw catalog or OMDb types, so provider changes stop at
//! the adapter layer.
//!
//! Field names follow the snake_case JSON schema the presentation layer
//! already consumes (`poster_path`, `vote_average`, ...), which is why the
//! serialized form is kept stable even for fields no provider supplies.

use serde::{Deserialize, Serialize};

/// Placeholder used when no source has an overview.
pub const NO_OVERVIEW: &str = "No overview available.";

/// Sentinel release date when the catalog has neither a date nor a year.
pub const UNKNOWN_RELEASE_DATE: &str = "N/A";

/// A movie as shown in lists (search results, trending, genre browse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog-side identifier (never the IMDb id)
    pub id: i64,
    pub title: String,
    /// ISO date, `YYYY-01-01` when only the year is known, or `"N/A"`
    pub release_date: String,
    pub overview: String,
    /// Poster URL from enrichment, if any
    pub poster_path: Option<String>,
    /// Rating on the display scale, one decimal place
    pub vote_average: f64,
    pub vote_count: u64,
    /// Genre names as the catalog reports them
    pub genres: Vec<String>,
}

/// Full record for the single-movie view.
///
/// A superset of [`Movie`] that also carries the schema-compatibility fields
/// (`adult`, `video`, `popularity`, ...) the details screen expects. The
/// catalog never supplies most of them, so they are filled with constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub overview: String,
    pub genres: Vec<Genre>,
    /// Runtime in minutes
    pub runtime: u32,
    pub vote_average: f64,
    pub vote_count: u64,
    pub tagline: String,
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    /// Identifier set as reported by the catalog
    pub ids: MovieIds,
    pub imdb_id: Option<String>,
    pub budget: u64,
    pub revenue: u64,
    pub production_companies: Vec<ProductionCompany>,

    pub adult: bool,
    pub video: bool,
    pub popularity: f64,
    pub original_language: String,
    pub original_title: String,
    pub status: String,
    pub backdrop_path: Option<String>,
    pub belongs_to_collection: Option<Collection>,
    pub homepage: Option<String>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
}

/// Catalog identifier set carried through to the details view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieIds {
    pub trakt: Option<i64>,
    pub slug: Option<String>,
    pub imdb: Option<String>,
    pub tmdb: Option<i64>,
}

/// Genre pair. The catalog has no numeric genre ids, so `id` is always 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl Genre {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: i64,
    pub logo_path: Option<String>,
    pub name: String,
    pub origin_country: String,
}

impl ProductionCompany {
    /// Company synthesized from a bare studio name.
    pub fn from_studio(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            logo_path: None,
            name: name.into(),
            origin_country: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub english_name: String,
    pub iso_639_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

/// A genre the browse filter offers by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreFilter {
    /// Catalog slug sent as `genres=<slug>`
    pub slug: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Genres offered by the browse filter.
pub const GENRE_FILTERS: &[GenreFilter] = &[
    GenreFilter { slug: "action", name: "Action" },
    GenreFilter { slug: "comedy", name: "Comedy" },
    GenreFilter { slug: "drama", name: "Drama" },
    GenreFilter { slug: "horror", name: "Horror" },
    GenreFilter { slug: "sci-fi", name: "Sci-Fi" },
    GenreFilter { slug: "thriller", name: "Thriller" },
    GenreFilter { slug: "romance", name: "Romance" },
    GenreFilter { slug: "animation", name: "Animation" },
    GenreFilter { slug: "documentary", name: "Documentary" },
    GenreFilter { slug: "fantasy", name: "Fantasy" },
];

/// Look up a built-in genre filter by slug (case-insensitive).
pub fn find_genre(slug: &str) -> Option<&'static GenreFilter> {
    GENRE_FILTERS
        .iter()
        .find(|g| g.slug.eq_ignore_ascii_case(slug.trim()))
}
