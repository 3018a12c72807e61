//! Catalog request selection and error types.

use std::fmt;

/// The three list endpoints the catalog exposes.
///
/// Each one has its own envelope shape, see [`super::CatalogEnvelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEndpoint {
    /// `/search/movie` - wrapped items
    Search,
    /// `/movies/trending` - wrapped items
    Trending,
    /// `/movies/popular?genres=` - bare movie objects
    Popular,
}

impl fmt::Display for CatalogEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "search"),
            Self::Trending => write!(f, "trending"),
            Self::Popular => write!(f, "popular"),
        }
    }
}

/// A list request built from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    Search { query: String },
    Popular { genre: String },
    Trending,
}

impl CatalogRequest {
    /// Pick the endpoint for the current input.
    ///
    /// A non-blank query always wins; a genre only applies when the query is
    /// blank; with neither, trending is used.
    pub fn from_input(query: &str, genre: Option<&str>) -> Self {
        let query = query.trim();
        if !query.is_empty() {
            return Self::Search {
                query: query.to_string(),
            };
        }

        match genre.map(str::trim).filter(|g| !g.is_empty()) {
            Some(genre) => Self::Popular {
                genre: genre.to_string(),
            },
            None => Self::Trending,
        }
    }

    pub fn endpoint(&self) -> CatalogEndpoint {
        match self {
            Self::Search { .. } => CatalogEndpoint::Search,
            Self::Popular { .. } => CatalogEndpoint::Popular,
            Self::Trending => CatalogEndpoint::Trending,
        }
    }

    /// Path plus query string, relative to the catalog base URL.
    pub fn path_and_query(&self, page_size: u32) -> String {
        match self {
            Self::Search { query } => format!(
                "/search/movie?query={}&fields=title",
                urlencoding::encode(query)
            ),
            Self::Popular { genre } => format!(
                "/movies/popular?genres={}&page=1&limit={}",
                urlencoding::encode(genre),
                page_size
            ),
            Self::Trending => format!("/movies/trending?page=1&limit={}", page_size),
        }
    }
}

/// Path for the single-movie lookup.
pub fn details_path(movie_id: &str) -> String {
    format!(
        "/movies/{}?extended=full",
        urlencoding::encode(movie_id.trim())
    )
}

/// Errors from the catalog. Any of these fails the whole operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to fetch {resource}: {status_text}")]
    Status {
        resource: &'static str,
        status: u16,
        status_text: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse catalog response: {0}")]
    Parse(String),

    #[error("Catalog record has no usable identifier")]
    MissingIdentifier,

    #[error("Invalid catalog client configuration: {0}")]
    Client(String),
}
