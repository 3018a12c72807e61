//! Adapter layer: decode catalog envelopes into movie stubs
//!
//! Each endpoint gets its own decode step. Search and trending wrap every
//! movie in an item object; the genre-filtered endpoint returns the movies
//! directly. Items are decoded one at a time so a single malformed entry is
//! dropped instead of failing the whole list.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::domain::{CatalogEndpoint, CatalogError};
use super::dto::{CatalogMovie, ListItem};

/// A decoded list response, tagged by the endpoint it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEnvelope {
    Search(Vec<ListItem>),
    Trending(Vec<ListItem>),
    Popular(Vec<CatalogMovie>),
}

impl CatalogEnvelope {
    /// Flatten into stubs, keeping response order.
    ///
    /// Wrapper items without a `movie` are dropped with a warning.
    pub fn into_stubs(self) -> Vec<CatalogMovie> {
        match self {
            Self::Search(items) => unwrap_items(CatalogEndpoint::Search, items),
            Self::Trending(items) => unwrap_items(CatalogEndpoint::Trending, items),
            Self::Popular(movies) => movies,
        }
    }
}

/// Decode a raw JSON body for the given endpoint.
///
/// The body must be a JSON array; anything else fails the request.
pub fn decode_envelope(
    endpoint: CatalogEndpoint,
    body: Value,
) -> Result<CatalogEnvelope, CatalogError> {
    let Value::Array(items) = body else {
        return Err(CatalogError::Parse(format!(
            "expected a JSON array from the {} endpoint, got {}",
            endpoint,
            json_kind(&body)
        )));
    };

    let envelope = match endpoint {
        CatalogEndpoint::Search => CatalogEnvelope::Search(decode_items(endpoint, items)),
        CatalogEndpoint::Trending => CatalogEnvelope::Trending(decode_items(endpoint, items)),
        CatalogEndpoint::Popular => CatalogEnvelope::Popular(decode_items(endpoint, items)),
    };

    Ok(envelope)
}

fn decode_items<T: DeserializeOwned>(endpoint: CatalogEndpoint, items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(%endpoint, index, error = %e, "Dropping undecodable catalog item");
                None
            }
        })
        .collect()
}

fn unwrap_items(endpoint: CatalogEndpoint, items: Vec<ListItem>) -> Vec<CatalogMovie> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if item.movie.is_none() {
                tracing::warn!(%endpoint, index, kind = ?item.kind, "Catalog item has no movie");
            }
            item.movie
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_envelope_unwraps_movies() {
        let body = json!([
            {"type": "movie", "movie": {"title": "A", "ids": {"trakt": 1}}},
            {"type": "movie", "movie": {"title": "B", "ids": {"trakt": 2}}}
        ]);

        let stubs = decode_envelope(CatalogEndpoint::Search, body)
            .unwrap()
            .into_stubs();

        let titles: Vec<_> = stubs.iter().filter_map(|m| m.title.as_deref()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_wrapped_item_without_movie_is_dropped() {
        let body = json!([
            {"type": "show", "show": {"title": "Not a movie"}},
            {"watchers": 3, "movie": {"title": "Kept", "ids": {"trakt": 5}}}
        ]);

        let stubs = decode_envelope(CatalogEndpoint::Trending, body)
            .unwrap()
            .into_stubs();

        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].title.as_deref(), Some("Kept"));
    }

    #[test]
    fn test_popular_envelope_is_bare() {
        let body = json!([
            {"title": "Hereditary", "ids": {"trakt": 10}},
            {"title": "No id at all"}
        ]);

        let envelope = decode_envelope(CatalogEndpoint::Popular, body).unwrap();
        assert!(matches!(envelope, CatalogEnvelope::Popular(ref m) if m.len() == 2));
        // Id filtering happens during normalization, not here
        assert_eq!(envelope.into_stubs().len(), 2);
    }

    #[test]
    fn test_bare_movies_decoded_as_wrapped_lose_everything() {
        // A bare array read with the search decoder has no `movie` fields
        let body = json!([{"title": "Bare", "ids": {"trakt": 1}}]);
        let stubs = decode_envelope(CatalogEndpoint::Search, body)
            .unwrap()
            .into_stubs();
        assert!(stubs.is_empty());
    }

    #[test]
    fn test_malformed_item_does_not_fail_list() {
        let body = json!([
            {"title": 12, "ids": {"trakt": 1}},
            {"title": "Fine", "ids": {"trakt": 2}}
        ]);

        let stubs = decode_envelope(CatalogEndpoint::Popular, body)
            .unwrap()
            .into_stubs();

        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].catalog_id(), Some(2));
    }

    #[test]
    fn test_non_array_body_is_error() {
        let body = json!({"error": "nope"});
        let err = decode_envelope(CatalogEndpoint::Trending, body).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(ref msg) if msg.contains("an object")));
    }
}
