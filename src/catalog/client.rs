//! Catalog HTTP client
//!
//! Every request carries the fixed headers Trakt requires:
//! `accept: application/json`, `trakt-api-version` and `trakt-api-key`.
//! A non-success status fails the call with the status text; there is no
//! retry here, the caller decides what to show.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use super::adapter;
use super::domain::{CatalogError, CatalogRequest, details_path};
use super::dto;
use crate::config::EndpointConfig;

/// Catalog API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl CatalogClient {
    /// Create a client for the configured catalog.
    pub fn new(
        client_id: &str,
        endpoints: &EndpointConfig,
        page_size: u32,
    ) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "trakt-api-version",
            HeaderValue::from_str(&endpoints.catalog_api_version)
                .map_err(|e| CatalogError::Client(format!("api version header: {e}")))?,
        );
        headers.insert(
            "trakt-api-key",
            HeaderValue::from_str(client_id)
                .map_err(|e| CatalogError::Client(format!("api key header: {e}")))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .gzip(true)
            .timeout(endpoints.timeout())
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: endpoints.catalog_base_url.trim_end_matches('/').to_string(),
            page_size,
        })
    }

    /// Run a list request and return its stubs in response order.
    pub async fn query(
        &self,
        request: &CatalogRequest,
    ) -> Result<Vec<dto::CatalogMovie>, CatalogError> {
        let url = self.url_for(request);
        tracing::debug!(endpoint = %request.endpoint(), %url, "Querying catalog");

        let body: Value = self.get_json(&url, "movies").await?;
        let stubs = adapter::decode_envelope(request.endpoint(), body)?.into_stubs();

        tracing::debug!(endpoint = %request.endpoint(), count = stubs.len(), "Catalog stubs decoded");
        Ok(stubs)
    }

    /// Fetch the extended record for one movie (Trakt id, slug or IMDb id).
    pub async fn movie_details(
        &self,
        movie_id: &str,
    ) -> Result<dto::MovieDetailsResponse, CatalogError> {
        let url = format!("{}{}", self.base_url, details_path(movie_id));
        tracing::debug!(%movie_id, "Fetching catalog details");
        self.get_json(&url, "movie details").await
    }

    fn url_for(&self, request: &CatalogRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query(self.page_size))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        resource: &'static str,
    ) -> Result<T, CatalogError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .unwrap_or(status.as_str())
                .to_string();
            tracing::error!(%url, status = status.as_u16(), %status_text, "Catalog request failed");
            return Err(CatalogError::Status {
                resource,
                status: status.as_u16(),
                status_text,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve_once;

    fn endpoints(base: &str) -> EndpointConfig {
        EndpointConfig {
            catalog_base_url: base.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new("client-id", &EndpointConfig::default(), 20).unwrap();
        assert_eq!(client.base_url, "https://api.trakt.tv");
        assert_eq!(client.page_size, 20);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("id", &endpoints("http://localhost:8080/"), 20).unwrap();
        assert_eq!(
            client.url_for(&CatalogRequest::Trending),
            "http://localhost:8080/movies/trending?page=1&limit=20"
        );
    }

    #[test]
    fn test_invalid_key_is_client_error() {
        let result = CatalogClient::new("bad\nkey", &EndpointConfig::default(), 20);
        assert!(matches!(result, Err(CatalogError::Client(_))));
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_network_error() {
        // Port 9 (discard) on localhost is not an HTTP server
        let client = CatalogClient::new("id", &endpoints("http://127.0.0.1:9"), 20).unwrap();
        let result = client.query(&CatalogRequest::Trending).await;
        assert!(matches!(result, Err(CatalogError::Network(_))));
    }

    #[tokio::test]
    async fn test_unavailable_catalog_reports_status_text() {
        let (base, request) = serve_once("503 Service Unavailable", "").await;
        let client = CatalogClient::new("client-id", &endpoints(&base), 20).unwrap();

        let err = client.query(&CatalogRequest::Trending).await.unwrap_err();

        assert!(matches!(err, CatalogError::Status { status: 503, .. }));
        assert_eq!(err.to_string(), "Failed to fetch movies: Service Unavailable");

        let head = request.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /movies/trending?page=1&limit=20 "));
        assert!(head.contains("trakt-api-key: client-id"));
        assert!(head.contains("trakt-api-version: 2"));
        assert!(head.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_missing_details_reports_status_text() {
        let (base, request) = serve_once("404 Not Found", "").await;
        let client = CatalogClient::new("id", &endpoints(&base), 20).unwrap();

        let err = client.movie_details("no-such-movie").await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch movie details: Not Found");
        assert!(
            request
                .await
                .unwrap()
                .starts_with("GET /movies/no-such-movie?extended=full ")
        );
    }

    #[tokio::test]
    async fn test_non_array_body_is_parse_error() {
        let (base, _request) = serve_once("200 OK", r#"{"error":"nope"}"#).await;
        let client = CatalogClient::new("id", &endpoints(&base), 20).unwrap();

        let result = client.query(&CatalogRequest::Trending).await;
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_parse_error() {
        let (base, _request) = serve_once("200 OK", "<html>maintenance</html>").await;
        let client = CatalogClient::new("id", &endpoints(&base), 20).unwrap();

        let result = client.movie_details("1").await;
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_search_response_is_unwrapped_in_order() {
        let body = r#"[
            {"type": "movie", "score": 1000, "movie": {"title": "Batman Begins", "year": 2005, "ids": {"trakt": 1, "imdb": "tt0372784"}}},
            {"type": "movie", "score": 900, "movie": {"title": "The Batman", "year": 2022, "ids": {"trakt": 2}}}
        ]"#;
        let (base, request) = serve_once("200 OK", body).await;
        let client = CatalogClient::new("id", &endpoints(&base), 20).unwrap();

        let stubs = client
            .query(&CatalogRequest::Search {
                query: "batman".to_string(),
            })
            .await
            .unwrap();

        let ids: Vec<_> = stubs.iter().map(|s| s.catalog_id()).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
        assert_eq!(stubs[0].imdb_id(), Some("tt0372784"));
        assert!(request.await.unwrap().contains("query=batman"));
    }
}
