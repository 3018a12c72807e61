//! OMDb HTTP client
//!
//! Handles communication with the OMDb web service.
//! See: https://www.omdbapi.com
//!
//! OMDb answers 200 even for unknown ids; the not-found signal is the
//! `Response` field, which the adapter turns into an error.

use super::{adapter, dto};
use crate::config::EndpointConfig;
use crate::enrichment::domain::{EnrichmentError, EnrichmentRecord, PlotLength};

/// OMDb API client
pub struct OmdbClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl OmdbClient {
    /// Create a new client with the given API key
    pub fn new(
        api_key: impl Into<String>,
        endpoints: &EndpointConfig,
    ) -> Result<Self, EnrichmentError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(endpoints.timeout())
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| EnrichmentError::Client(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            http_client,
            base_url: endpoints
                .enrichment_base_url
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Look up a title by IMDb id
    pub async fn lookup(
        &self,
        imdb_id: &str,
        plot: PlotLength,
    ) -> Result<EnrichmentRecord, EnrichmentError> {
        let response = self.send_lookup_request(imdb_id, plot).await?;
        adapter::to_record(response)
    }

    fn lookup_url(&self, imdb_id: &str, plot: PlotLength) -> String {
        let mut url = format!(
            "{}/?i={}&apikey={}",
            self.base_url,
            urlencoding::encode(imdb_id),
            urlencoding::encode(&self.api_key)
        );
        if plot == PlotLength::Full {
            url.push_str("&plot=full");
        }
        url
    }

    /// Send the HTTP request and parse the response
    async fn send_lookup_request(
        &self,
        imdb_id: &str,
        plot: PlotLength,
    ) -> Result<dto::TitleResponse, EnrichmentError> {
        let response = self
            .http_client
            .get(self.lookup_url(imdb_id, plot))
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<dto::TitleResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
