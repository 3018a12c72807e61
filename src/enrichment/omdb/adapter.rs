//! Adapter layer: Convert OMDb DTOs to domain models
//!
//! This is the ONLY place where OMDb types are converted to domain types,
//! and the only place that knows about the `"N/A"` sentinel.

use super::dto::{self, NOT_AVAILABLE};
use crate::enrichment::domain::{EnrichmentError, EnrichmentRecord};

/// Convert an OMDb title response into an enrichment record.
///
/// `Response != "True"` becomes [`EnrichmentError::NotFound`].
pub fn to_record(response: dto::TitleResponse) -> Result<EnrichmentRecord, EnrichmentError> {
    if !response.is_found() {
        return Err(EnrichmentError::NotFound(
            response
                .error
                .unwrap_or_else(|| "Response was not True".to_string()),
        ));
    }

    Ok(EnrichmentRecord {
        poster: available(response.poster),
        actors: available(response.actors).map(|a| split_names(&a)),
        director: available(response.director),
        box_office: available(response.box_office),
        budget: available(response.budget),
        plot: available(response.plot),
        found: true,
    })
}

/// Drop blanks and the `"N/A"` sentinel.
fn available(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != NOT_AVAILABLE)
}

fn split_names(list: &str) -> Vec<String> {
    list.split(", ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
