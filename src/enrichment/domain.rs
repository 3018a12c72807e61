//! Internal domain models for movie enrichment.
//!
//! These types are OUR types - they don't change when OMDb changes.
//! OMDb responses get converted into these types via the adapter.

/// Data obtained from the secondary (OMDb) lookup.
///
/// `"N/A"` sentinels are already mapped to `None` here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentRecord {
    /// Poster image URL
    pub poster: Option<String>,
    /// Actor names, in billing order
    pub actors: Option<Vec<String>>,
    pub director: Option<String>,
    /// Box-office revenue as formatted by the source (e.g. `"$206,852,432"`)
    pub box_office: Option<String>,
    /// Budget as formatted by the source
    pub budget: Option<String>,
    pub plot: Option<String>,
    /// Whether the source reported the title as found
    pub found: bool,
}

/// Result of one best-effort lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(EnrichmentRecord),
    NotFound,
    Failed(String),
}

impl LookupOutcome {
    /// Collapse into the single "absent" case the merge step understands.
    pub fn into_record(self) -> Option<EnrichmentRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound | Self::Failed(_) => None,
        }
    }
}

impl From<Result<EnrichmentRecord, EnrichmentError>> for LookupOutcome {
    fn from(result: Result<EnrichmentRecord, EnrichmentError>) -> Self {
        match result {
            Ok(record) if record.found => Self::Found(record),
            Ok(_) | Err(EnrichmentError::NotFound(_)) => Self::NotFound,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Plot length requested from OMDb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotLength {
    /// Short plot (list views)
    #[default]
    Short,
    /// Full plot (details view)
    Full,
}

/// Errors that can occur during an enrichment lookup
///
/// None of these ever leave the enrichment service; they are logged and
/// downgraded to "no enrichment".
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Title not found: {0}")]
    NotFound(String),

    #[error("Invalid enrichment client configuration: {0}")]
    Client(String),
}
