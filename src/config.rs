//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\movie-scout\config.toml
//! - macOS: ~/Library/Application Support/movie-scout/config.toml
//! - Linux: ~/.config/movie-scout/config.toml
//!
//! Every section falls back to defaults, so a file containing only the two
//! API keys is a complete config. Keys can also come from the command line
//! or the `TRAKT_CLIENT_ID` / `OMDB_API_KEY` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Upstream service locations
    pub endpoints: EndpointConfig,

    /// Search and normalization behaviour
    pub search: SearchConfig,

    /// Search analytics storage
    pub analytics: AnalyticsConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Trakt client id, sent as the `trakt-api-key` header
    pub trakt_client_id: Option<String>,
    /// OMDb API key for poster and plot lookups
    pub omdb_api_key: Option<String>,
}

/// Base URLs and HTTP settings for both upstream APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub catalog_base_url: String,
    /// Value of the `trakt-api-version` header
    pub catalog_api_version: String,
    pub enrichment_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            catalog_base_url: "https://api.trakt.tv".to_string(),
            catalog_api_version: "2".to_string(),
            enrichment_base_url: "http://www.omdbapi.com".to_string(),
            timeout_secs: 15,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// How catalog ratings map onto the display scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingScale {
    /// Catalog rating is doubled and rounded to one decimal
    #[default]
    Doubled,
    /// Catalog rating is passed through, rounded to one decimal
    Native,
}

impl RatingScale {
    /// Project a catalog rating onto the display scale. Absent ratings are 0.
    pub fn display(self, rating: Option<f64>) -> f64 {
        let Some(rating) = rating.filter(|r| r.is_finite()) else {
            return 0.0;
        };
        let scaled = match self {
            Self::Doubled => rating * 2.0,
            Self::Native => rating,
        };
        (scaled * 10.0).round() / 10.0
    }
}

/// Search behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a search input is sent, in milliseconds
    pub debounce_ms: u64,
    /// Page size for trending and genre lists
    pub page_size: u32,
    /// Maximum enrichment lookups in flight for one list
    pub max_concurrent_lookups: usize,
    pub rating_scale: RatingScale,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            page_size: 20,
            max_concurrent_lookups: 8,
            rating_scale: RatingScale::default(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Search analytics settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Whether searches are recorded at all
    pub enabled: bool,
    /// SQLite database path (defaults to the data directory)
    pub db_path: Option<PathBuf>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            db_path: None,
        }
    }
}

impl AnalyticsConfig {
    /// Resolved database path, if one can be determined.
    pub fn resolved_db_path(&self) -> Option<PathBuf> {
        self.db_path
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("movie-scout").join(crate::db::DEFAULT_DB_NAME)))
    }
}

impl Config {
    /// Apply command-line / environment overrides on top of the file.
    pub fn with_overrides(
        mut self,
        trakt_client_id: Option<&str>,
        omdb_api_key: Option<&str>,
        db_path: Option<&Path>,
    ) -> Self {
        if let Some(id) = trakt_client_id {
            self.credentials.trakt_client_id = Some(id.to_string());
        }
        if let Some(key) = omdb_api_key {
            self.credentials.omdb_api_key = Some(key.to_string());
        }
        if let Some(path) = db_path {
            self.analytics.db_path = Some(path.to_path_buf());
        }
        self
    }

    /// The Trakt client id, or a config error naming how to supply it.
    pub fn trakt_client_id(&self) -> Result<&str, ConfigError> {
        non_blank(self.credentials.trakt_client_id.as_deref())
            .ok_or(ConfigError::MissingCredential("trakt_client_id", "TRAKT_CLIENT_ID"))
    }

    /// The OMDb API key, or a config error naming how to supply it.
    pub fn omdb_api_key(&self) -> Result<&str, ConfigError> {
        non_blank(self.credentials.omdb_api_key.as_deref())
            .ok_or(ConfigError::MissingCredential("omdb_api_key", "OMDB_API_KEY"))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("movie-scout"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file, with the same fallbacks as [`load`].
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing credential `{0}`: set it in config.toml, pass it as a flag, or export {1}")]
    MissingCredential(&'static str, &'static str),

    #[error("Could not determine a location for the analytics database")]
    NoDataDir,
}

// ============================================================================
// Tests
// ============================================================================
