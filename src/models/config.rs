//! Configuration models for lexika.
//!
//! All I^R (resolvable ignorance) is parameterized here.
//! The user resolves these unknowns at runtime via config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration for lexika.
///
/// I^R resolved: All configurable parameters are explicit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote content API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Query defaults (page size, debounce, filter fields)
    #[serde(default)]
    pub query: QueryConfig,

    /// Navigation-state persistence settings
    #[serde(default)]
    pub state: StateConfig,
}

/// Remote content API configuration.
///
/// K_i: The API is Directus-compatible: collections live under
/// `{base_url}/items/{collection}` and every payload is wrapped in a
/// `{ "data": ... }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the content API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Collection name to browse
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries per request on failure
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Base delay between retries in milliseconds (grows linearly per attempt)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_base_url() -> String {
    "https://directus.altura.io".to_string()
}

fn default_collection() -> String {
    "translationKeys".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
            timeout_secs: default_timeout(),
            retries: default_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Query defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Default page size
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Quiescence window for debounced search, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Record field the search box matches against
    #[serde(default = "default_search_field")]
    pub search_field: String,

    /// Record field the date-range filter applies to
    #[serde(default = "default_date_field")]
    pub date_field: String,
}

fn default_page_size() -> u32 {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_search_field() -> String {
    "key".to_string()
}

fn default_date_field() -> String {
    "updatedAt".to_string()
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            search_field: default_search_field(),
            date_field: default_date_field(),
        }
    }
}

/// Navigation-state persistence configuration.
///
/// B_i: When `path` is set, the last filter/page view is written there as a
/// shareable query string and re-seeds the next session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateConfig {
    /// File to persist the navigation state to (optional)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// B_i(file exists) → Result
    /// B_i(file is valid TOML) → Result
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// The full collection endpoint URL.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/items/{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.collection
        )
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Sanity-check the loaded values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if url::Url::parse(&self.api.base_url).is_err() {
            return Err(ConfigError::Invalid(format!(
                "api.base_url is not a valid URL: {}",
                self.api.base_url
            )));
        }
        if self.api.collection.is_empty() {
            return Err(ConfigError::Invalid(
                "api.collection must not be empty".to_string(),
            ));
        }
        if self.query.page_size == 0 {
            return Err(ConfigError::Invalid(
                "query.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
///
/// Epistemic origin:
/// - B_i falsified: File not found, parse error
/// - K_i violated: Values that cannot describe a usable endpoint
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "https://directus.altura.io");
        assert_eq!(config.api.collection, "translationKeys");
        assert_eq!(config.api.retries, 3);
        assert_eq!(config.api.retry_delay_ms, 1000);
        assert_eq!(config.query.page_size, 10);
        assert_eq!(config.query.debounce_ms, 300);
        assert_eq!(config.query.search_field, "key");
        assert_eq!(config.query.date_field, "updatedAt");
        assert!(config.state.path.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_collection_url() {
        let mut config = Config::default();
        config.api.base_url = "https://cms.example.com/".to_string();
        config.api.collection = "articles".to_string();
        assert_eq!(config.collection_url(), "https://cms.example.com/items/articles");
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: Config = toml::from_str(
            r#"
            [query]
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.query.page_size, 25);
        assert_eq!(config.query.debounce_ms, 300);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config: Config = toml::from_str("[query]\npage_size = 0").unwrap();
        assert!(config.validate().is_err());
    }
}
