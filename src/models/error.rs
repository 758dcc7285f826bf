//! Error types for lexika.
//!
//! Epistemic taxonomy:
//! - B_i falsified: Expected failures (bad URL, malformed response)
//! - I^B materialized: Infrastructure failures (network, HTTP status)
//! - K_i violated: Configuration that cannot describe a reachable API

use thiserror::Error;

/// Top-level error type for lexika.
#[derive(Debug, Error)]
pub enum LexikaError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! Status: {status} ({url})")]
    Http { status: u16, url: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] super::ConfigError),
}

impl LexikaError {
    /// Check if this error is worth another attempt.
    ///
    /// B_i: transient conditions (network, server status, truncated body)
    /// may clear on retry; a bad URL or config never will.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { .. } | Self::Parse(_))
    }
}

/// Result type alias for lexika.
pub type Result<T> = std::result::Result<T, LexikaError>;
