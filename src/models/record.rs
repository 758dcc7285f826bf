//! Record types returned by the content API.
//!
//! K_i: These types mirror the wire shapes of a Directus collection; the
//! fetch and controller layers stay generic and only require that a
//! response decodes to a sequence of records.

use serde::{Deserialize, Serialize};

/// A translation key record with its inlined translations.
///
/// Deserialization is lenient: unknown fields are ignored and everything
/// but `key` is optional, since `fields=*` responses vary by collection
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationKey {
    /// The translation key itself
    pub key: String,

    /// Placeholder variable names used by this key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,

    /// Creation timestamp (ISO-8601)
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last-update timestamp (ISO-8601)
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Related translation rows, requested inline via `fields=*,translations.*`
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub translations: serde_json::Value,
}

/// One row of a count-aggregate response.
///
/// K_i: Directus serializes aggregate counts as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountRow {
    /// Count as an integer-valued string
    pub count: String,
}

impl CountRow {
    /// Parse the count into an integer.
    pub fn value(&self) -> crate::models::Result<u64> {
        self.count
            .parse::<u64>()
            .map_err(|_| crate::models::LexikaError::Parse(format!(
                "count aggregate is not an integer: {:?}",
                self.count
            )))
    }
}

/// An inclusive date window, both bounds ISO-8601 date strings or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// A range only filters when both bounds are present.
    pub fn is_active(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }
}
