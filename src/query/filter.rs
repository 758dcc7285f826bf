//! Filter expressions for collection queries.
//!
//! K_i: The API takes a JSON filter object keyed by field name; lexika
//! serializes it opaquely and never validates field names or values.

use crate::models::{LexikaError, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One filter predicate, serialized to the API's operator shape.
#[derive(Debug, Clone, Serialize)]
pub enum FilterExpr {
    /// Substring match: `{"_contains": "..."}`
    #[serde(rename = "_contains")]
    Contains(String),

    /// Inclusive window: `{"_between": ["...", "..."]}`
    #[serde(rename = "_between")]
    Between([String; 2]),
}

/// Ordered field → predicate mapping.
///
/// Insertion order is preserved through serialization so the emitted JSON
/// (and therefore the encoded URL) is stable.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    entries: Vec<(String, FilterExpr)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a substring predicate on `field`.
    pub fn contains(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.entries
            .push((field.into(), FilterExpr::Contains(value.into())));
    }

    /// Add a between predicate on `field`.
    pub fn between(
        &mut self,
        field: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) {
        self.entries
            .push((field.into(), FilterExpr::Between([start.into(), end.into()])));
    }

    /// Serialize to the JSON string sent in the `filter` query parameter.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| LexikaError::Parse(format!("serializing filter: {e}")))
    }
}

impl Serialize for FilterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, expr) in &self.entries {
            map.serialize_entry(field, expr)?;
        }
        map.end()
    }
}
