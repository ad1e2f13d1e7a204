//! Core types for lore-core.
//!
//! This module defines the data structures shared across the search pipeline:
//! the [`Attribute`] tree held by every [`Entity`], the immutable [`Query`],
//! the [`MatchSpan`] produced by the matcher, and the pruned
//! [`ReducedAttribute`] / [`SearchResult`] values handed back to callers.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Store-side types
// ---------------------------------------------------------------------------

/// A value inside an entity: either a string leaf or a nested mapping.
///
/// Anything else found in the source document (numbers, booleans, null,
/// arrays) is kept as [`Attribute::Other`] so traversal can skip it without
/// failing the search.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Text(String),
    /// Child attributes in document order.
    Map(Vec<(String, Attribute)>),
    Other(serde_json::Value),
}

impl Attribute {
    /// Build a mapping attribute from `(key, value)` pairs, keeping their order.
    pub fn map<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Attribute)>,
    {
        Attribute::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Attribute::Text(value.into())
    }
}

impl From<serde_json::Value> for Attribute {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Attribute::Text(s),
            serde_json::Value::Object(obj) => {
                Attribute::Map(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            other => Attribute::Other(other),
        }
    }
}

/// A named record in the store. The root is always a mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    pub fields: Vec<(String, Attribute)>,
}

impl Entity {
    pub fn new<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Attribute)>,
    {
        Self {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// An immutable search request.
///
/// Deserializes from the wire names used by the HTTP transport
/// (`query`, `caseSensitive`, `wholeWords`, `fuzzy`, `sortByRelevance`); every
/// flag defaults to `false` and a missing `query` is empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(rename = "query", default)]
    pub text: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub whole_words: bool,
    /// Accepted but not implemented: matching stays exact when set.
    #[serde(default)]
    pub fuzzy: bool,
    #[serde(default)]
    pub sort_by_relevance: bool,
}

impl Query {
    /// A case-insensitive substring query for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn case_sensitive(mut self, on: bool) -> Self {
        self.case_sensitive = on;
        self
    }

    pub fn whole_words(mut self, on: bool) -> Self {
        self.whole_words = on;
        self
    }

    pub fn fuzzy(mut self, on: bool) -> Self {
        self.fuzzy = on;
        self
    }

    pub fn sort_by_relevance(mut self, on: bool) -> Self {
        self.sort_by_relevance = on;
        self
    }

    /// The text actually searched for: `text` with surrounding whitespace removed.
    pub fn needle(&self) -> &str {
        self.text.trim()
    }

    /// True when there is nothing to search for.
    pub fn is_blank(&self) -> bool {
        self.needle().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Match output
// ---------------------------------------------------------------------------

/// Half-open byte range `[start, end)` of one match in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An attribute pruned to its matching branches, leaves highlighted.
#[derive(Debug, Clone, PartialEq)]
pub enum ReducedAttribute {
    Text(String),
    Map(Vec<(String, ReducedAttribute)>),
}

impl ReducedAttribute {
    /// Look up a direct child of a mapping by key.
    pub fn get(&self, key: &str) -> Option<&ReducedAttribute> {
        match self {
            ReducedAttribute::Map(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            ReducedAttribute::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ReducedAttribute::Text(s) => Some(s),
            ReducedAttribute::Map(_) => None,
        }
    }

    /// Keys of a mapping in output order; empty for a leaf.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            ReducedAttribute::Map(pairs) => pairs.iter().map(|(k, _)| k.as_str()).collect(),
            ReducedAttribute::Text(_) => Vec::new(),
        }
    }
}

impl Serialize for ReducedAttribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReducedAttribute::Text(s) => serializer.serialize_str(s),
            ReducedAttribute::Map(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (k, v) in pairs {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// One matched entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub entity: String,
    /// Always the mapping form of [`ReducedAttribute`].
    pub info: ReducedAttribute,
    /// Number of matched leaves (not spans) under this entity.
    pub match_count: usize,
    /// Externally supplied score. The core never fills this in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f32>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
