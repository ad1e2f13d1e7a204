//! Error types for lore-core.
//!
//! The search pipeline itself performs no I/O; the only fallible steps are
//! loading the store document and compiling the query pattern.

use std::path::PathBuf;

/// Failure to produce a [`Store`](crate::Store) from a document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("store document must be a JSON object keyed by entity name, found {found}")]
    NotAnObject { found: &'static str },
}

/// Failure of a single search call.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("query could not be compiled: {0}")]
    Pattern(#[from] regex::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
