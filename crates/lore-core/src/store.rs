//! Store: the entity collection searched by every query.
//!
//! A [`Store`] is immutable once built. [`StoreHandle`] owns the current
//! snapshot behind an `Arc` so that a search in flight keeps reading the
//! snapshot it started with while a reload swaps in a new one.

use crate::error::StoreError;
use crate::types::{Attribute, Entity};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Entities keyed by unique name, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    entities: Vec<(String, Entity)>,
}

impl Store {
    /// Build a store from `(name, entity)` pairs. A repeated name replaces the
    /// earlier entity but keeps its position.
    pub fn from_entities<K, I>(entities: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Entity)>,
    {
        let mut store = Self::default();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (name, entity) in entities {
            let name = name.into();
            match positions.get(&name) {
                Some(&at) => store.entities[at].1 = entity,
                None => {
                    positions.insert(name.clone(), store.entities.len());
                    store.entities.push((name, entity));
                }
            }
        }
        store
    }

    /// Parse a JSON document of the form `{ "<entity>": { ... }, ... }`.
    ///
    /// Entities whose value is not an object are skipped with a warning.
    pub fn from_json_str(src: &str) -> Result<Self, StoreError> {
        let doc: serde_json::Value = serde_json::from_str(src).map_err(StoreError::Json)?;
        Self::from_json_value(doc)
    }

    pub fn from_json_value(doc: serde_json::Value) -> Result<Self, StoreError> {
        let top = match doc {
            serde_json::Value::Object(top) => top,
            other => return Err(StoreError::NotAnObject { found: json_kind(&other) }),
        };

        // Object keys are already unique.
        let mut store = Self::default();
        for (name, value) in top {
            match Attribute::from(value) {
                Attribute::Map(fields) => store.entities.push((name, Entity { fields })),
                _ => tracing::warn!(entity = %name, "store: entity is not an object, skipping"),
            }
        }
        Ok(store)
    }

    /// Read and parse the store document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = match Self::from_json_str(&src) {
            Err(StoreError::Json(source)) => {
                return Err(StoreError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            }
            other => other?,
        };
        tracing::debug!(path = %path.display(), entities = store.len(), "store: loaded");
        Ok(store)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entity)> {
        self.entities.iter().map(|(name, entity)| (name.as_str(), entity))
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Snapshot handle
// ---------------------------------------------------------------------------

/// When the store document is (re)read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadPolicy {
    /// Load once when the handle is opened.
    #[default]
    Startup,
    /// Re-read the document before every search.
    PerRequest,
}

/// Shared, swappable reference to the current store snapshot.
#[derive(Debug)]
pub struct StoreHandle {
    path: PathBuf,
    policy: ReloadPolicy,
    current: RwLock<Arc<Store>>,
}

impl StoreHandle {
    /// Load the document at `path` and wrap it.
    pub fn open(path: impl Into<PathBuf>, policy: ReloadPolicy) -> Result<Self, StoreError> {
        let path = path.into();
        let store = Store::load(&path)?;
        Ok(Self {
            path,
            policy,
            current: RwLock::new(Arc::new(store)),
        })
    }

    /// Wrap an already built store. [`reload`](Self::reload) will read `path`.
    pub fn with_store(path: impl Into<PathBuf>, policy: ReloadPolicy, store: Store) -> Self {
        Self {
            path: path.into(),
            policy,
            current: RwLock::new(Arc::new(store)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> ReloadPolicy {
        self.policy
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Store> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-read the document and swap it in. On failure the previous snapshot
    /// stays current.
    pub fn reload(&self) -> Result<Arc<Store>, StoreError> {
        let fresh = Arc::new(Store::load(&self.path)?);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&fresh);
        tracing::info!(path = %self.path.display(), entities = fresh.len(), "store: reloaded");
        Ok(fresh)
    }

    /// The snapshot a new search should use under the configured policy.
    pub fn snapshot_for_search(&self) -> Result<Arc<Store>, StoreError> {
        match self.policy {
            ReloadPolicy::Startup => Ok(self.snapshot()),
            ReloadPolicy::PerRequest => self.reload(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
