//! lore-core: keyword search over a nested lore book.
//!
//! This crate holds the search pipeline and the types it shares with the
//! transport and CLI layers.
//!
//! # Architecture
//!
//! ```text
//! search ──► (per entity) reduce ──► (per leaf) matcher ──► highlight
//!    ▲
//!    └── Store snapshot (store::StoreHandle)
//! ```
//!
//! Every step below [`store`] is a pure function over an immutable snapshot,
//! so concurrent searches need no coordination.

pub mod config;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod reduce;
pub mod search;
pub mod store;
pub mod types;

pub use error::{SearchError, StoreError};
pub use highlight::{highlight, highlight_with, Markers};
pub use matcher::{find_spans, Matcher};
pub use reduce::{reduce, Reducer, Reduction};
pub use search::{search, search_with, sort_by_relevance};
pub use store::{ReloadPolicy, Store, StoreHandle};
pub use types::{Attribute, Entity, MatchSpan, Query, ReducedAttribute, SearchResult};
