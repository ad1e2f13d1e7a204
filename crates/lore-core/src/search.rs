//! Search orchestrator: runs the reducer over every entity in a store.
//!
//! The store is scanned in full on every call; there is no index. Results
//! come back in store order. Relevance is never computed here: results carry
//! `relevance: None`, and `sort_by_relevance` only reorders results whose
//! relevance was supplied by the caller (see [`sort_by_relevance`]).

use crate::error::SearchError;
use crate::highlight::Markers;
use crate::matcher::Matcher;
use crate::reduce::Reducer;
use crate::store::Store;
use crate::types::{Query, SearchResult};

/// Search `store` with the default `<mark>` markers.
pub fn search(store: &Store, query: &Query) -> Result<Vec<SearchResult>, SearchError> {
    search_with(store, query, &Markers::default())
}

/// Search `store`, highlighting matches with `markers`.
pub fn search_with(store: &Store, query: &Query, markers: &Markers) -> Result<Vec<SearchResult>, SearchError> {
    let Some(matcher) = Matcher::new(query)? else {
        tracing::debug!("search: query matches nothing, skipping scan");
        return Ok(Vec::new());
    };
    if query.fuzzy {
        tracing::debug!("search: fuzzy matching is not supported, using exact matching");
    }

    let reducer = Reducer::new(&matcher, markers);
    let mut results: Vec<SearchResult> = store
        .iter()
        .filter_map(|(name, entity)| match reducer.reduce_entity(entity) {
            (Some(info), match_count) if match_count > 0 => Some(SearchResult {
                entity: name.to_string(),
                info,
                match_count,
                relevance: None,
            }),
            _ => None,
        })
        .collect();

    if query.sort_by_relevance {
        sort_by_relevance(&mut results);
    }

    tracing::debug!(
        query = %query.needle(),
        case_sensitive = query.case_sensitive,
        whole_words = query.whole_words,
        entities = store.len(),
        results = results.len(),
        "search: done"
    );
    Ok(results)
}

/// Stable sort by relevance, highest first, results without a score last.
///
/// Results produced by [`search`] have no score, so their order is unchanged.
pub fn sort_by_relevance(results: &mut [SearchResult]) {
    results.sort_by(|a, b| match (a.relevance, b.relevance) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
