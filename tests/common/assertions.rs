//! Domain-specific assertion macros for lore harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! search invariant was violated.

use lore_core::{ReducedAttribute, SearchResult};

// ---------------------------------------------------------------------------
// Result list assertions
// ---------------------------------------------------------------------------

/// Assert the entity names of a result list, in order.
///
/// ```rust
/// assert_entities!(results, ["Alice", "Bob"]);
/// ```
#[macro_export]
macro_rules! assert_entities {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let results: &[lore_core::SearchResult] = &$results;
        let actual: Vec<&str> = results.iter().map(|r| r.entity.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_entities! failed: result order/content differs");
    }};
}

/// Assert the highlighted text at a `/`-separated key path inside a result.
///
/// ```rust
/// assert_leaf!(result, "sentence/content", "<mark>Hello</mark> world");
/// ```
#[macro_export]
macro_rules! assert_leaf {
    ($result:expr, $path:expr, $expected:expr) => {{
        let result: &lore_core::SearchResult = &$result;
        let path: &str = $path;
        match $crate::common::leaf_at(result, path) {
            Some(actual) => pretty_assertions::assert_eq!(actual, $expected, "assert_leaf! failed at {:?}", path),
            None => panic!(
                "assert_leaf! failed: no leaf at {:?} in {:?}.\n  info: {:?}",
                path, result.entity, result.info
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Follow a `/`-separated key path to a leaf.
pub fn leaf_at<'a>(result: &'a SearchResult, path: &str) -> Option<&'a str> {
    let mut node = &result.info;
    for key in path.split('/') {
        node = node.get(key)?;
    }
    node.as_text()
}

/// Assert that no mapping anywhere in a reduced tree is empty.
pub fn assert_no_empty_branches(node: &ReducedAttribute) {
    if let ReducedAttribute::Map(pairs) = node {
        assert!(!pairs.is_empty(), "reduced tree contains an empty mapping");
        for (_, child) in pairs {
            assert_no_empty_branches(child);
        }
    }
}

/// Count leaves in a reduced tree.
pub fn leaf_count(node: &ReducedAttribute) -> usize {
    match node {
        ReducedAttribute::Text(_) => 1,
        ReducedAttribute::Map(pairs) => pairs.iter().map(|(_, child)| leaf_count(child)).sum(),
    }
}
