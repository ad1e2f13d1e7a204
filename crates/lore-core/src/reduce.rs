//! Tree reducer: prunes an attribute tree down to its matching leaves.
//!
//! Each string leaf is matched and, when it matches, highlighted. A mapping
//! keeps only the children that survived, in their original key order, and
//! disappears entirely when none did. Match counts are per leaf, so a leaf
//! with three occurrences still counts once.

use crate::error::SearchError;
use crate::highlight::{highlight_with, Markers};
use crate::matcher::Matcher;
use crate::types::{Attribute, Entity, Query, ReducedAttribute};

/// Result of reducing one attribute: the pruned value, if anything matched,
/// and the number of matched leaves beneath it.
pub type Reduction = (Option<ReducedAttribute>, usize);

/// Applies one compiled query to attribute trees.
#[derive(Debug, Clone, Copy)]
pub struct Reducer<'a> {
    matcher: &'a Matcher,
    markers: &'a Markers,
}

impl<'a> Reducer<'a> {
    pub fn new(matcher: &'a Matcher, markers: &'a Markers) -> Self {
        Self { matcher, markers }
    }

    pub fn reduce(&self, attribute: &Attribute) -> Reduction {
        match attribute {
            Attribute::Text(text) => self.reduce_leaf(text),
            Attribute::Map(pairs) => self.reduce_pairs(pairs),
            Attribute::Other(_) => (None, 0),
        }
    }

    /// Reduce an entity's root mapping.
    pub fn reduce_entity(&self, entity: &Entity) -> Reduction {
        self.reduce_pairs(&entity.fields)
    }

    fn reduce_leaf(&self, text: &str) -> Reduction {
        let spans = self.matcher.find_spans(text);
        if spans.is_empty() {
            return (None, 0);
        }
        let marked = highlight_with(text, &spans, self.markers);
        (Some(ReducedAttribute::Text(marked)), 1)
    }

    fn reduce_pairs(&self, pairs: &[(String, Attribute)]) -> Reduction {
        let mut kept = Vec::new();
        let mut count = 0;
        for (key, child) in pairs {
            if let (Some(reduced), n) = self.reduce(child) {
                kept.push((key.clone(), reduced));
                count += n;
            }
        }
        if kept.is_empty() {
            (None, 0)
        } else {
            (Some(ReducedAttribute::Map(kept)), count)
        }
    }
}

/// Reduce a single attribute against `query` with the default markers.
///
/// Blank query text reduces everything to `(None, 0)`.
pub fn reduce(attribute: &Attribute, query: &Query) -> Result<Reduction, SearchError> {
    let Some(matcher) = Matcher::new(query)? else {
        return Ok((None, 0));
    };
    let markers = Markers::default();
    Ok(Reducer::new(&matcher, &markers).reduce(attribute))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
