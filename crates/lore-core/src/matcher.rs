//! Matcher: decides whether a string matches a query and where.
//!
//! The query text is always taken literally: it is escaped before being
//! compiled, so `.`, `*`, `(` and friends match themselves. Whole-word mode
//! wraps the literal in Unicode `\b` assertions, which gives the usual
//! word-boundary behaviour at string edges and next to punctuation.
//! Case-insensitive mode uses simple case folding, so offsets always index
//! the original text and never land inside a multi-byte character.
//!
//! The fuzzy flag on [`Query`] is not consulted here; an approximate matcher
//! would be a separate strategy.

use crate::types::{MatchSpan, Query};
use regex::{Regex, RegexBuilder};

/// A query compiled once and applied to many leaves.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Regex,
}

impl Matcher {
    /// Compile `query`.
    ///
    /// Returns `Ok(None)` when nothing can match: blank query text, or a
    /// needle whose compiled form exceeds the regex size limit (long
    /// case-insensitive queries expand into large case-folded automata).
    pub fn new(query: &Query) -> Result<Option<Self>, regex::Error> {
        if query.is_blank() {
            return Ok(None);
        }
        match Self::compile(query.needle(), query.case_sensitive, query.whole_words) {
            Ok(matcher) => Ok(Some(matcher)),
            Err(regex::Error::CompiledTooBig(limit)) => {
                tracing::warn!(
                    limit,
                    needle_len = query.needle().len(),
                    "matcher: query too large to compile, matching nothing"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn compile(needle: &str, case_sensitive: bool, whole_words: bool) -> Result<Self, regex::Error> {
        let literal = regex::escape(needle);
        let source = if whole_words {
            format!(r"\b{literal}\b")
        } else {
            literal
        };
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .build()?;
        Ok(Self { pattern })
    }

    /// All non-overlapping matches in `text`, left to right.
    pub fn find_spans(&self, text: &str) -> Vec<MatchSpan> {
        self.pattern
            .find_iter(text)
            .map(|m| MatchSpan::new(m.start(), m.end()))
            .collect()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// One-shot span search for a single string.
///
/// Blank `query` yields no spans. A query too large to compile is logged and
/// also yields no spans; use [`Matcher::new`] to observe that error.
pub fn find_spans(text: &str, query: &str, case_sensitive: bool, whole_words: bool) -> Vec<MatchSpan> {
    let needle = query.trim();
    if needle.is_empty() {
        return Vec::new();
    }
    match Matcher::compile(needle, case_sensitive, whole_words) {
        Ok(matcher) => matcher.find_spans(text),
        Err(e) => {
            tracing::warn!(error = %e, "matcher: query rejected");
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
