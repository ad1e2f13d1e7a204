//! Highlighter: wraps matcher spans in marker strings.
//!
//! Spans are consumed exactly as the [`Matcher`](crate::Matcher) produced them;
//! nothing here searches the text again.

use crate::types::MatchSpan;
use serde::Deserialize;

/// Opening and closing marker inserted around each span.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Markers {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_close")]
    pub close: String,
}

fn default_open() -> String { "<mark>".to_string() }
fn default_close() -> String { "</mark>".to_string() }

impl Default for Markers {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
        }
    }
}

impl Markers {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Remove every marker pair, recovering the unhighlighted text.
    pub fn strip(&self, highlighted: &str) -> String {
        highlighted.replace(&self.open, "").replace(&self.close, "")
    }
}

/// Highlight with the default `<mark>` markers.
pub fn highlight(text: &str, spans: &[MatchSpan]) -> String {
    highlight_with(text, spans, &Markers::default())
}

/// Insert `markers` around each span of `text`.
///
/// Spans must be ordered, non-overlapping and on char boundaries, which is
/// what the matcher guarantees. A span that violates this (out of order or
/// out of range) is skipped rather than panicking.
pub fn highlight_with(text: &str, spans: &[MatchSpan], markers: &Markers) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(
        text.len() + spans.len() * (markers.open.len() + markers.close.len()),
    );
    let mut cursor = 0;
    for span in spans {
        let (Some(before), Some(matched)) = (text.get(cursor..span.start), text.get(span.start..span.end))
        else {
            tracing::debug!(?span, cursor, len = text.len(), "highlight: skipping invalid span");
            continue;
        };
        out.push_str(before);
        out.push_str(&markers.open);
        out.push_str(matched);
        out.push_str(&markers.close);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_spans;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn no_spans_returns_text_unchanged() {
        assert_eq!(highlight("plain text", &[]), "plain text");
    }

    #[test]
    fn spans_at_both_edges() {
        let text = "cat and cat";
        let spans = [MatchSpan::new(0, 3), MatchSpan::new(8, 11)];
        assert_eq!(highlight(text, &spans), "<mark>cat</mark> and <mark>cat</mark>");
    }

    #[test]
    fn whole_string_span() {
        assert_eq!(highlight("cat", &[MatchSpan::new(0, 3)]), "<mark>cat</mark>");
    }

    #[test]
    fn keeps_original_case_of_match() {
        let text = "Hello world";
        let spans = find_spans(text, "hello", false, false);
        assert_eq!(highlight(text, &spans), "<mark>Hello</mark> world");
    }

    #[test]
    fn custom_markers() {
        let markers = Markers::new(r#"<span class="highlight">"#, "</span>");
        let text = "a cat";
        let spans = find_spans(text, "cat", false, false);
        assert_eq!(highlight_with(text, &spans, &markers), r#"a <span class="highlight">cat</span>"#);
    }

    #[test]
    fn invalid_spans_are_skipped() {
        let text = "猫猫";
        // Second span starts inside the first character.
        let spans = [MatchSpan::new(3, 6), MatchSpan::new(1, 2), MatchSpan::new(4, 99)];
        assert_eq!(highlight(text, &spans), "猫<mark>猫</mark>");
    }

    #[test]
    fn multibyte_highlight() {
        let text = "勇敢的猫主人";
        let spans = find_spans(text, "猫", true, false);
        assert_eq!(highlight(text, &spans), "勇敢的<mark>猫</mark>主人");
    }

    proptest! {
        #[test]
        fn stripping_markers_round_trips(
            text in "[a-zA-Z _.猫é]{0,40}",
            query in "[a-zA-Z猫é]{1,3}",
            case_sensitive in any::<bool>(),
            whole_words in any::<bool>(),
        ) {
            let spans = find_spans(&text, &query, case_sensitive, whole_words);
            let highlighted = highlight(&text, &spans);
            prop_assert_eq!(Markers::default().strip(&highlighted), text);
        }

        #[test]
        fn marker_count_equals_span_count(
            text in "[a-c ]{0,40}",
            query in "[a-c]{1,2}",
        ) {
            let spans = find_spans(&text, &query, true, false);
            let highlighted = highlight(&text, &spans);
            prop_assert_eq!(highlighted.matches("<mark>").count(), spans.len());
            prop_assert_eq!(highlighted.matches("</mark>").count(), spans.len());
        }
    }
}
