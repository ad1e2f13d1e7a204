//! Terminal listing for `lore query`.
//!
//! This is the presentation boundary: attribute keys are mapped to display
//! labels from `[labels]` here and nowhere else, and a relevance badge is
//! drawn when a result carries an externally supplied score.

use lore_core::config::Config;
use lore_core::{ReducedAttribute, SearchResult};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Badge text for a relevance score, if it earns one.
pub fn relevance_badge(relevance: Option<f32>) -> Option<&'static str> {
    match relevance {
        Some(r) if r >= 0.8 => Some("highly relevant"),
        Some(r) if r >= 0.5 => Some("moderately relevant"),
        _ => None,
    }
}

/// Render `results` as an indented, labelled listing.
pub fn render_results(results: &[SearchResult], config: &Config) -> String {
    if results.is_empty() {
        return "no results\n".to_string();
    }

    let mut out = String::new();
    let noun = if results.len() == 1 { "result" } else { "results" };
    let _ = writeln!(out, "{} {noun}", results.len());

    for result in results {
        out.push('\n');
        match relevance_badge(result.relevance) {
            Some(badge) => {
                let _ = writeln!(out, "{} [{badge}]", result.entity);
            }
            None => {
                let _ = writeln!(out, "{}", result.entity);
            }
        }
        if let ReducedAttribute::Map(pairs) = &result.info {
            render_pairs(&mut out, pairs, config, 1);
        }
        if result.match_count > 1 {
            let _ = writeln!(out, "{INDENT}({} matched fields)", result.match_count);
        }
    }
    out
}

fn render_pairs(out: &mut String, pairs: &[(String, ReducedAttribute)], config: &Config, depth: usize) {
    let pad = INDENT.repeat(depth);
    for (key, value) in pairs {
        let label = config.label(key);
        match value {
            ReducedAttribute::Text(text) => {
                let _ = writeln!(out, "{pad}{label}: {text}");
            }
            ReducedAttribute::Map(children) => {
                let _ = writeln!(out, "{pad}{label}:");
                render_pairs(out, children, config, depth + 1);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
