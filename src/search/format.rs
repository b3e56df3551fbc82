//! Result formatting - split a match into filename and path display zones
//!
//! The quick-open list shows each hit twice: the bare filename as the main
//! label and the full relative path as secondary text underneath. Both carry
//! the match highlights; the filename zone only keeps the highlights that
//! fall inside the final path segment, rebased to it.

use std::ops::Range;

use super::SearchResult;

/// A run of display text, either highlighted (matched) or plain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedSpan {
    pub text: String,
    pub is_match: bool,
}

/// Display fragment for one search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResult {
    /// Main label: the bare filename with its highlights
    pub name: Vec<HighlightedSpan>,
    /// Secondary line: the full matched path with all highlights
    pub path: Vec<HighlightedSpan>,
}

/// Build the two display zones for a result
pub fn format_result(result: &SearchResult) -> FormattedResult {
    // Rightmost separator; a candidate without one is all filename.
    let name_start = result
        .matched
        .rfind(std::path::MAIN_SEPARATOR)
        .map(|idx| idx + 1)
        .unwrap_or(0);

    let name_ranges = rebase_into_segment(&result.ranges, name_start);
    FormattedResult {
        name: spans_for(&result.matched[name_start..], &name_ranges),
        path: spans_for(&result.matched, &result.ranges),
    }
}

/// Keep only the parts of `ranges` at or after `offset`, shifted to start
/// there; a range straddling the boundary is clipped
fn rebase_into_segment(ranges: &[Range<usize>], offset: usize) -> Vec<Range<usize>> {
    ranges
        .iter()
        .filter(|range| range.end > offset)
        .map(|range| range.start.max(offset) - offset..range.end - offset)
        .collect()
}

/// Cut text into alternating plain/highlighted spans
///
/// Ranges must be sorted, disjoint, and within bounds - the matcher
/// guarantees all three.
fn spans_for(text: &str, ranges: &[Range<usize>]) -> Vec<HighlightedSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for range in ranges {
        if range.start > cursor {
            spans.push(HighlightedSpan {
                text: text[cursor..range.start].to_string(),
                is_match: false,
            });
        }
        spans.push(HighlightedSpan {
            text: text[range.start..range.end].to_string(),
            is_match: true,
        });
        cursor = range.end;
    }

    if cursor < text.len() {
        spans.push(HighlightedSpan {
            text: text[cursor..].to_string(),
            is_match: false,
        });
    }
    spans
}
