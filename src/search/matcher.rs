//! Matcher capability - fuzzy scoring with highlight ranges
//!
//! The scoring algorithm itself is external: `FuzzyMatcher` delegates to
//! nucleo-matcher (the same engine behind the fuzzy file finder) and only
//! adapts its output. Queries are matched case-insensitively with path-tuned
//! bonuses; an empty query matches everything with score 0, which is what
//! lists the whole working set before the user starts typing.

use std::ops::Range;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Utf32Str};

/// Outcome of matching one candidate string against a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Relevance score; higher is better
    pub score: u32,
    /// Matched spans as byte ranges into the candidate, sorted and disjoint
    pub ranges: Vec<Range<usize>>,
}

/// Fuzzy-matching capability consumed by the quick-search provider
pub trait Matcher {
    /// Score a candidate against a query, or None when it does not match
    fn match_candidate(&mut self, candidate: &str, query: &str) -> Option<MatchResult>;
}

/// nucleo-matcher backed implementation
///
/// Holds the engine's scratch buffers plus the parsed pattern for the most
/// recent query, so matching a whole working set against one query parses
/// the pattern once.
pub struct FuzzyMatcher {
    matcher: nucleo_matcher::Matcher,
    pattern: Option<(String, Pattern)>,
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        let mut config = Config::DEFAULT;
        config.set_match_paths();
        Self {
            matcher: nucleo_matcher::Matcher::new(config),
            pattern: None,
        }
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for FuzzyMatcher {
    fn match_candidate(&mut self, candidate: &str, query: &str) -> Option<MatchResult> {
        let stale = match &self.pattern {
            Some((cached, _)) => cached != query,
            None => true,
        };
        if stale {
            let pattern =
                Pattern::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy);
            self.pattern = Some((query.to_string(), pattern));
        }
        let (_, pattern) = self.pattern.as_ref().expect("pattern cached above");

        let mut buf = Vec::new();
        let mut indices = Vec::new();
        let score = pattern.indices(
            Utf32Str::new(candidate, &mut buf),
            &mut self.matcher,
            &mut indices,
        )?;
        indices.sort_unstable();
        indices.dedup();

        Some(MatchResult {
            score,
            ranges: char_indices_to_byte_ranges(candidate, &indices),
        })
    }
}

/// Convert nucleo's char indices to byte ranges, coalescing adjacent chars
fn char_indices_to_byte_ranges(text: &str, indices: &[u32]) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut next = indices.iter().copied().peekable();

    for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
        if next.peek() == Some(&(char_idx as u32)) {
            next.next();
            let end = byte_idx + ch.len_utf8();
            match ranges.last_mut() {
                Some(last) if last.end == byte_idx => last.end = end,
                _ => ranges.push(byte_idx..end),
            }
        }
    }
    ranges
}
