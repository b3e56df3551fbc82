//! Quick-search provider - fuzzy filtering of the working set
//!
//! The host's quick-open UI routes queries that carry our sentinel prefix to
//! this provider. Matching runs over the project-relative path of every open
//! document (display name for unsaved ones), scoring and highlight ranges
//! come from the matcher capability, and ranking follows the same rule as
//! the host's general quick-open so mixed result lists stay consistent.

pub mod format;
pub mod matcher;

pub use format::{format_result, FormattedResult, HighlightedSpan};
pub use matcher::{FuzzyMatcher, MatchResult, Matcher};

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::commands::Cmd;
use crate::model::{DocumentEntry, WorkingSet};

/// Default sentinel prefix routing a quick-open query to this provider
pub const DEFAULT_SEARCH_PREFIX: char = '/';

/// One ranked hit for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Relevance score; higher is better
    pub score: u32,
    /// The candidate string the matcher ran against (relative path or name)
    pub matched: String,
    /// Matched spans as byte ranges into `matched`
    pub ranges: Vec<Range<usize>>,
    /// Display name of the document
    pub label: String,
    /// Full path used to open the document on selection
    pub full_path: PathBuf,
}

/// Quick-open provider over the working set
#[derive(Debug, Clone, Copy)]
pub struct QuickSearchProvider {
    prefix: char,
}

impl QuickSearchProvider {
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }

    /// The sentinel prefix this provider answers to
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Whether a raw quick-open query belongs to this provider
    pub fn wants_query(&self, query: &str) -> bool {
        query.starts_with(self.prefix)
    }

    /// Rank the working set against a raw query
    ///
    /// The sentinel prefix is stripped before matching. Entries the matcher
    /// rejects are dropped; everything else is sorted by the shared ranking
    /// rule. Pure function of the snapshot, query, and matcher.
    pub fn search(
        &self,
        working_set: &WorkingSet,
        project_root: Option<&Path>,
        query: &str,
        matcher: &mut dyn Matcher,
    ) -> Vec<SearchResult> {
        let query = query
            .strip_prefix(self.prefix)
            .unwrap_or(query);

        let mut results: Vec<SearchResult> = working_set
            .entries()
            .iter()
            .filter_map(|entry| {
                let candidate = search_candidate(entry, project_root);
                let hit = matcher.match_candidate(&candidate, query)?;
                Some(SearchResult {
                    score: hit.score,
                    ranges: hit.ranges,
                    matched: candidate,
                    label: entry.name.clone(),
                    full_path: entry.full_path.clone(),
                })
            })
            .collect();

        basic_match_sort(&mut results);
        tracing::debug!(query, hits = results.len(), "working-set search");
        results
    }

    /// React to the user picking a result (None when nothing was selected)
    pub fn item_select(&self, selected: Option<&SearchResult>) -> Option<Cmd> {
        selected.map(|item| Cmd::OpenDocument {
            full_path: item.full_path.clone(),
        })
    }
}

impl Default for QuickSearchProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_PREFIX)
    }
}

/// The string a working-set entry is matched against
///
/// Unsaved documents have no meaningful path, so their display name stands
/// in. Everything else matches on the project-relative path when the file is
/// under the project root, falling back to the absolute path.
pub fn search_candidate(entry: &DocumentEntry, project_root: Option<&Path>) -> String {
    if entry.is_inaccessible {
        return entry.name.clone();
    }
    make_project_relative(&entry.full_path, project_root)
}

fn make_project_relative(path: &Path, project_root: Option<&Path>) -> String {
    match project_root.and_then(|root| path.strip_prefix(root).ok()) {
        Some(relative) => relative.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Shared quick-open ranking rule: score descending, ties alphabetical
///
/// The tie-break chain ends at the full path, making the order total - two
/// runs over the same snapshot always produce the same list.
pub fn basic_match_sort(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
            .then_with(|| a.full_path.cmp(&b.full_path))
    });
}
