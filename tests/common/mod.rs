//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::ops::Range;
use std::path::PathBuf;

use workset_nav::commands::Cmd;
use workset_nav::model::{AddonModel, DocumentEntry, DocumentKey, EditorId};
use workset_nav::search::{MatchResult, Matcher};

/// Entry for a document backed by a file under /proj
pub fn entry(name: &str) -> DocumentEntry {
    DocumentEntry::new(name, format!("/proj/{name}"))
}

/// Create a model whose working set contains the given documents
pub fn model_with_documents(names: &[&str]) -> AddonModel {
    let mut model = AddonModel::default();
    for name in names {
        model.working_set.open(entry(name));
    }
    model.project_root = Some(PathBuf::from("/proj"));
    model
}

/// Mark one of the documents as active
pub fn activate(model: &mut AddonModel, name: &str) {
    model
        .working_set
        .set_active(Some(DocumentKey::Path(PathBuf::from(format!("/proj/{name}")))));
}

/// Test double standing in for the host: interprets commands and keeps
/// observable state (open requests, cursor moves, live subscriptions)
///
/// Subscription bookkeeping is strict: subscribing twice to the same editor
/// or unsubscribing without a live subscription fails the test immediately,
/// which is exactly the listener-leak class of bug the tracker must rule out.
#[derive(Debug, Default)]
pub struct HostSpy {
    pub subscriptions: Vec<EditorId>,
    pub opened: Vec<PathBuf>,
    pub cursor_moves: Vec<(usize, usize, bool)>,
    pub searches: Vec<String>,
}

impl HostSpy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of an update call
    pub fn apply(&mut self, cmd: Option<Cmd>) {
        if let Some(cmd) = cmd {
            self.apply_cmd(cmd);
        }
    }

    fn apply_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.apply_cmd(cmd);
                }
            }
            Cmd::SubscribeDocumentChanges(editor) => {
                assert!(
                    !self.subscriptions.contains(&editor),
                    "dual subscription to {editor:?}"
                );
                self.subscriptions.push(editor);
            }
            Cmd::UnsubscribeDocumentChanges(editor) => {
                let index = self
                    .subscriptions
                    .iter()
                    .position(|live| *live == editor)
                    .unwrap_or_else(|| panic!("unsubscribe from {editor:?} without subscription"));
                self.subscriptions.remove(index);
            }
            Cmd::OpenDocument { full_path } => self.opened.push(full_path),
            Cmd::SetCursor {
                line,
                column,
                scroll_into_view,
            } => self.cursor_moves.push((line, column, scroll_into_view)),
            Cmd::BeginQuickSearch { query } => self.searches.push(query),
        }
    }

    /// Name of the last document the host was asked to open
    pub fn last_opened(&self) -> Option<&str> {
        self.opened
            .last()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
    }
}

/// Deterministic matcher for contract tests: case-insensitive substring
/// match, scored so shorter candidates rank higher
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn match_candidate(&mut self, candidate: &str, query: &str) -> Option<MatchResult> {
        let start = candidate.to_lowercase().find(&query.to_lowercase())?;
        let range: Range<usize> = start..start + query.len();
        Some(MatchResult {
            score: 1000u32.saturating_sub(candidate.len() as u32),
            ranges: if query.is_empty() { vec![] } else { vec![range] },
        })
    }
}
