//! Edit position tracker - remembers where the last edit happened per editor
//!
//! The tracker follows the active editor: whenever the host switches editors
//! it rebinds its change subscription, and every change notification records
//! the start of the earliest changed region for the bound editor. Positions
//! live in an explicit per-editor map (not on the host's editor objects) and
//! are evicted when the host destroys an editor.
//!
//! The binding discipline is the delicate part: the old editor's listener
//! must be detached before the new one is attached, and a transition to "no
//! editor" must still detach. Subscribe/unsubscribe themselves are host
//! operations, so the transition logic lives in `update::tracker` where the
//! resulting commands are assembled; this type only owns the state.

use std::collections::HashMap;

use super::editor::{ChangeEvent, EditorId, Position};

/// Per-editor last-edit state with a single bound-editor slot
#[derive(Debug, Clone, Default)]
pub struct EditPositionTracker {
    /// The editor whose document currently has our change listener
    bound: Option<EditorId>,
    /// Last recorded edit position per editor
    last_edits: HashMap<EditorId, Position>,
}

impl EditPositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently bound editor, if any
    pub fn bound_editor(&self) -> Option<EditorId> {
        self.bound
    }

    /// Last recorded edit position for an editor
    pub fn last_edit(&self, editor: EditorId) -> Option<Position> {
        self.last_edits.get(&editor).copied()
    }

    /// Clear the bound-editor slot, returning the editor that was bound
    ///
    /// The caller is responsible for detaching the returned editor's change
    /// listener before binding another editor.
    pub fn unbind(&mut self) -> Option<EditorId> {
        self.bound.take()
    }

    /// Bind a new editor
    ///
    /// Only legal once any previous binding has been released; `unbind` and
    /// `bind` are split exactly so the detach-then-attach order is visible at
    /// the call site.
    pub fn bind(&mut self, editor: EditorId) {
        debug_assert!(
            self.bound.is_none(),
            "binding {:?} while {:?} is still bound",
            editor,
            self.bound
        );
        self.bound = Some(editor);
    }

    /// Record a change notification against the bound editor
    ///
    /// Only the first region's start is kept; multi-region changes (e.g.
    /// multi-cursor typing) collapse to their earliest span. Returns the
    /// recorded position, or None when no editor is bound or the event is
    /// empty.
    pub fn record_change(&mut self, event: &ChangeEvent) -> Option<Position> {
        let editor = self.bound?;
        let start = event.first_region_start()?;
        self.last_edits.insert(editor, start);
        Some(start)
    }

    /// Drop the recorded position for a destroyed editor
    pub fn evict(&mut self, editor: EditorId) {
        self.last_edits.remove(&editor);
    }

    /// Number of editors with a recorded position
    pub fn tracked_editors(&self) -> usize {
        self.last_edits.len()
    }
}
