//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The host translates
//! its own notifications (document lifecycle, editor focus, text changes)
//! and command invocations into messages and feeds them to `update`.

use std::path::PathBuf;

use crate::model::{ChangeEvent, DocumentEntry, DocumentKey, EditorId};

/// Working-set mirror messages (document lifecycle, host-owned)
#[derive(Debug, Clone)]
pub enum WorkingSetMsg {
    /// A document was added to the working set (appended in list order)
    DocumentOpened(DocumentEntry),
    /// A document was removed from the working set
    DocumentClosed(DocumentKey),
    /// The host switched the active document (None when focus moved to a
    /// buffer outside the working set)
    ActiveDocumentChanged(Option<DocumentKey>),
    /// The project root changed (affects search display paths)
    ProjectRootChanged(Option<PathBuf>),
}

/// Navigation command messages
#[derive(Debug, Clone)]
pub enum NavMsg {
    /// Switch to the next document in working-set order (Ctrl-])
    GoNext,
    /// Switch to the previous document in working-set order (Ctrl-[)
    GoPrev,
    /// Launch quick-open preloaded with the working-set prefix (Ctrl-Shift-E)
    SearchWorkingSet,
}

/// Edit-position tracker messages
#[derive(Debug, Clone)]
pub enum TrackerMsg {
    /// The host moved focus to another editor (None when no editor has focus)
    ActiveEditorChanged(Option<EditorId>),
    /// The bound editor's document changed
    DocumentChanged(ChangeEvent),
    /// The host destroyed an editor; its recorded position is dropped
    EditorDestroyed(EditorId),
    /// Jump to the bound editor's last edit position (Ctrl-8)
    GotoLastEdit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Working-set mirror messages (document lifecycle)
    WorkingSet(WorkingSetMsg),
    /// Navigation messages (cycling, quick-open launch)
    Nav(NavMsg),
    /// Edit-position tracker messages
    Tracker(TrackerMsg),
    /// The host is unloading the add-ons; release all subscriptions
    Unload,
}

// Convenience constructors for common messages
impl Msg {
    /// Create a next-document navigation message
    pub fn go_next() -> Self {
        Msg::Nav(NavMsg::GoNext)
    }

    /// Create a previous-document navigation message
    pub fn go_prev() -> Self {
        Msg::Nav(NavMsg::GoPrev)
    }

    /// Create a goto-last-edit message
    pub fn goto_last_edit() -> Self {
        Msg::Tracker(TrackerMsg::GotoLastEdit)
    }

    /// Create an active-editor transition message
    pub fn active_editor_changed(editor: Option<EditorId>) -> Self {
        Msg::Tracker(TrackerMsg::ActiveEditorChanged(editor))
    }
}
