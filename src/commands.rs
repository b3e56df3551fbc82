//! Command types for the Elm-style architecture
//!
//! Two kinds of commands live here: the palette registry (identifiers and
//! labels the host registers under its own command/menu/key-binding
//! mechanism) and the `Cmd` side effects returned from update functions for
//! the host to perform.

use std::path::PathBuf;

use crate::messages::{Msg, NavMsg, TrackerMsg};
use crate::model::EditorId;

// ============================================================================
// Command Registry
// ============================================================================

/// Identifies a command the host can invoke by name or key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Quick-open restricted to the working set
    SearchWorkingSet,
    /// Next document in working-set order
    GoNextDocument,
    /// Previous document in working-set order
    GoPrevDocument,
    /// Jump to the last edit position in the active editor
    GotoLastEdit,
}

/// A command definition for host registration
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of all commands the add-ons contribute
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::SearchWorkingSet,
        label: "Go to Open File...",
        keybinding: Some("Ctrl-Shift-E"),
    },
    CommandDef {
        id: CommandId::GoNextDocument,
        label: "Next Document in List",
        keybinding: Some("Ctrl-]"),
    },
    CommandDef {
        id: CommandId::GoPrevDocument,
        label: "Previous Document in List",
        keybinding: Some("Ctrl-["),
    },
    CommandDef {
        id: CommandId::GotoLastEdit,
        label: "Go to Last Edit",
        keybinding: Some("Ctrl-8"),
    },
];

impl CommandId {
    /// The message an invocation of this command dispatches
    pub fn message(self) -> Msg {
        match self {
            CommandId::SearchWorkingSet => Msg::Nav(NavMsg::SearchWorkingSet),
            CommandId::GoNextDocument => Msg::Nav(NavMsg::GoNext),
            CommandId::GoPrevDocument => Msg::Nav(NavMsg::GoPrev),
            CommandId::GotoLastEdit => Msg::Tracker(TrackerMsg::GotoLastEdit),
        }
    }
}

/// Look up a command's registry entry
pub fn command_def(id: CommandId) -> &'static CommandDef {
    COMMANDS
        .iter()
        .find(|def| def.id == id)
        .expect("every CommandId has a registry entry")
}

/// Default key binding display string for a command
pub fn keybinding_for_command(id: CommandId) -> Option<&'static str> {
    command_def(id).keybinding
}

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by update functions for the host to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Open (or focus) the document at a path
    OpenDocument { full_path: PathBuf },
    /// Move the active editor's cursor, optionally scrolling it into view
    SetCursor {
        line: usize,
        column: usize,
        scroll_into_view: bool,
    },
    /// Attach our change listener to this editor's document
    SubscribeDocumentChanges(EditorId),
    /// Detach our change listener from this editor's document
    UnsubscribeDocumentChanges(EditorId),
    /// Open the host's quick-open UI preloaded with a query
    BeginQuickSearch { query: String },
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Collapse a command list: no wrapper for zero or one commands
    ///
    /// Batch order is significant - the host applies commands in sequence,
    /// which is what makes detach-before-attach transitions atomic.
    pub fn batch(mut cmds: Vec<Cmd>) -> Option<Cmd> {
        match cmds.len() {
            0 => None,
            1 => Some(cmds.remove(0)),
            _ => Some(Cmd::Batch(cmds)),
        }
    }
}
