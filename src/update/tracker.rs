//! Edit-position tracker message handlers (subscription lifecycle, jumps)
//!
//! The active-editor transition is the one place where listener bookkeeping
//! happens, and its ordering is load-bearing: the old editor's listener is
//! always detached before the new one is attached, inside a single ordered
//! command batch. The host delivers editor transitions serially and applies
//! batches in order, so there is never a moment with two live subscriptions
//! or with a subscription left behind on an inactive editor.

use crate::commands::Cmd;
use crate::messages::TrackerMsg;
use crate::model::{AddonModel, EditorId};

/// Handle edit-position tracker messages
pub fn update_tracker(model: &mut AddonModel, msg: TrackerMsg) -> Option<Cmd> {
    match msg {
        TrackerMsg::ActiveEditorChanged(new_editor) => rebind(model, new_editor),

        TrackerMsg::DocumentChanged(event) => {
            // Changes are only delivered while a subscription is live, so the
            // event can only concern the bound editor's document.
            if let Some(position) = model.tracker.record_change(&event) {
                tracing::trace!(line = position.line, column = position.column, "edit recorded");
            }
            None
        }

        TrackerMsg::EditorDestroyed(editor) => {
            model.tracker.evict(editor);
            None
        }

        TrackerMsg::GotoLastEdit => goto_last_edit(model),
    }
}

/// Release the binding on unload, leaving zero attached listeners
///
/// Identical to an active-editor transition to "no editor"; the shared path
/// is what guarantees teardown cannot leak a subscription.
pub fn unload(model: &mut AddonModel) -> Option<Cmd> {
    rebind(model, None)
}

fn rebind(model: &mut AddonModel, new_editor: Option<EditorId>) -> Option<Cmd> {
    let mut cmds = Vec::new();

    // Detach first, unconditionally - also on the transition to no editor.
    if let Some(old) = model.tracker.unbind() {
        tracing::debug!(editor = old.0, "detaching change listener");
        cmds.push(Cmd::UnsubscribeDocumentChanges(old));
    }

    if let Some(editor) = new_editor {
        model.tracker.bind(editor);
        tracing::debug!(editor = editor.0, "attaching change listener");
        cmds.push(Cmd::SubscribeDocumentChanges(editor));
    }

    Cmd::batch(cmds)
}

fn goto_last_edit(model: &AddonModel) -> Option<Cmd> {
    let editor = model.tracker.bound_editor()?;
    let position = model.tracker.last_edit(editor)?;
    Some(Cmd::SetCursor {
        line: position.line,
        column: position.column,
        scroll_into_view: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeEvent;

    const E1: EditorId = EditorId(1);
    const E2: EditorId = EditorId(2);

    #[test]
    fn test_first_bind_emits_only_subscribe() {
        let mut model = AddonModel::default();
        let cmd = update_tracker(&mut model, TrackerMsg::ActiveEditorChanged(Some(E1)));
        assert_eq!(cmd, Some(Cmd::SubscribeDocumentChanges(E1)));
    }

    #[test]
    fn test_switch_detaches_before_attaching() {
        let mut model = AddonModel::default();
        update_tracker(&mut model, TrackerMsg::ActiveEditorChanged(Some(E1)));

        let cmd = update_tracker(&mut model, TrackerMsg::ActiveEditorChanged(Some(E2)));
        assert_eq!(
            cmd,
            Some(Cmd::Batch(vec![
                Cmd::UnsubscribeDocumentChanges(E1),
                Cmd::SubscribeDocumentChanges(E2),
            ]))
        );
    }

    #[test]
    fn test_transition_to_no_editor_still_detaches() {
        let mut model = AddonModel::default();
        update_tracker(&mut model, TrackerMsg::ActiveEditorChanged(Some(E1)));

        let cmd = update_tracker(&mut model, TrackerMsg::ActiveEditorChanged(None));
        assert_eq!(cmd, Some(Cmd::UnsubscribeDocumentChanges(E1)));
        assert_eq!(model.tracker.bound_editor(), None);
    }

    #[test]
    fn test_unload_matches_transition_to_none() {
        let mut model = AddonModel::default();
        update_tracker(&mut model, TrackerMsg::ActiveEditorChanged(Some(E1)));
        assert_eq!(unload(&mut model), Some(Cmd::UnsubscribeDocumentChanges(E1)));

        // A second unload has nothing left to release.
        assert_eq!(unload(&mut model), None);
    }

    #[test]
    fn test_goto_without_recorded_edit_is_a_noop() {
        let mut model = AddonModel::default();
        update_tracker(&mut model, TrackerMsg::ActiveEditorChanged(Some(E1)));
        assert_eq!(update_tracker(&mut model, TrackerMsg::GotoLastEdit), None);
    }

    #[test]
    fn test_goto_targets_the_recorded_position() {
        let mut model = AddonModel::default();
        update_tracker(&mut model, TrackerMsg::ActiveEditorChanged(Some(E1)));
        update_tracker(
            &mut model,
            TrackerMsg::DocumentChanged(ChangeEvent::insertion_at(12, 3)),
        );

        assert_eq!(
            update_tracker(&mut model, TrackerMsg::GotoLastEdit),
            Some(Cmd::SetCursor {
                line: 12,
                column: 3,
                scroll_into_view: true,
            })
        );
    }
}
