//! Working-set mirror message handlers (document lifecycle)

use crate::commands::Cmd;
use crate::messages::WorkingSetMsg;
use crate::model::AddonModel;

/// Handle working-set mirror messages
///
/// These only keep the model in sync with the host; none of them produce
/// side effects.
pub fn update_working_set(model: &mut AddonModel, msg: WorkingSetMsg) -> Option<Cmd> {
    match msg {
        WorkingSetMsg::DocumentOpened(entry) => {
            tracing::debug!(name = %entry.name, "document opened");
            model.working_set.open(entry);
        }

        WorkingSetMsg::DocumentClosed(key) => {
            model.working_set.close(&key);
        }

        WorkingSetMsg::ActiveDocumentChanged(key) => {
            model.working_set.set_active(key);
        }

        WorkingSetMsg::ProjectRootChanged(root) => {
            model.project_root = root;
        }
    }
    None
}
