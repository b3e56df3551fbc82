//! Navigation message handlers (working-set cycling, quick-open launch)

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::{AddonModel, DocumentEntry, WorkingSet};

/// Handle navigation messages
pub fn update_navigation(model: &mut AddonModel, msg: NavMsg) -> Option<Cmd> {
    match msg {
        NavMsg::GoNext => open_relative(model, 1),
        NavMsg::GoPrev => open_relative(model, -1),
        NavMsg::SearchWorkingSet => Some(Cmd::BeginQuickSearch {
            query: model.config.search_prefix.to_string(),
        }),
    }
}

/// The entry `offset` steps from the active document in working-set order,
/// wrapping around both ends of the list
///
/// Returns None when nothing can be navigated to: no active document, an
/// active buffer that is not part of the working set, or a set too small to
/// move within. That is a normal state, not an error.
pub fn relative_entry(working_set: &WorkingSet, offset: isize) -> Option<&DocumentEntry> {
    let active = working_set.active_index()?;
    let len = working_set.len();
    if len <= 1 && offset != 0 {
        return None;
    }

    // Euclidean remainder handles both directions and any offset magnitude.
    let index = (active as isize + offset).rem_euclid(len as isize) as usize;
    working_set.get(index)
}

fn open_relative(model: &AddonModel, offset: isize) -> Option<Cmd> {
    let entry = relative_entry(&model.working_set, offset)?;
    tracing::debug!(doc = %entry.name, offset, "cycling working set");
    Some(Cmd::OpenDocument {
        full_path: entry.full_path.clone(),
    })
}
