//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each takes the
//! model and a message, mutates state, and returns the side effects the host
//! must perform.

mod navigation;
mod tracker;
mod working_set;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AddonModel;

pub use navigation::{relative_entry, update_navigation};
pub use tracker::{unload, update_tracker};
pub use working_set::update_working_set;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AddonModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::WorkingSet(m) => working_set::update_working_set(model, m),
        Msg::Nav(m) => navigation::update_navigation(model, m),
        Msg::Tracker(m) => tracker::update_tracker(model, m),
        Msg::Unload => tracker::unload(model),
    }
}
