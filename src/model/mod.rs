//! Add-on model - the complete state of the working-set add-ons
//!
//! This module contains all the state types following the Elm Architecture
//! pattern: the host feeds messages into `update`, which mutates this model
//! and returns commands for the host to perform.

pub mod edit_tracker;
pub mod editor;
pub mod working_set;

pub use edit_tracker::EditPositionTracker;
pub use editor::{ChangeEvent, ChangeRegion, EditorId, Position};
pub use working_set::{DocumentEntry, DocumentKey, WorkingSet};

use std::path::PathBuf;

use crate::config::AddonConfig;

/// The complete add-on model
#[derive(Debug, Clone, Default)]
pub struct AddonModel {
    /// Mirror of the host's open-document list
    pub working_set: WorkingSet,
    /// Last-edit positions and the bound-editor slot
    pub tracker: EditPositionTracker,
    /// Project root used to relativize paths for search display
    pub project_root: Option<PathBuf>,
    /// Persisted add-on configuration
    pub config: AddonConfig,
}

impl AddonModel {
    /// Create a model with the given configuration
    pub fn new(config: AddonConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The entry of the host's active document, when it belongs to the
    /// working set
    pub fn active_entry(&self) -> Option<&DocumentEntry> {
        self.working_set.active_entry()
    }
}
