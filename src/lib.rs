//! Working-set navigation add-ons for a host text editor
//!
//! This crate provides the core state and logic for three editor add-ons,
//! implementing the Elm Architecture pattern: a fuzzy quick-open provider
//! over the list of open documents, circular next/previous document cycling,
//! and a per-editor last-edit-position tracker. The host feeds notifications
//! and command invocations in as messages; side effects come back out as
//! command values for the host to perform.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod search;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::{Cmd, CommandId};
pub use config::AddonConfig;
pub use messages::Msg;
pub use model::AddonModel;
pub use search::QuickSearchProvider;
