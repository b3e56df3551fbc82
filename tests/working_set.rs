//! Integration tests for working-set mirror maintenance
//!
//! Drives the document-lifecycle messages through update and checks the
//! mirror the navigation and search features read from.

mod common;

use std::path::PathBuf;

use common::{entry, model_with_documents};
use workset_nav::messages::{Msg, WorkingSetMsg};
use workset_nav::model::{AddonModel, DocumentEntry, DocumentKey};
use workset_nav::update::update;

fn key(name: &str) -> DocumentKey {
    DocumentKey::Path(PathBuf::from(format!("/proj/{name}")))
}

// ============================================================================
// Document lifecycle
// ============================================================================

#[test]
fn test_opened_documents_append_in_order() {
    let mut model = AddonModel::default();
    for name in ["b.rs", "a.rs", "c.rs"] {
        update(
            &mut model,
            Msg::WorkingSet(WorkingSetMsg::DocumentOpened(entry(name))),
        );
    }

    let names: Vec<_> = model
        .working_set
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["b.rs", "a.rs", "c.rs"]);
}

#[test]
fn test_closing_removes_without_reordering() {
    let mut model = model_with_documents(&["a.rs", "b.rs", "c.rs"]);
    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::DocumentClosed(key("b.rs"))),
    );

    let names: Vec<_> = model
        .working_set
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, ["a.rs", "c.rs"]);
}

#[test]
fn test_lifecycle_messages_produce_no_commands() {
    let mut model = AddonModel::default();
    assert_eq!(
        update(
            &mut model,
            Msg::WorkingSet(WorkingSetMsg::DocumentOpened(entry("a.rs"))),
        ),
        None
    );
    assert_eq!(
        update(
            &mut model,
            Msg::WorkingSet(WorkingSetMsg::ActiveDocumentChanged(Some(key("a.rs")))),
        ),
        None
    );
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_activation_tracks_membership() {
    let mut model = model_with_documents(&["a.rs", "b.rs"]);

    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::ActiveDocumentChanged(Some(key("b.rs")))),
    );
    assert_eq!(model.active_entry().unwrap().name, "b.rs");

    // Focus moving to a buffer outside the set leaves no active entry.
    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::ActiveDocumentChanged(Some(
            DocumentKey::Path(PathBuf::from("/tmp/scratch.txt")),
        ))),
    );
    assert!(model.active_entry().is_none());

    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::ActiveDocumentChanged(None)),
    );
    assert!(model.working_set.active_key().is_none());
}

#[test]
fn test_closing_the_active_document_clears_active_entry() {
    let mut model = model_with_documents(&["a.rs", "b.rs"]);
    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::ActiveDocumentChanged(Some(key("a.rs")))),
    );
    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::DocumentClosed(key("a.rs"))),
    );

    assert!(model.active_entry().is_none());
}

// ============================================================================
// Project root
// ============================================================================

#[test]
fn test_project_root_updates() {
    let mut model = AddonModel::default();
    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::ProjectRootChanged(Some(PathBuf::from(
            "/other",
        )))),
    );
    assert_eq!(model.project_root, Some(PathBuf::from("/other")));

    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::ProjectRootChanged(None)),
    );
    assert_eq!(model.project_root, None);
}

// ============================================================================
// Untitled documents
// ============================================================================

#[test]
fn test_untitled_documents_participate_in_the_working_set() {
    let mut model = AddonModel::default();
    let untitled = DocumentEntry::untitled("Untitled-1");
    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::DocumentOpened(untitled.clone())),
    );
    update(
        &mut model,
        Msg::WorkingSet(WorkingSetMsg::ActiveDocumentChanged(Some(untitled.key()))),
    );

    assert_eq!(model.active_entry().unwrap().name, "Untitled-1");
}
