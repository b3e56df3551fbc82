//! Working set - the host's ordered list of currently open documents
//!
//! The host owns document lifecycles; it mirrors open/close/activate events
//! into this model via `WorkingSetMsg`. Insertion order is significant: it
//! defines both the navigation order and the order the host's UI lists
//! documents in.

use std::path::PathBuf;

/// Identity of an open document
///
/// Documents with a real backing file are identified by full path. Unsaved
/// ("inaccessible") documents have no real path and are identified by their
/// synthetic display name instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    Path(PathBuf),
    Untitled(String),
}

/// One open document in the working set
///
/// Owned by the host; the add-ons only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Display name (the filename, or a synthetic "Untitled-N" name)
    pub name: String,
    /// Full path; synthetic for inaccessible documents
    pub full_path: PathBuf,
    /// True for unsaved documents without a real backing file
    pub is_inaccessible: bool,
}

impl DocumentEntry {
    /// Create an entry for a document with a real backing file
    pub fn new(name: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            is_inaccessible: false,
        }
    }

    /// Create an entry for an unsaved document
    ///
    /// The synthetic name doubles as the full path, matching how the host
    /// labels buffers that have never been written to disk.
    pub fn untitled(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            full_path: PathBuf::from(&name),
            name,
            is_inaccessible: true,
        }
    }

    /// Identity of this entry (full path, or synthetic name when inaccessible)
    pub fn key(&self) -> DocumentKey {
        if self.is_inaccessible {
            DocumentKey::Untitled(self.name.clone())
        } else {
            DocumentKey::Path(self.full_path.clone())
        }
    }
}

/// Ordered, host-mutated view of the currently open documents
///
/// The active document is tracked by identity rather than index: the active
/// buffer is not necessarily a member of the working set (e.g. a settings
/// view), and `active_index` must come back empty in that case.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    entries: Vec<DocumentEntry>,
    active: Option<DocumentKey>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in working-set order
    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DocumentEntry> {
        self.entries.get(index)
    }

    /// Index of a document in working-set order
    pub fn index_of(&self, key: &DocumentKey) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.key() == key)
    }

    /// Identity of the currently active document, if any
    pub fn active_key(&self) -> Option<&DocumentKey> {
        self.active.as_ref()
    }

    /// Index of the active document, or None when nothing is active or the
    /// active buffer is not part of the working set
    pub fn active_index(&self) -> Option<usize> {
        self.index_of(self.active.as_ref()?)
    }

    /// The active document's entry, when it is a member of the set
    pub fn active_entry(&self) -> Option<&DocumentEntry> {
        self.active_index().map(|index| &self.entries[index])
    }

    /// Append a newly opened document
    ///
    /// Re-opening an already listed document keeps its original position.
    pub fn open(&mut self, entry: DocumentEntry) {
        if self.index_of(&entry.key()).is_none() {
            self.entries.push(entry);
        }
    }

    /// Remove a closed document
    ///
    /// The active identity is left untouched; the host follows a close with
    /// its own activation event for whichever document gains focus.
    pub fn close(&mut self, key: &DocumentKey) {
        self.entries.retain(|entry| &entry.key() != key);
    }

    /// Record which document the host activated (None when focus left the
    /// working set entirely)
    pub fn set_active(&mut self, key: Option<DocumentKey>) {
        self.active = key;
    }
}
