//! Live-note registry.
//!
//! Tracks every open note in creation order and hands out unique IDs.
//! The registry is owned by the `Workspace` rather than living in a
//! static, so tests can spin up as many independent instances as they
//! want.
//!
//! Iteration order is insertion order, not ID order. ID allocation
//! walks the *sorted* set of live IDs, so the smallest unused number
//! is found regardless of which notes were closed in between.

use tracing::debug;

use crate::note::{Note, NoteId};

#[derive(Debug, Default)]
pub struct NoteRegistry {
    notes: Vec<Note>,
}

impl NoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest non-negative integer not used by any live note.
    pub fn allocate_id(&self) -> NoteId {
        let mut used: Vec<u32> = self.notes.iter().map(|n| n.id.0).collect();
        used.sort_unstable();
        let mut candidate = 0u32;
        for id in used {
            if id == candidate {
                candidate += 1;
            } else {
                break;
            }
        }
        NoteId(candidate)
    }

    /// Append a note. The ID must come from `allocate_id`; inserting
    /// a duplicate is an invariant violation.
    pub fn insert(&mut self, note: Note) {
        if self.contains(note.id) {
            crate::debug_panic!("duplicate note id {}", note.id);
            return;
        }
        debug!(id = note.id.0, "note registered");
        self.notes.push(note);
    }

    /// Remove a note by ID. Unknown IDs are a no-op.
    pub fn remove(&mut self, id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|n| n.id == id)?;
        debug!(id = id.0, "note removed");
        Some(self.notes.remove(index))
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.notes.iter().any(|n| n.id == id)
    }

    /// Notes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
