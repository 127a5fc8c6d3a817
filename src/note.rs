//! Note record types.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Identifier for a live note.
///
/// IDs are small non-negative integers; closing a note frees its
/// number for the next note created (see `registry`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(pub u32);

impl NoteId {
    /// 1-indexed number shown to the user. The first note reads "1".
    pub fn display_number(&self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Color theme of a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Dark,
    #[default]
    Blue,
    Yellow,
}

impl NoteColor {
    /// Lowercase name, used for stylesheet identifiers and logging.
    pub fn name(&self) -> &'static str {
        match self {
            NoteColor::Dark => "dark",
            NoteColor::Blue => "blue",
            NoteColor::Yellow => "yellow",
        }
    }
}

bitflags! {
    /// Special per-note properties consulted by the window glue.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NoteProperties: u8 {
        /// Content edits are ignored.
        const LOCKED = 1 << 0;
        /// Keep the window out of the taskbar / window switcher.
        const SKIP_TASKBAR = 1 << 1;
    }
}

impl Default for NoteProperties {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single live note.
#[derive(Debug, Clone)]
pub struct Note {
    pub id: NoteId,
    pub dimensions: Rect,
    pub content: String,
    pub color: NoteColor,
    pub properties: NoteProperties,
}

impl Note {
    /// Window title, 1-indexed: the first note is "Sticky Note (1)".
    pub fn window_title(&self) -> String {
        format!("Sticky Note ({})", self.id.display_number())
    }
}
