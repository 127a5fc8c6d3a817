//! Application root that owns the live notes.
//!
//! A `Workspace` holds the note registry and the window-system
//! binding. Toolkit glue routes user actions here - new note, the
//! "+" control on an existing note, a close request - and the
//! workspace answers by mutating the registry and pushing titles and
//! geometry onto the live windows.
//!
//! All methods are called from the UI thread; nothing here blocks.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::Config;
use crate::geometry::Rect;
use crate::note::{Note, NoteColor, NoteId, NoteProperties};
use crate::placement;
use crate::platform::{Platform, PlatformWindow, WindowConfig};
use crate::registry::NoteRegistry;
use crate::theme::{self, Theme};

/// Per-note creation parameters. `Default` matches a bare
/// new-note action: config geometry, empty content, theme color.
#[derive(Debug, Clone, Default)]
pub struct NoteOptions {
    pub dimensions: Option<Rect>,
    pub content: String,
    pub color: Option<NoteColor>,
    pub properties: NoteProperties,
}

pub struct Workspace<P: Platform> {
    platform: P,
    registry: NoteRegistry,
    windows: HashMap<NoteId, Box<dyn PlatformWindow>>,
    config: Config,
    theme: Theme,
}

impl<P: Platform> Workspace<P> {
    pub fn new(platform: P, config: Config, theme: Theme) -> Self {
        Self {
            platform,
            registry: NoteRegistry::new(),
            windows: HashMap::new(),
            config,
            theme,
        }
    }

    /// Create a note and open its window.
    pub fn create_note(&mut self, options: NoteOptions) -> NoteId {
        let id = self.registry.allocate_id();
        let dimensions = options
            .dimensions
            .unwrap_or_else(|| self.config.note.dimensions());
        let color = options.color.unwrap_or(self.theme.default_color);
        let note = Note {
            id,
            dimensions,
            content: options.content,
            color,
            properties: options.properties,
        };

        let window = self.platform.open_window(&WindowConfig {
            bounds: dimensions,
            title: note.window_title(),
            frameless: true,
            always_on_top: true,
            skip_taskbar: note.properties.contains(NoteProperties::SKIP_TASKBAR),
            stylesheets: theme::stylesheets(color).to_vec(),
        });

        info!(
            id = id.0,
            x = dimensions.x,
            y = dimensions.y,
            color = color.name(),
            "note created"
        );
        self.windows.insert(id, window);
        self.registry.insert(note);
        id
    }

    /// The "+" control: create a note the same size as the anchor and
    /// move it next to the anchor. Returns `None` for unknown anchors.
    pub fn spawn_adjacent(&mut self, anchor: NoteId) -> Option<NoteId> {
        let anchor_rect = self.registry.get(anchor)?.dimensions;
        let id = self.create_note(NoteOptions {
            dimensions: Some(anchor_rect),
            ..NoteOptions::default()
        });
        self.translate_next_to(id, anchor_rect);
        Some(id)
    }

    /// Move a note beside `position`, adjusting when there is not
    /// enough room on screen, and push the result onto its window.
    pub fn translate_next_to(&mut self, id: NoteId, position: Rect) {
        let screen = self.platform.visual_bounds();
        let occupied: Vec<Rect> = self
            .registry
            .iter()
            .filter(|n| n.id != id)
            .map(|n| n.dimensions)
            .collect();
        let placed = placement::place_next_to(position, screen, &occupied);
        self.apply_dimensions(id, placed);
    }

    /// Record new dimensions and apply them to the live window.
    fn apply_dimensions(&mut self, id: NoteId, dimensions: Rect) {
        if let Some(note) = self.registry.get_mut(id) {
            note.dimensions = dimensions;
        }
        if let Some(window) = self.windows.get_mut(&id) {
            window.set_bounds(dimensions);
        }
    }

    /// Close-request handler. Removes the note from the registry and
    /// closes its window; unknown IDs are a no-op.
    pub fn close_note(&mut self, id: NoteId) {
        if self.registry.remove(id).is_some() {
            if let Some(mut window) = self.windows.remove(&id) {
                window.close();
            }
            info!(id = id.0, remaining = self.registry.len(), "note closed");
        }
    }

    /// Recolor a note. The record updates immediately; the binding
    /// re-reads the stylesheets on its next redraw.
    pub fn set_color(&mut self, id: NoteId, color: NoteColor) -> bool {
        match self.registry.get_mut(id) {
            Some(note) => {
                note.color = color;
                debug!(id = id.0, color = color.name(), "note recolored");
                true
            }
            None => false,
        }
    }

    /// Replace a note's content. Locked notes ignore edits.
    pub fn set_content(&mut self, id: NoteId, content: impl Into<String>) -> bool {
        match self.registry.get_mut(id) {
            Some(note) if note.properties.contains(NoteProperties::LOCKED) => {
                debug!(id = id.0, "note is locked, ignoring edit");
                false
            }
            Some(note) => {
                note.content = content.into();
                true
            }
            None => false,
        }
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.registry.get(id)
    }

    /// Live notes in creation order.
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.registry.iter()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
