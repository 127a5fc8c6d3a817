//! Configuration struct definitions

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_NOTE_HEIGHT, DEFAULT_NOTE_WIDTH, DEFAULT_NOTE_X, DEFAULT_NOTE_Y,
};
use crate::geometry::Rect;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub note: NoteConfig,
}

/// Geometry for notes created without explicit dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            x: DEFAULT_NOTE_X,
            y: DEFAULT_NOTE_Y,
            width: DEFAULT_NOTE_WIDTH,
            height: DEFAULT_NOTE_HEIGHT,
        }
    }
}

impl NoteConfig {
    pub fn dimensions(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
