//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Default geometry for a bare new note
pub const DEFAULT_NOTE_X: f64 = 25.0;
pub const DEFAULT_NOTE_Y: f64 = 25.0;
pub const DEFAULT_NOTE_WIDTH: f64 = 250.0;
pub const DEFAULT_NOTE_HEIGHT: f64 = 250.0;
