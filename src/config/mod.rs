//! Configuration module - Application settings and user preferences
//!
//! This module provides functionality for:
//! - Loading configuration from ~/.stickypad/config.json
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

// Re-export types that are used externally
pub use types::{Config, NoteConfig};

// Re-export loader
pub use loader::{config_path, load_config, load_config_from};

// Additional exports for tests
#[cfg(test)]
pub use defaults::{
    DEFAULT_NOTE_HEIGHT, DEFAULT_NOTE_WIDTH, DEFAULT_NOTE_X, DEFAULT_NOTE_Y,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
