//! Note color themes.
//!
//! Every note scene gets two stylesheet identifiers: the shared base
//! sheet and one per-color sheet. The identifiers are opaque here;
//! the toolkit binding resolves them to actual resources. User
//! overrides load from `~/.stickypad/theme.json` and fall back to
//! defaults on any error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ResultExt, StickypadError};
use crate::note::NoteColor;

/// Base sheet shared by every note.
pub const BASE_STYLESHEET: &str = "theme/main.css";

/// The stylesheet pair attached to a note's scene.
pub fn stylesheets(color: NoteColor) -> [&'static str; 2] {
    [BASE_STYLESHEET, color_stylesheet(color)]
}

/// Per-color sheet.
pub fn color_stylesheet(color: NoteColor) -> &'static str {
    match color {
        NoteColor::Dark => "theme/dark.css",
        NoteColor::Blue => "theme/blue.css",
        NoteColor::Yellow => "theme/yellow.css",
    }
}

/// User theme overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color given to notes created without an explicit one.
    pub default_color: NoteColor,
    pub accents: AccentColors,
}

/// Accent hex colors per note color, for bindings that tint controls
/// to match the active sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccentColors {
    pub dark: String,
    pub blue: String,
    pub yellow: String,
}

impl Default for AccentColors {
    fn default() -> Self {
        Self {
            dark: "#3c3f41".to_string(),
            blue: "#4a90d9".to_string(),
            yellow: "#f5d76e".to_string(),
        }
    }
}

impl Theme {
    pub fn accent(&self, color: NoteColor) -> &str {
        match color {
            NoteColor::Dark => &self.accents.dark,
            NoteColor::Blue => &self.accents.blue,
            NoteColor::Yellow => &self.accents.yellow,
        }
    }
}

/// Path to the user theme file (~/.stickypad/theme.json)
pub fn theme_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".stickypad"))
        .unwrap_or_else(|| PathBuf::from(".stickypad"))
        .join("theme.json")
}

/// Load the user theme, falling back to defaults on any error.
pub fn load_theme() -> Theme {
    load_theme_from(&theme_path())
}

pub fn load_theme_from(path: &Path) -> Theme {
    if !path.exists() {
        info!(path = %path.display(), "Theme file not found, using defaults");
        return Theme::default();
    }
    try_load_theme(path).warn_on_err().unwrap_or_default()
}

fn try_load_theme(path: &Path) -> Result<Theme, StickypadError> {
    let contents = fs::read_to_string(path).map_err(|source| StickypadError::ThemeLoad {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_gets_base_plus_color_sheet() {
        assert_eq!(
            stylesheets(NoteColor::Blue),
            ["theme/main.css", "theme/blue.css"]
        );
        assert_eq!(
            stylesheets(NoteColor::Dark),
            ["theme/main.css", "theme/dark.css"]
        );
        assert_eq!(
            stylesheets(NoteColor::Yellow),
            ["theme/main.css", "theme/yellow.css"]
        );
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let theme = load_theme_from(&dir.path().join("theme.json"));
        assert_eq!(theme.default_color, NoteColor::Blue);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, "{not json").unwrap();
        let theme = load_theme_from(&path);
        assert_eq!(theme.default_color, NoteColor::Blue);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{ "default_color": "yellow" }"#).unwrap();
        let theme = load_theme_from(&path);
        assert_eq!(theme.default_color, NoteColor::Yellow);
        assert_eq!(theme.accent(NoteColor::Blue), "#4a90d9");
    }
}
