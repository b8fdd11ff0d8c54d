//! Configuration module for LuaPad-RS
//!
//! This module handles application configuration including:
//! - Application state persistence (editor preferences)
//! - Autocomplete options and text surface metrics ([`options`])
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.luapad.luapad-rs/`
//! - **macOS**: `~/Library/Application Support/dev.luapad.luapad-rs/`
//! - **Windows**: `%APPDATA%\dev.luapad.luapad-rs\`
//!
//! # Files
//!
//! - `app_state.json` - Editor preferences
//!
//! # Example
//!
//! ```ignore
//! use luapad_rs::config::AppState;
//!
//! let mut state = AppState::load_or_default();
//! state.preferences.font_size = 15.0;
//! state.save()?;
//! ```

pub mod options;

pub use options::{AutocompleteOptions, SurfaceMetrics};

use crate::error::{LuaPadError, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.luapad.luapad-rs";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Default editor font size in points
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        LuaPadError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            LuaPadError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== App State ====================

/// Persistent application state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// Editor preferences
    #[serde(default)]
    pub preferences: EditorPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: EditorPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            LuaPadError::Config("Could not determine app state path".to_string())
        })?;
        Self::load_from(path)
    }

    /// Load app state from `path`, returning defaults if the file is absent
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read app state")?;

        serde_json::from_str(&content)
            .map_err(LuaPadError::from)
            .context("Failed to parse app state")
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(APP_STATE_FILE))
    }

    /// Save app state to `path`
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(LuaPadError::from)
            .context("Failed to serialize app state")?;

        std::fs::write(path.as_ref(), content).with_context(|| {
            format!("Failed to write app state to {}", path.as_ref().display())
        })
    }
}

// ==================== Editor Preferences ====================

/// Editor preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Editor font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Suggestion list options
    #[serde(default)]
    pub autocomplete: AutocompleteOptions,

    /// Explicit surface metrics; derived from `font_size` when absent
    #[serde(default)]
    pub metrics_override: Option<SurfaceMetrics>,
}

fn default_true() -> bool {
    true
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: DEFAULT_FONT_SIZE,
            autocomplete: AutocompleteOptions::default(),
            metrics_override: None,
        }
    }
}

impl EditorPreferences {
    /// Metrics used to anchor the suggestion popup
    pub fn surface_metrics(&self) -> SurfaceMetrics {
        self.metrics_override
            .unwrap_or_else(|| SurfaceMetrics::for_font_size(self.font_size))
    }

    /// Check the autocomplete settings
    pub fn validate(&self) -> Result<()> {
        self.autocomplete.validate()?;
        self.surface_metrics().validate()
    }

    /// These preferences, or the defaults if they do not validate
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!("Invalid editor preferences, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.version, 1);
        assert!(state.preferences.dark_mode);
        assert_eq!(state.preferences.autocomplete.max_candidates, 8);
    }

    #[test]
    fn test_app_state_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(APP_STATE_FILE);

        let mut state = AppState::default();
        state.preferences.font_size = 16.0;
        state.preferences.autocomplete.max_candidates = 5;
        state.save_to(&path).unwrap();

        let loaded = AppState::load_from(&path).unwrap();
        assert_eq!(loaded.preferences, state.preferences);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppState::load_from(dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded.preferences, EditorPreferences::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(APP_STATE_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppState::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse app state"));
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(APP_STATE_FILE);
        let err = AppState::default().save_to(&path).unwrap_err();
        assert!(matches!(err, LuaPadError::WithContext { .. }));
        assert!(err.to_string().contains("Failed to write app state"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let state: AppState =
            serde_json::from_str(r#"{ "preferences": { "font_size": 18.0 } }"#).unwrap();
        assert_eq!(state.version, 1);
        assert!(state.preferences.dark_mode);
        assert_eq!(state.preferences.font_size, 18.0);
        assert_eq!(state.preferences.autocomplete, AutocompleteOptions::default());
    }

    #[test]
    fn test_surface_metrics_follow_font_size() {
        let mut prefs = EditorPreferences::default();
        prefs.font_size = 20.0;
        assert!((prefs.surface_metrics().line_height - 30.0).abs() < 1e-4);

        let custom = SurfaceMetrics {
            char_width: 9.0,
            line_height: 18.0,
            padding: 2.0,
        };
        prefs.metrics_override = Some(custom);
        assert_eq!(prefs.surface_metrics(), custom);
    }

    #[test]
    fn test_invalid_preferences_replaced() {
        let mut prefs = EditorPreferences::default();
        prefs.autocomplete.max_candidates = 0;
        assert!(prefs.validate().is_err());
        assert_eq!(prefs.validated_or_default(), EditorPreferences::default());
    }
}
