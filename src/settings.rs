//! Window settings
//!
//! Gameplay rules are compile-time constants; only presentation is
//! configurable. Settings are read from the JSON file named by
//! `PONG_SETTINGS`, when set.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "PONG_SETTINGS";

/// Window/presentation preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Allow the window to be resized (the canvas stretches to fit)
    pub resizable: bool,
    /// Wait for vertical blank when presenting
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Pong 🎮".to_string(),
            resizable: true,
            vsync: true,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the file named by `PONG_SETTINGS`.
    ///
    /// Never fails: an unset variable, unreadable file or bad JSON all fall
    /// back to defaults.
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Pong 🎮");
        assert!(settings.resizable);
        assert!(settings.vsync);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "vsync": false }"#).unwrap();
        assert!(!settings.vsync);
        assert!(settings.resizable);
        assert_eq!(settings.title, Settings::default().title);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ vsync: nope").is_err());
        assert!(Settings::from_json(r#"{ "vsync": "yes" }"#).is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("pong-duel-does-not-exist.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "pong-duel-settings-{}.json",
            std::process::id()
        ));
        let settings = Settings {
            title: "Duel".to_string(),
            resizable: false,
            vsync: false,
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }
}
