//! Settings persistence.
//!
//! Theme, language, and the favorite-id set round-trip through a single
//! JSON document under the user config dir. Read once at startup; written
//! on every mutation. A missing or corrupt file degrades to defaults.

use crate::error::{Result, ToolshelfError};
use crate::i18n::Language;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Theme choice (dark default)
    pub theme: Theme,
    /// Language choice (German default)
    pub language: Language,
    /// Favorite tool ids
    pub favorites: BTreeSet<String>,
}

/// File-backed settings store.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the default location under the user config dir.
    pub fn default_location() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("toolshelf")
            .join("settings.json");
        Self::new(path)
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, degrading to defaults when missing or unreadable.
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Corrupt settings file {}: {}", self.path.display(), e);
                    Settings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                log::warn!("Failed to read settings {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }

    /// Write settings to disk, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ToolshelfError::Settings(format!("{}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)
            .map_err(|e| ToolshelfError::Settings(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }
}
