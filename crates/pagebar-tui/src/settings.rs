//! Persistent user settings.

use std::path::{Path, PathBuf};

use pagebar_core::PaginationConfig;
use serde::{Deserialize, Serialize};

use crate::theme::ThemeVariant;

/// User settings persisted as TOML in the config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Theme used on startup.
    pub theme: ThemeVariant,
    /// Page size and compression threshold.
    pub pagination: PaginationConfig,
}

impl UserSettings {
    /// Get the config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pagebar").join("settings.toml"))
    }

    /// Load settings from disk, or return defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from a specific file, or return defaults.
    ///
    /// Missing, unreadable, malformed, or invalid files all yield defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };

        let settings: Self = match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
                return Self::default();
            }
        };

        if let Err(e) = settings.pagination.validate() {
            tracing::warn!(path = %path.display(), error = %e, "ignoring invalid settings");
            return Self::default();
        }

        settings
    }

    /// Save settings to disk.
    pub fn save(&self) -> std::io::Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "No config directory")
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(path, content)
    }
}
