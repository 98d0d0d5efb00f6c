/// Whitespace settings: load, save, layer, and resolve.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tab size used when none is set or the configured one is not positive.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Largest tab size a command will use; bigger values are clamped.
pub const MAX_TAB_SIZE: usize = 64;

/// Whitespace settings as stored. Every field may be unset.
///
/// Unset fields are left to whatever layer sits underneath (see
/// [`Settings::merged_with`]) and are only defaulted by [`Settings::resolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_tabs_to_spaces: Option<bool>,
    /// Signed so that a stored `0` or negative value can be read and then
    /// treated as unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<i64>,
}

/// Fully-defaulted settings, read once per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub translate_tabs_to_spaces: bool,
    /// Always within `1..=MAX_TAB_SIZE`.
    pub tab_size: usize,
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        Settings::default().resolve()
    }
}

impl Settings {
    pub fn new(translate_tabs_to_spaces: Option<bool>, tab_size: Option<i64>) -> Self {
        Self {
            translate_tabs_to_spaces,
            tab_size,
        }
    }

    /// Returns the default settings file path: `<config dir>/linepad/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("linepad").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    /// Loads settings from `path`.
    /// Returns unset settings on any error (missing file, parse error, etc.).
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => return settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings at {}: {e}", path.display());
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings at {}: {e}", path.display());
            }
        }
        Self::default()
    }

    /// Saves settings to `path` as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        Ok(())
    }

    /// Layers `overlay` on top of `self`. Values set in `overlay` win.
    pub fn merged_with(&self, overlay: &Settings) -> Settings {
        Settings {
            translate_tabs_to_spaces: overlay
                .translate_tabs_to_spaces
                .or(self.translate_tabs_to_spaces),
            tab_size: overlay.tab_size.or(self.tab_size),
        }
    }

    /// Applies the defaulting rules: unset translate is `false`, unset or
    /// non-positive tab size is [`DEFAULT_TAB_SIZE`], and tab sizes above
    /// [`MAX_TAB_SIZE`] are clamped to it.
    pub fn resolve(&self) -> ResolvedSettings {
        let tab_size = match self.tab_size {
            Some(n) if n > 0 => usize::try_from(n).map_or(MAX_TAB_SIZE, |n| n.min(MAX_TAB_SIZE)),
            _ => DEFAULT_TAB_SIZE,
        };
        ResolvedSettings {
            translate_tabs_to_spaces: self.translate_tabs_to_spaces.unwrap_or(false),
            tab_size,
        }
    }
}
