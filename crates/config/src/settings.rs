//! Persistence for user settings.
//!
//! This module provides functionality to save and load user settings
//! to disk using platform-standard configuration directories. It is the
//! settings-mutation surface used by the "reset settings" and "custom font"
//! popups.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::theme::ColorTheme;

/// User settings that persist across application runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Font family used by the typing test. Spaces are stored as underscores.
    pub font_family: String,
    /// Font size step (1-4).
    pub font_size: u8,
    /// Selected color theme.
    pub color_theme: ColorTheme,
    /// Whether the caret animates between characters.
    pub smooth_caret: bool,
    /// Whether typed characters are hidden while typing.
    pub blind_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color_theme: ColorTheme::Default,
            smooth_caret: true,
            blind_mode: false,
        }
    }
}

impl Settings {
    /// Enforce value invariants after loading from disk.
    ///
    /// - `font_size` is clamped to `MIN_FONT_SIZE..=MAX_FONT_SIZE`
    /// - an empty `font_family` falls back to the default family
    pub fn sanitize(mut self) -> Self {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if self.font_family.trim().is_empty() {
            self.font_family = DEFAULT_FONT_FAMILY.to_string();
        }
        self
    }

    /// Font family as shown to the user (underscores rendered as spaces).
    pub fn font_family_display(&self) -> String {
        self.font_family.replace('_', " ")
    }
}

/// Manages loading and saving user settings to disk.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    /// Path to the settings file.
    settings_path: PathBuf,
}

impl SettingsManager {
    /// Creates a new `SettingsManager` using platform-standard config directories.
    ///
    /// # Errors
    /// Returns an error if `ProjectDirs::from` fails (should be rare).
    pub fn new() -> Result<Self> {
        Ok(Self {
            settings_path: default_settings_path()?,
        })
    }

    /// Creates a manager that reads and writes the given file.
    pub fn with_path(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    /// Returns the path to the settings file.
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist or cannot be read.
    pub fn load(&self) -> Settings {
        match self.load_inner() {
            Ok(settings) => settings.sanitize(),
            Err(e) => {
                tracing::warn!(
                    path = %self.settings_path.display(),
                    error = %e,
                    "Failed to load settings, using defaults"
                );
                Settings::default()
            }
        }
    }

    fn load_inner(&self) -> Result<Settings> {
        let content = std::fs::read_to_string(&self.settings_path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.settings_path, content).context("Failed to write settings file")?;

        tracing::debug!(
            path = %self.settings_path.display(),
            "Settings saved successfully"
        );

        Ok(())
    }

    /// Restores default settings and writes them to disk.
    pub fn reset(&self) -> Result<Settings> {
        let settings = Settings::default();
        self.save(&settings)?;
        Ok(settings)
    }
}

/// Platform-standard location of the settings file.
pub fn default_settings_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "typist", "typist")
        .context("Failed to determine project directories")?;
    Ok(proj_dirs.config_dir().join("settings.json"))
}
