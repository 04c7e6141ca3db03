//! Editor settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

/// Grid display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Show grid
    pub visible: bool,
    /// Grid cell size in meters (also the snap step)
    pub size: f64,
    /// Grid line opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            size: 0.5,
            opacity: 0.5,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Ground edge length in meters
    pub garden_size: f32,
    /// Camera travel per zoom step in the 3D view
    pub zoom_speed: f32,
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Selection color RGB
    pub selection_color: [u8; 3],
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            garden_size: 30.0,
            zoom_speed: 2.0,
            background_color: [30, 34, 30],
            selection_color: [255, 200, 0],
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    pub language: Language,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Language::default(),
        }
    }
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub grid: GridSettings,
    /// Snap dropped and dragged elements to the grid
    pub snap_to_grid: bool,
    pub viewport: ViewportSettings,
    pub ui: UiSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            snap_to_grid: true,
            viewport: ViewportSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl EditorSettings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "garden", "garden-editor")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the user config dir, or defaults
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from a file; missing or invalid files give defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid settings file {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to the user config dir
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::error!("Failed to create config dir {}: {e}", dir.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::error!("Failed to write settings {}: {e}", path.display());
                }
            }
            Err(e) => tracing::error!("Failed to serialize settings: {e}"),
        }
    }
}
