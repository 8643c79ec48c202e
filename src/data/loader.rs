//! RON settings loader
//!
//! World settings live in an optional RON file, with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted edge length for a generated world
pub const MAX_DIMENSION: i32 = 1024;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid world size {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("Invalid hotspot area {0}, must be at least one tile")]
    InvalidHotspotArea(i32),
}

/// Tunables for world assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub width: i32,
    pub height: i32,
    /// Fixed seed; a fresh one is drawn from entropy when absent
    pub seed: Option<u64>,
    /// Also scatter terrain loot across the open map
    pub ground_loot: bool,
    /// Map area covered by each loot hotspot
    pub hotspot_area: i32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            seed: None,
            ground_loot: false,
            hotspot_area: 200,
        }
    }
}

impl WorldSettings {
    /// Load settings from a RON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings: WorldSettings = ron::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings if the file exists and parses, defaults otherwise
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    /// Write the default settings file for easy editing
    pub fn export_default(path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let ron = ron::ser::to_string_pretty(&Self::default(), ron::ser::PrettyConfig::default())?;
        fs::write(path, ron)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let ok = |d: i32| (1..=MAX_DIMENSION).contains(&d);
        if !ok(self.width) || !ok(self.height) {
            return Err(SettingsError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.hotspot_area < 1 {
            return Err(SettingsError::InvalidHotspotArea(self.hotspot_area));
        }
        Ok(())
    }
}

/// Default location of the settings file
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "worldforge", "Worldforge") {
        proj_dirs.config_dir().join("settings.ron")
    } else {
        PathBuf::from("settings.ron")
    }
}
