//! Appearance settings persistence
//!
//! Handles saving and loading the rating and HUD appearance chosen in the
//! demo harness.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::hud::{HudStyle, LoadingSpinner, SuccessCheck};
use super::star::{FillMode, MAX_STARS, REGULAR_RADIUS_SCALE, RatingLayout, StarGeometry};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Star rating appearance
    #[serde(default)]
    pub rating: RatingSettings,
    /// HUD appearance
    #[serde(default)]
    pub hud: HudSettings,
    /// Use the dark palette
    #[serde(default)]
    pub dark_mode: bool,
}

/// Star rating appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    pub star_count: usize,
    pub star_size: f32,
    pub star_margin: f32,
    pub fill_mode: FillMode,
    /// Inner/outer radius ratio (0.0 - 1.0)
    pub radius_scale: f32,
    pub outer_corner_radius: f32,
    pub inner_corner_radius: f32,
    /// Allow changing the rating by touch or mouse
    pub interactive: bool,
}

/// HUD appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudSettings {
    pub animation_radius: f32,
    pub line_width: f32,
    pub circle_duration_ms: u64,
    pub check_duration_ms: u64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        let layout = RatingLayout::default();
        Self {
            star_count: layout.star_count,
            star_size: layout.star_size,
            star_margin: layout.star_margin,
            fill_mode: FillMode::default(),
            radius_scale: REGULAR_RADIUS_SCALE,
            outer_corner_radius: 0.0,
            inner_corner_radius: 0.0,
            interactive: true,
        }
    }
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            animation_radius: 100.0,
            line_width: 1.0,
            circle_duration_ms: 500,
            check_duration_ms: 200,
        }
    }
}

impl RatingSettings {
    pub fn layout(&self) -> RatingLayout {
        RatingLayout::new(self.star_count, self.star_size, self.star_margin)
    }

    pub fn geometry(&self) -> StarGeometry {
        StarGeometry::new(self.star_size)
            .radius_scale(self.radius_scale)
            .outer_corner_radius(self.outer_corner_radius)
            .inner_corner_radius(self.inner_corner_radius)
    }
}

impl HudSettings {
    pub fn style(&self) -> HudStyle {
        HudStyle::default()
            .radius(self.animation_radius)
            .line_width(self.line_width)
    }

    pub fn loading_spinner(&self) -> LoadingSpinner {
        LoadingSpinner::new(self.style())
    }

    pub fn success_check(&self) -> SuccessCheck {
        SuccessCheck::new(self.style())
            .circle_duration(Duration::from_millis(self.circle_duration_ms))
            .check_duration(Duration::from_millis(self.check_duration_ms))
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "starhud", "StarHud")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let settings: Self =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;
        Ok(settings.sanitized())
    }

    /// Copy with out of range values clamped so the rating row can always render
    pub fn sanitized(mut self) -> Self {
        if self.rating.star_count > MAX_STARS {
            tracing::warn!(
                "Clamping star count {} to {}",
                self.rating.star_count,
                MAX_STARS
            );
            self.rating.star_count = MAX_STARS;
        }
        self
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
