//! Editor configuration.

use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid pitches offered by the host.
pub const GRID_PITCH_PRESETS: [f64; 4] = [10.0, 20.0, 30.0, 40.0];

/// Wall thickness presets.
pub const THICKNESS_THIN: f64 = 2.0;
pub const THICKNESS_MEDIUM: f64 = 4.0;
pub const THICKNESS_THICK: f64 = 6.0;

/// Default drawing surface size.
pub const DEFAULT_SURFACE: Size = Size::new(800.0, 600.0);

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Grid pitch must be a positive number, got {0}")]
    InvalidGridPitch(f64),
    #[error("Wall thickness must be a positive number, got {0}")]
    InvalidThickness(f64),
    #[error("Surface size must be positive, got {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shade of the background grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridShade {
    #[default]
    Light,
    Medium,
    Dark,
}

impl GridShade {
    /// Get display name for this shade.
    pub fn name(self) -> &'static str {
        match self {
            GridShade::Light => "Light",
            GridShade::Medium => "Medium",
            GridShade::Dark => "Dark",
        }
    }
}

/// Values the host feeds into the editor.
///
/// Changes only apply to operations after the change; committed walls keep
/// the geometry and thickness they were drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid spacing. Also sets the snap thresholds.
    pub grid_pitch: f64,
    /// Thickness given to new walls.
    pub thickness: f64,
    /// Drawing surface size; alignment rulers span it.
    pub surface: Size,
    /// Background grid shade.
    pub grid_shade: GridShade,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_pitch: 20.0,
            thickness: THICKNESS_MEDIUM,
            surface: DEFAULT_SURFACE,
            grid_shade: GridShade::Light,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl EditorConfig {
    /// Parse and validate a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_grid_pitch(self.grid_pitch)?;
        validate_thickness(self.thickness)?;
        validate_surface(self.surface)?;
        Ok(())
    }
}

pub(crate) fn validate_grid_pitch(pitch: f64) -> Result<(), ConfigError> {
    if is_positive(pitch) {
        Ok(())
    } else {
        Err(ConfigError::InvalidGridPitch(pitch))
    }
}

pub(crate) fn validate_thickness(thickness: f64) -> Result<(), ConfigError> {
    if is_positive(thickness) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThickness(thickness))
    }
}

pub(crate) fn validate_surface(surface: Size) -> Result<(), ConfigError> {
    if is_positive(surface.width) && is_positive(surface.height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSurface {
            width: surface.width,
            height: surface.height,
        })
    }
}
