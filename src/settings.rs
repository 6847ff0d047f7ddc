//! Presentation preferences and key bindings
//!
//! Nothing in here affects the simulation. Settings are read by the input
//! layer (bindings) and by renderers (effects).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::KeyBindings;
use crate::sim::TRAIL_LENGTH;

/// Effect detail level, written in lowercase in settings files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    /// Short trails, no sparkles
    Low,
    #[default]
    Medium,
    /// Full trail history
    High,
}

impl QualityPreset {
    /// How many projectile trail samples a renderer should draw
    pub fn trail_samples(&self) -> usize {
        match self {
            QualityPreset::Low => 2,
            QualityPreset::Medium => 5,
            QualityPreset::High => TRAIL_LENGTH,
        }
    }

    /// Whether to draw projectile sparkles and orb rays
    pub fn sparkles_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Projectile trails
    pub trails: bool,
    /// Flash the droplet while invulnerable
    pub invulnerability_flash: bool,

    // === HUD ===
    /// Show score and lives
    pub show_hud: bool,

    // === Accessibility ===
    /// Reduced motion (no pulsing, swaying or flashing)
    pub reduced_motion: bool,

    // === Controls ===
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            trails: true,
            invulnerability_flash: true,
            show_hud: true,
            reduced_motion: false,
            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Effective trail sample count (0 when trails are off)
    pub fn trail_samples(&self) -> usize {
        if self.trails {
            self.quality.trail_samples()
        } else {
            0
        }
    }

    /// Effective invulnerability flash (respects reduced_motion)
    pub fn effective_flash(&self) -> bool {
        self.invulnerability_flash && !self.reduced_motion
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }
}
