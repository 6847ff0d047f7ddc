//! Data-driven gameplay balance
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! tuning file only needs the values it overrides. Tuning is stored inside
//! the game state, which keeps a run reproducible from its seed and tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay constants that may be overridden at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (units per tick²)
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_force: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Horizontal projectile speed
    pub projectile_speed: f32,
    /// Minimum time between shots (ms)
    pub shoot_cooldown_ms: f32,
    /// Grace period after taking damage (ms)
    pub invulnerability_ms: f32,
    /// Fraction of the remaining distance the camera covers each tick
    pub camera_lerp: f32,
    /// Lives at the start of a run
    pub starting_lives: u8,
    /// Points for defeating an enemy
    pub enemy_score: u64,
    /// Points for collecting a sun orb
    pub pickup_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            move_speed: MOVE_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            invulnerability_ms: INVULNERABILITY_MS,
            camera_lerp: CAMERA_LERP,
            starting_lives: STARTING_LIVES,
            enemy_score: ENEMY_SCORE,
            pickup_score: PICKUP_SCORE,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON string and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(
            name: &'static str,
            value: f32,
            ok: bool,
            expected: &'static str,
        ) -> Result<(), ConfigError> {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange {
                    name,
                    value,
                    expected,
                })
            }
        }

        check("gravity", self.gravity, self.gravity > 0.0, "> 0")?;
        check("jump_force", self.jump_force, self.jump_force < 0.0, "< 0")?;
        check("move_speed", self.move_speed, self.move_speed >= 0.0, ">= 0")?;
        check(
            "projectile_speed",
            self.projectile_speed,
            self.projectile_speed > 0.0,
            "> 0",
        )?;
        check(
            "shoot_cooldown_ms",
            self.shoot_cooldown_ms,
            self.shoot_cooldown_ms >= 0.0,
            ">= 0",
        )?;
        check(
            "invulnerability_ms",
            self.invulnerability_ms,
            self.invulnerability_ms >= 0.0,
            ">= 0",
        )?;
        check(
            "camera_lerp",
            self.camera_lerp,
            self.camera_lerp > 0.0 && self.camera_lerp <= 1.0,
            "in (0, 1]",
        )?;
        check(
            "starting_lives",
            self.starting_lives as f32,
            self.starting_lives >= 1,
            ">= 1",
        )?;
        Ok(())
    }
}
