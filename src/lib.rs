//! Gotinha - a droplet platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, enemies, game state)
//! - `input`: Held-key tracking and mapping to per-tick input
//! - `renderer`: Frame snapshots and cosmetic animation for external renderers
//! - `settings`: Presentation preferences and key bindings
//! - `tuning`: Data-driven gameplay constants

pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use input::KeyBindings;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const TICK_MS: f32 = 16.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Horizontal extent of the level
    pub const LEVEL_WIDTH: f32 = 9000.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    pub const STARTING_LIVES: u8 = 3;

    /// Movement (units per tick, units per tick²)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_FORCE: f32 = -12.0;
    pub const MOVE_SPEED: f32 = 7.0;

    /// Timers (milliseconds)
    pub const INVULNERABILITY_MS: f32 = 2000.0;
    pub const SHOOT_COOLDOWN_MS: f32 = 300.0;
    pub const MOUTH_OPEN_MS: f32 = 300.0;

    /// Projectiles
    pub const PROJECTILE_SIZE: f32 = 8.0;
    pub const PROJECTILE_SPEED: f32 = 6.0;
    /// Radians added to projectile rotation every tick
    pub const PROJECTILE_SPIN: f32 = 0.2;
    /// Distance outside the level before a projectile is culled
    pub const PROJECTILE_CULL_MARGIN: f32 = 50.0;

    /// Enemies
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 1.0;
    /// How close an enemy's feet must be to a platform top to stand on it
    pub const ENEMY_FOOTING_TOLERANCE: f32 = 5.0;

    /// Pickups (sun orbs)
    pub const PICKUP_COUNT: usize = 15;
    pub const PICKUP_HITBOX: f32 = 20.0;

    /// Scoring
    pub const ENEMY_SCORE: u64 = 25;
    pub const PICKUP_SCORE: u64 = 10;

    /// Ground platform top edge
    pub const GROUND_Y: f32 = 450.0;
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Camera follow
    pub const CAMERA_LERP: f32 = 0.1;
    pub const CAMERA_MIN_Y: f32 = -200.0;
    pub const CAMERA_MAX_Y: f32 = 200.0;
}
