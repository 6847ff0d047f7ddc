//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (sun orb layout, once per run)
//! - Stable iteration order (by entity ID)
//! - No rendering, clock or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod enemy;
pub mod events;
pub mod geometry;
pub mod hazards;
pub mod level;
pub mod physics;
pub mod projectile;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{Landing, find_landing, supporting_platform};
pub use events::{DamageCause, GameEvent};
pub use geometry::Rect;
pub use level::Level;
pub use state::{
    Enemy, Facing, GamePhase, GameState, Pickup, Platform, PlatformKind, Player, Projectile,
    TRAIL_LENGTH, TrailPoint,
};
pub use tick::{TickInput, tick};
