//! Renderer collaborator interface
//!
//! The simulation never draws. Once per tick the host captures a read-only
//! [`FrameSnapshot`] and hands it to a [`Renderer`] together with the
//! [`Animation`] values derived from the wall clock. A renderer that is
//! missing assets must fall back to simpler visuals; it cannot touch state.

pub mod animation;
pub mod clock;
pub mod log_renderer;

pub use animation::{Animation, Mouth};
pub use clock::{Clock, FixedClock, SystemClock};
pub use log_renderer::LogRenderer;

use serde::Serialize;

use crate::sim::{Camera, Enemy, GamePhase, GameState, Pickup, Platform, Player, Projectile, Rect};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<'a> {
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    pub platforms: &'a [Platform],
    pub spikes: &'a [Rect],
    pub portal: &'a Rect,
    pub pickups: &'a [Pickup],
    pub camera: &'a Camera,
    pub score: u64,
    pub phase: GamePhase,
    /// For the game-over screen
    pub lives_lost: u8,
}

impl<'a> FrameSnapshot<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            player: &state.player,
            enemies: &state.enemies,
            projectiles: &state.projectiles,
            platforms: &state.level.platforms,
            spikes: &state.level.spikes,
            portal: &state.level.portal,
            pickups: &state.pickups,
            camera: &state.camera,
            score: state.score,
            phase: state.phase,
            lives_lost: state.lives_lost(),
        }
    }

    /// Serialize the frame for out-of-process renderers
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Draws frames
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot<'_>, anim: &Animation);
}
