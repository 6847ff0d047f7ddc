//! Headless renderer that reports frames through the `log` facade
//!
//! Used by the native demo, where there is no window to draw into.

use super::animation::Animation;
use super::{FrameSnapshot, Renderer};
use crate::settings::Settings;
use crate::sim::GamePhase;

/// Entities within this distance of the viewport count as on screen
const VISIBILITY_MARGIN: f32 = 50.0;

/// Logs a HUD line every `interval` frames and announces phase changes
#[derive(Debug)]
pub struct LogRenderer {
    interval: u64,
    show_hud: bool,
    trail_samples: usize,
    sparkles: bool,
    frames: u64,
    last_phase: Option<GamePhase>,
}

impl LogRenderer {
    pub fn new(interval: u64, settings: &Settings) -> Self {
        Self {
            interval: interval.max(1),
            show_hud: settings.show_hud,
            trail_samples: settings.trail_samples(),
            sparkles: settings.quality.sparkles_enabled(),
            frames: 0,
            last_phase: None,
        }
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameSnapshot<'_>, anim: &Animation) {
        self.frames += 1;

        if self.last_phase != Some(frame.phase) {
            match frame.phase {
                GamePhase::Playing => log::info!("Playing"),
                GamePhase::GameOver => log::info!(
                    "GAME OVER - final score {}, lives lost {}",
                    frame.score,
                    frame.lives_lost
                ),
                GamePhase::Victory => log::info!("VICTORY! - final score {}", frame.score),
            }
            self.last_phase = Some(frame.phase);
        }

        if !self.show_hud || self.frames % self.interval != 0 {
            return;
        }

        let camera = frame.camera;
        let visible_enemies = frame
            .enemies
            .iter()
            .filter(|e| camera.is_visible(&e.rect(), VISIBILITY_MARGIN))
            .count();
        let visible_orbs = frame
            .pickups
            .iter()
            .filter(|p| !p.collected && camera.is_visible(&p.hitbox(), VISIBILITY_MARGIN))
            .count();
        let screen = camera.world_to_screen(frame.player.pos);

        log::info!(
            "Score: {} Lives: {} | droplet at ({:.0}, {:.0}) screen ({:.0}, {:.0}) | {} enemies, {} orbs, {} shots on screen",
            frame.score,
            frame.player.lives,
            frame.player.pos.x,
            frame.player.pos.y,
            screen.x,
            screen.y,
            visible_enemies,
            visible_orbs,
            frame.projectiles.len()
        );
        let trail_points: usize = frame
            .projectiles
            .iter()
            .map(|p| p.trail.len().min(self.trail_samples))
            .sum();
        log::trace!(
            "alpha={} mouth={:?} pulse={:.2} trail points={} sparkles={}",
            anim.player_alpha(frame.player),
            anim.mouth(frame.player),
            anim.projectile_scale(),
            trail_points,
            self.sparkles
        );
    }
}
