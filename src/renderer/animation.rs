//! Cosmetic animation values
//!
//! Derived from wall-clock time and never fed back into the simulation, so
//! replays stay deterministic no matter how fast frames are drawn.

use crate::settings::Settings;
use crate::sim::Player;

/// Droplet mouth shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mouth {
    /// Just fired
    Open,
    /// Walking
    Smile,
    /// Idle
    Dot,
}

/// Animation values for one frame
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    /// Wall-clock time in milliseconds
    pub time_ms: f64,
    reduced_motion: bool,
    flash: bool,
}

impl Animation {
    pub fn new(time_ms: f64, settings: &Settings) -> Self {
        Self {
            time_ms,
            reduced_motion: settings.reduced_motion,
            flash: settings.effective_flash(),
        }
    }

    /// Slow phase used by enemies, orbs and the portal
    fn slow_phase(&self) -> f32 {
        (self.time_ms * 0.005) as f32
    }

    /// Projectile pulse, 0.8..=1.2
    pub fn projectile_scale(&self) -> f32 {
        if self.reduced_motion {
            return 1.0;
        }
        1.0 + ((self.time_ms * 0.01) as f32).sin() * 0.2
    }

    /// Horizontal sway of an enemy smoke layer
    pub fn enemy_sway(&self, layer: usize) -> f32 {
        if self.reduced_motion {
            return 0.0;
        }
        (self.slow_phase() + layer as f32).sin() * 3.0
    }

    /// Vertical bob of a sun orb
    pub fn orb_bob(&self, index: usize) -> f32 {
        if self.reduced_motion {
            return 0.0;
        }
        (self.slow_phase() + index as f32).sin() * 3.0
    }

    /// Portal ring rotation (radians)
    pub fn portal_swirl(&self) -> f32 {
        if self.reduced_motion {
            return 0.0;
        }
        self.slow_phase()
    }

    /// Droplet opacity; flickers at half strength while invulnerable
    pub fn player_alpha(&self, player: &Player) -> f32 {
        if player.is_invulnerable() && self.flash && (self.time_ms / 100.0).floor() as i64 % 2 == 1 {
            0.5
        } else {
            1.0
        }
    }

    /// Eye radius; shrinks briefly to blink
    pub fn eye_radius(&self) -> f32 {
        if ((self.time_ms * 0.001) as f32).sin() > 0.95 {
            1.0
        } else {
            3.0
        }
    }

    pub fn mouth(&self, player: &Player) -> Mouth {
        if player.mouth_open() {
            Mouth::Open
        } else if player.vel.x != 0.0 {
            Mouth::Smile
        } else {
            Mouth::Dot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_scale_range() {
        let settings = Settings::default();
        for t in 0..1000 {
            let scale = Animation::new(t as f64 * 7.0, &settings).projectile_scale();
            assert!((0.8..=1.2).contains(&scale));
        }
    }

    #[test]
    fn test_reduced_motion_is_still() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        let anim = Animation::new(1234.0, &settings);
        assert_eq!(anim.projectile_scale(), 1.0);
        assert_eq!(anim.enemy_sway(2), 0.0);
        assert_eq!(anim.orb_bob(4), 0.0);
        assert_eq!(anim.portal_swirl(), 0.0);
    }

    #[test]
    fn test_invulnerability_flash() {
        let settings = Settings::default();
        let mut player = Player::new(3);
        assert_eq!(Animation::new(150.0, &settings).player_alpha(&player), 1.0);

        player.invulnerable_ms = 1000.0;
        assert_eq!(Animation::new(50.0, &settings).player_alpha(&player), 1.0);
        assert_eq!(Animation::new(150.0, &settings).player_alpha(&player), 0.5);
    }

    #[test]
    fn test_mouth_shapes() {
        let anim = Animation::new(0.0, &Settings::default());
        let mut player = Player::new(3);
        assert_eq!(anim.mouth(&player), Mouth::Dot);
        player.vel.x = 7.0;
        assert_eq!(anim.mouth(&player), Mouth::Smile);
        player.mouth_open_ms = 100.0;
        assert_eq!(anim.mouth(&player), Mouth::Open);
    }
}
