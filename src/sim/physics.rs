//! Player movement
//!
//! Horizontal speed is set directly from input (no acceleration); vertical
//! speed accumulates gravity with no terminal velocity. Integration is
//! semi-implicit Euler: velocity first, then position.

use super::collision::find_landing;
use super::state::{Facing, Platform, Player};
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;

/// Apply held input to the player.
///
/// Returns `true` when a shot should be fired this tick.
pub fn apply_input(player: &mut Player, input: &TickInput, tuning: &Tuning) -> bool {
    if input.move_left {
        player.vel.x = -tuning.move_speed;
        player.facing = Facing::Left;
    } else if input.move_right {
        player.vel.x = tuning.move_speed;
        player.facing = Facing::Right;
    } else {
        player.vel.x = 0.0;
    }

    if input.jump && player.on_ground {
        player.vel.y = tuning.jump_force;
        player.on_ground = false;
        player.jumping = true;
    }

    input.shoot && player.can_shoot()
}

/// Apply gravity and move by one tick of velocity
pub fn integrate(player: &mut Player, gravity: f32) {
    player.vel.y += gravity;
    player.pos += player.vel;
}

/// Rest the player on whatever platform it is falling onto
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform]) {
    player.on_ground = false;
    if let Some(landing) = find_landing(&player.rect(), player.vel.y, platforms) {
        player.pos.y = landing.top - player.size.y;
        player.vel.y = 0.0;
        player.on_ground = true;
        player.jumping = false;
    }
}

/// Keep the player inside the level horizontally.
///
/// Returns `true` if the player has fallen out of the bottom of the world.
pub fn clamp_to_level(player: &mut Player) -> bool {
    player.pos.x = player.pos.x.clamp(0.0, LEVEL_WIDTH - player.size.x);
    player.pos.y > CANVAS_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn held(f: impl FnOnce(&mut TickInput)) -> TickInput {
        let mut input = TickInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_horizontal_is_not_accumulated() {
        let tuning = Tuning::default();
        let mut player = Player::new(3);

        apply_input(&mut player, &held(|i| i.move_right = true), &tuning);
        apply_input(&mut player, &held(|i| i.move_right = true), &tuning);
        assert_eq!(player.vel.x, 7.0);
        assert_eq!(player.facing, Facing::Right);

        apply_input(&mut player, &TickInput::default(), &tuning);
        assert_eq!(player.vel.x, 0.0);
        // Facing is kept when stopping
        assert_eq!(player.facing, Facing::Right);

        apply_input(
            &mut player,
            &held(|i| {
                i.move_left = true;
                i.move_right = true;
            }),
            &tuning,
        );
        assert_eq!(player.vel.x, -7.0);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn test_jump_requires_ground() {
        let tuning = Tuning::default();
        let mut player = Player::new(3);
        let jump = held(|i| i.jump = true);

        apply_input(&mut player, &jump, &tuning);
        assert_eq!(player.vel.y, 0.0);

        player.on_ground = true;
        apply_input(&mut player, &jump, &tuning);
        assert_eq!(player.vel.y, -12.0);
        assert!(!player.on_ground);
        assert!(player.jumping);
    }

    #[test]
    fn test_shoot_gated_by_cooldown() {
        let tuning = Tuning::default();
        let mut player = Player::new(3);
        let shoot = held(|i| i.shoot = true);

        assert!(apply_input(&mut player, &shoot, &tuning));
        player.shoot_cooldown_ms = 300.0;
        assert!(!apply_input(&mut player, &shoot, &tuning));
        player.tick_timers(300.0);
        assert!(apply_input(&mut player, &shoot, &tuning));
    }

    #[test]
    fn test_gravity_is_uncapped() {
        let mut player = Player::new(3);
        for _ in 0..100 {
            integrate(&mut player, GRAVITY);
        }
        assert_eq!(player.vel.y, 50.0);
    }

    #[test]
    fn test_semi_implicit_euler() {
        let mut player = Player::new(3);
        player.vel = Vec2::new(7.0, 0.0);
        integrate(&mut player, GRAVITY);
        assert_eq!(player.pos, Vec2::new(57.0, 300.5));
    }

    #[test]
    fn test_landing_snaps_to_top() {
        let platforms = [Platform::cloud(0.0, 400.0, 200.0, 20.0)];
        let mut player = Player::new(3);
        player.pos = Vec2::new(50.0, 365.0);
        player.vel.y = 6.0;
        player.jumping = true;

        resolve_platforms(&mut player, &platforms);
        assert_eq!(player.pos.y, 360.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
        assert!(!player.jumping);
    }

    #[test]
    fn test_rising_through_platform_does_not_land() {
        let platforms = [Platform::cloud(0.0, 400.0, 200.0, 20.0)];
        let mut player = Player::new(3);
        player.pos = Vec2::new(50.0, 390.0);
        player.vel.y = -8.0;
        player.on_ground = true;

        resolve_platforms(&mut player, &platforms);
        assert_eq!(player.pos.y, 390.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_clamp_to_level() {
        let mut player = Player::new(3);
        player.pos.x = -20.0;
        assert!(!clamp_to_level(&mut player));
        assert_eq!(player.pos.x, 0.0);

        player.pos.x = LEVEL_WIDTH;
        clamp_to_level(&mut player);
        assert_eq!(player.pos.x, LEVEL_WIDTH - PLAYER_WIDTH);

        player.pos.y = CANVAS_HEIGHT + 1.0;
        assert!(clamp_to_level(&mut player));
    }
}
