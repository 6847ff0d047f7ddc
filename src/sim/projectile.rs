//! Water shots: spawning, flight and culling
//!
//! Hits against enemies are resolved by the enemy system after both sides
//! have moved.

use glam::Vec2;

use super::events::GameEvent;
use super::state::{Facing, GameState, Projectile};
use crate::consts::*;

/// Fire a shot from the player's leading edge and start the cooldown
pub fn fire(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let player = &mut state.player;

    let x = match player.facing {
        Facing::Right => player.pos.x + player.size.x,
        Facing::Left => player.pos.x,
    };
    let y = player.pos.y + player.size.y / 2.0;

    state.projectiles.push(Projectile {
        id,
        pos: Vec2::new(x, y),
        size: Vec2::splat(PROJECTILE_SIZE),
        vel: Vec2::new(player.facing.sign() * state.tuning.projectile_speed, 0.0),
        rotation: 0.0,
        trail: Vec::new(),
    });

    player.shoot_cooldown_ms = state.tuning.shoot_cooldown_ms;
    player.mouth_open_ms = MOUTH_OPEN_MS;
    state.events.push(GameEvent::ProjectileFired { id });
    id
}

/// Advance one projectile by a tick
pub fn advance(projectile: &mut Projectile) {
    projectile.record_trail();
    projectile.pos += projectile.vel;
    projectile.rotation += PROJECTILE_SPIN;
}

/// Whether a projectile is still inside the level plus the cull margin
pub fn in_bounds(projectile: &Projectile) -> bool {
    let p = projectile.pos;
    p.x > -PROJECTILE_CULL_MARGIN
        && p.x < LEVEL_WIDTH + PROJECTILE_CULL_MARGIN
        && p.y > -PROJECTILE_CULL_MARGIN
        && p.y < CANVAS_HEIGHT + PROJECTILE_CULL_MARGIN
}

/// Move every projectile and drop the ones that left the level
pub fn update_projectiles(state: &mut GameState) {
    for projectile in &mut state.projectiles {
        advance(projectile);
    }
    state.projectiles.retain(in_bounds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_from_leading_edge() {
        let mut state = GameState::new(1);
        let id = fire(&mut state);
        let shot = &state.projectiles[0];
        assert_eq!(shot.id, id);
        assert_eq!(shot.pos, Vec2::new(80.0, 320.0));
        assert_eq!(shot.vel, Vec2::new(6.0, 0.0));
        assert!(shot.trail.is_empty());
        assert_eq!(state.player.shoot_cooldown_ms, 300.0);
        assert!(state.player.mouth_open());
        assert_eq!(state.events, vec![GameEvent::ProjectileFired { id }]);

        state.player.facing = Facing::Left;
        fire(&mut state);
        let shot = &state.projectiles[1];
        assert_eq!(shot.pos.x, 50.0);
        assert_eq!(shot.vel.x, -6.0);
    }

    #[test]
    fn test_advance_spins_and_trails() {
        let mut state = GameState::new(1);
        fire(&mut state);
        let shot = &mut state.projectiles[0];
        advance(shot);
        advance(shot);
        assert_eq!(shot.pos.x, 92.0);
        assert!((shot.rotation - 0.4).abs() < 1e-6);
        assert_eq!(shot.trail.len(), 2);
        assert_eq!(shot.trail[0].pos.x, 86.0);
        assert_eq!(shot.trail[1].pos.x, 80.0);
    }

    #[test]
    fn test_cull_left_edge() {
        let mut state = GameState::new(1);
        state.projectiles.push(Projectile {
            id: 99,
            pos: Vec2::new(0.0, 300.0),
            size: Vec2::splat(PROJECTILE_SIZE),
            vel: Vec2::new(-6.0, 0.0),
            rotation: 0.0,
            trail: Vec::new(),
        });

        let limit = (50.0_f32 / 6.0).ceil() as usize + 1;
        let mut ticks = 0;
        while !state.projectiles.is_empty() {
            update_projectiles(&mut state);
            ticks += 1;
            assert!(ticks <= limit, "projectile survived {} ticks", ticks);
        }
    }

    #[test]
    fn test_in_bounds_margins() {
        let mut shot = Projectile {
            id: 1,
            pos: Vec2::new(LEVEL_WIDTH + 49.0, CANVAS_HEIGHT + 49.0),
            size: Vec2::splat(PROJECTILE_SIZE),
            vel: Vec2::ZERO,
            rotation: 0.0,
            trail: Vec::new(),
        };
        assert!(in_bounds(&shot));
        shot.pos.y = -50.0;
        assert!(!in_bounds(&shot));
    }
}
