//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically. Per tick:
//! timers → input → player physics → platforms and bounds → hazards and
//! pickups → camera → projectiles → enemies.

use super::autopilot::autopilot_input;
use super::enemy::update_enemies;
use super::hazards::{collect_pickups, fall_out, resolve_hazards};
use super::physics;
use super::projectile::{fire, update_projectiles};
use super::state::{GamePhase, GameState};

/// Held actions for a single tick (levelled, not edge-triggered)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Fires repeatedly while held, limited by the shoot cooldown
    pub shoot: bool,
    /// Only acted on from GameOver or Victory
    pub restart: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep.
///
/// `dt_ms` only drives the millisecond timers (invulnerability, shoot
/// cooldown); movement is in units per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    state.events.clear();

    let demo;
    let input = if input.idle_mode {
        demo = autopilot_input(state);
        &demo
    } else {
        input
    };

    // Terminal phases only wait for a restart
    if state.phase.is_terminal() {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.time_ticks += 1;
    state.player.tick_timers(dt_ms);

    // --- PLAYER ---
    let wants_shot = physics::apply_input(&mut state.player, input, &state.tuning);
    if wants_shot {
        fire(state);
    }
    physics::integrate(&mut state.player, state.tuning.gravity);
    physics::resolve_platforms(&mut state.player, &state.level.platforms);
    if physics::clamp_to_level(&mut state.player) {
        fall_out(state);
    }

    // --- CONTACTS ---
    resolve_hazards(state);
    collect_pickups(state);
    if state.phase != GamePhase::Playing {
        return;
    }

    // --- CAMERA ---
    state.camera.follow(state.player.pos, state.tuning.camera_lerp);

    // --- PROJECTILES & ENEMIES ---
    update_projectiles(state);
    update_enemies(state);

    // Ensure deterministic ordering
    state.normalize_order();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::events::GameEvent;
    use glam::Vec2;

    #[test]
    fn test_lands_on_spawn_platform() {
        let mut state = GameState::new(12345);
        let input = TickInput::default();
        for _ in 0..30 {
            tick(&mut state, &input, TICK_MS);
        }
        assert!(state.player.on_ground);
        assert_eq!(state.player.pos.y, 400.0 - PLAYER_HEIGHT);
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(state.player.pos.x, PLAYER_SPAWN_X);
    }

    #[test]
    fn test_jump_leaves_ground() {
        let mut state = GameState::new(12345);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), TICK_MS);
        }
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, TICK_MS);
        assert!(!state.player.on_ground);
        assert!(state.player.jumping);
        // -12 + 0.5 applied in the same tick
        assert_eq!(state.player.vel.y, -11.5);
        assert_eq!(state.player.pos.y, 360.0 - 11.5);
    }

    #[test]
    fn test_holding_shoot_respects_cooldown() {
        let mut state = GameState::new(12345);
        let shoot = TickInput {
            shoot: true,
            ..Default::default()
        };
        let mut fired = 0;
        for _ in 0..40 {
            tick(&mut state, &shoot, TICK_MS);
            fired += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::ProjectileFired { .. }))
                .count();
        }
        // One shot every 19 ticks (ceil(300 / 16))
        assert_eq!(fired, 3);
    }

    #[test]
    fn test_falling_out_costs_a_life() {
        let mut state = GameState::new(12345);
        state.player.pos = Vec2::new(700.0, CANVAS_HEIGHT + 10.0);
        tick(&mut state, &TickInput::default(), TICK_MS);

        assert_eq!(state.player.lives, 2);
        assert_eq!(state.player.pos, Vec2::new(50.0, 300.0));
        assert!(state.player.is_invulnerable());
    }

    #[test]
    fn test_no_updates_after_game_over() {
        let mut state = GameState::new(12345);
        state.player.lives = 1;
        state.player.pos = Vec2::new(700.0, CANVAS_HEIGHT + 10.0);
        tick(&mut state, &TickInput::default(), TICK_MS);
        assert_eq!(state.phase, GamePhase::GameOver);

        let ticks = state.time_ticks;
        let enemies = state.enemies.clone();
        tick(&mut state, &TickInput::default(), TICK_MS);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.enemies, enemies);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(12345);
        state.score = 40;
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart, TICK_MS);
        assert_eq!(state.score, 40);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_victory_through_tick() {
        let mut state = GameState::new(12345);
        // Rising through the portal from below the ground surface
        state.player.pos = Vec2::new(5810.0, 470.0);
        state.player.vel.y = -12.0;
        tick(&mut state, &TickInput::default(), TICK_MS);
        assert_eq!(state.phase, GamePhase::Victory);
        assert!(state.events.contains(&GameEvent::Victory));
    }

    #[test]
    fn test_idle_mode_runs_right() {
        let mut state = GameState::new(12345);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..120 {
            tick(&mut state, &idle, TICK_MS);
        }
        assert!(state.player.pos.x > PLAYER_SPAWN_X);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput {
                jump: true,
                shoot: true,
                ..Default::default()
            },
            TickInput {
                move_left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input, TICK_MS);
                tick(&mut state2, input, TICK_MS);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.enemies, state2.enemies);
        assert_eq!(state1.projectiles.len(), state2.projectiles.len());
        assert_eq!(state1.score, state2.score);
    }
}
