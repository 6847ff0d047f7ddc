//! Demo mode: a simple AI that plays the level
//!
//! Runs right, shoots enemies in its firing line, hops over threats and
//! climbs onto clouds just ahead.

use super::geometry::Rect;
use super::state::GameState;
use super::tick::TickInput;

/// How far ahead to shoot at enemies
const SHOOT_RANGE: f32 = 300.0;
/// How far ahead a threat triggers a jump
const JUMP_LOOKAHEAD: f32 = 60.0;
/// Highest cloud top (above the feet) worth jumping for
const CLIMB_HEIGHT: f32 = 130.0;

/// Build the input the demo player would press this tick
pub fn autopilot_input(state: &GameState) -> TickInput {
    if state.phase.is_terminal() {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let player = &state.player;
    let body = player.rect();
    let muzzle_y = body.top() + body.size.y / 2.0;

    let enemy_in_line = state.enemies.iter().any(|e| {
        let r = e.rect();
        r.left() > body.right()
            && r.left() - body.right() < SHOOT_RANGE
            && r.top() <= muzzle_y
            && r.bottom() >= muzzle_y
    });

    let ahead = Rect::new(body.right(), body.top(), JUMP_LOOKAHEAD, body.size.y);
    let threat_ahead = state.enemies.iter().any(|e| e.rect().intersects(&ahead))
        || state.level.spikes.iter().any(|s| s.intersects(&ahead));

    let climbable = state.level.patrol_platforms().any(|p| {
        let rise = body.bottom() - p.rect.top();
        p.rect.left() > body.left()
            && p.rect.left() - body.right() < JUMP_LOOKAHEAD
            && rise > 0.0
            && rise < CLIMB_HEIGHT
    });

    TickInput {
        move_right: true,
        jump: player.on_ground && (threat_ahead || climbable),
        shoot: enemy_in_line,
        ..Default::default()
    }
}
