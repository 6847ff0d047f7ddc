//! Damage, victory and pickup resolution
//!
//! Every source of damage runs the same sequence: back to spawn, one life
//! lost, invulnerability window, and GameOver when the last life goes.

use super::events::{DamageCause, GameEvent};
use super::state::{GamePhase, GameState};

/// Take a life from the player and check for GameOver.
///
/// Does nothing while the player is invulnerable.
fn apply_hit(state: &mut GameState, cause: DamageCause) -> bool {
    if !state.player.take_hit(state.tuning.invulnerability_ms) {
        return false;
    }

    let lives_left = state.player.lives;
    state.events.push(GameEvent::PlayerDamaged { cause, lives_left });
    log::debug!("Player hit by {:?}, {} lives left", cause, lives_left);

    if lives_left == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        log::info!("Game over, final score {}", state.score);
    }
    true
}

/// Hurt the player by contact with an enemy or spike.
///
/// While invulnerable the contact is ignored entirely. Returns whether
/// damage was applied.
pub fn hurt_player(state: &mut GameState, cause: DamageCause) -> bool {
    if state.player.is_invulnerable() {
        return false;
    }
    state.player.respawn();
    state.events.push(GameEvent::PlayerRespawned);
    apply_hit(state, cause)
}

/// The player fell out of the world: always respawn, damage unless
/// invulnerable
pub fn fall_out(state: &mut GameState) -> bool {
    state.player.respawn();
    state.events.push(GameEvent::PlayerRespawned);
    apply_hit(state, DamageCause::FellOut)
}

/// Resolve enemy, spike and portal contact against the player's position
pub fn resolve_hazards(state: &mut GameState) {
    let body = state.player.rect();
    if state.enemies.iter().any(|e| e.rect().intersects(&body)) {
        hurt_player(state, DamageCause::Enemy);
    }

    let body = state.player.rect();
    if state.level.spikes.iter().any(|s| s.intersects(&body)) {
        hurt_player(state, DamageCause::Spike);
    }

    let body = state.player.rect();
    if !state.player.is_invulnerable() && state.level.portal.intersects(&body) {
        state.phase = GamePhase::Victory;
        state.events.push(GameEvent::Victory);
        log::info!("Victory! Final score {}", state.score);
    }
}

/// Collect every uncollected orb the player touches.
///
/// Returns the number collected this call.
pub fn collect_pickups(state: &mut GameState) -> usize {
    let body = state.player.rect();
    let mut collected = 0;
    for orb in &mut state.pickups {
        if orb.collected || !orb.hitbox().intersects(&body) {
            continue;
        }
        orb.collected = true;
        state.score += state.tuning.pickup_score;
        state.events.push(GameEvent::PickupCollected { pickup_id: orb.id });
        log::debug!("Sun orb {} collected", orb.id);
        collected += 1;
    }
    collected
}
