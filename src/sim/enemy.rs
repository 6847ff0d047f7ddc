//! Enemy patrol AI and projectile hits
//!
//! Enemies walk at a constant speed and turn around at the edges of the cloud
//! they stand on. They have no gravity: an enemy with nothing underneath just
//! keeps walking.

use super::collision::{at_platform_edge, supporting_platform};
use super::events::GameEvent;
use super::level::Level;
use super::state::{Enemy, GameState};

/// Move one enemy and turn it around at its platform's edge
pub fn patrol(enemy: &mut Enemy, level: &Level) {
    enemy.pos.x += enemy.vel_x;

    let rect = enemy.rect();
    if let Some(platform) = supporting_platform(&rect, level.patrol_platforms()) {
        if at_platform_edge(&rect, platform) {
            enemy.reverse();
        }
    }
}

/// Remove every enemy touched by a projectile, along with the projectiles.
///
/// Every enemy is tested against the full set of shots, so one shot can
/// defeat several overlapping enemies. Each defeated enemy awards the enemy
/// score once, however many shots hit it. Returns the number of enemies
/// defeated.
pub fn resolve_projectile_hits(state: &mut GameState) -> usize {
    let GameState {
        enemies,
        projectiles,
        score,
        events,
        tuning,
        ..
    } = state;

    let mut spent = vec![false; projectiles.len()];
    let before = enemies.len();
    enemies.retain(|enemy| {
        let rect = enemy.rect();
        let mut hit = false;
        for (i, p) in projectiles.iter().enumerate() {
            if p.rect().intersects(&rect) {
                spent[i] = true;
                hit = true;
            }
        }
        if !hit {
            return true;
        }

        *score += tuning.enemy_score;
        events.push(GameEvent::EnemyDefeated {
            enemy_id: enemy.id,
            pos: enemy.pos,
        });
        log::debug!("Enemy {} defeated at {:?}", enemy.id, enemy.pos);
        false
    });

    let mut spent = spent.into_iter();
    projectiles.retain(|_| !spent.next().unwrap_or(false));
    before - enemies.len()
}

/// Patrol all enemies, then resolve projectile hits
pub fn update_enemies(state: &mut GameState) {
    for enemy in &mut state.enemies {
        patrol(enemy, &state.level);
    }
    resolve_projectile_hits(state);
}
