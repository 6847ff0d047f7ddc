//! Gameplay events raised during a tick
//!
//! Hosts read `GameState::events` after each tick to trigger sounds, screen
//! effects or HUD updates without diffing state. The list is cleared at the
//! start of every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// What hurt the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageCause {
    /// Fell below the bottom of the world
    FellOut,
    /// Touched an enemy
    Enemy,
    /// Touched an ice spike
    Spike,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { id: u32 },
    EnemyDefeated { enemy_id: u32, pos: Vec2 },
    PickupCollected { pickup_id: u32 },
    PlayerDamaged { cause: DamageCause, lives_left: u8 },
    /// Player was moved back to the spawn point
    PlayerRespawned,
    Victory,
    GameOver,
    Restarted,
}
