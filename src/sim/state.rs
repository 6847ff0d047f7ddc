//! Game state and core simulation types
//!
//! Everything the simulation reads or writes lives in [`GameState`]. Values
//! that only drive animation (pulses, sways, flashing) are derived by the
//! renderer and never stored here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::events::GameEvent;
use super::geometry::Rect;
use super::level::{self, Level};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives ran out
    GameOver,
    /// Player reached the portal
    Victory,
}

impl GamePhase {
    /// GameOver and Victory only leave through an explicit restart
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Horizontal facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// The droplet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    pub facing: Facing,
    /// Set on jump, cleared on landing
    pub jumping: bool,
    /// Time until the next shot is allowed (ms)
    pub shoot_cooldown_ms: f32,
    /// Time left on the "mouth open" firing animation (ms)
    pub mouth_open_ms: f32,
    pub lives: u8,
    /// Remaining invulnerability (ms); invulnerable while positive
    pub invulnerable_ms: f32,
}

impl Player {
    pub fn new(lives: u8) -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            on_ground: false,
            facing: Facing::Right,
            jumping: false,
            shoot_cooldown_ms: 0.0,
            mouth_open_ms: 0.0,
            lives,
            invulnerable_ms: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ms > 0.0
    }

    /// Cosmetic: true for a short while after firing
    #[inline]
    pub fn mouth_open(&self) -> bool {
        self.mouth_open_ms > 0.0
    }

    #[inline]
    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown_ms <= 0.0
    }

    /// Count down all timers by `dt_ms`
    pub fn tick_timers(&mut self, dt_ms: f32) {
        self.invulnerable_ms = (self.invulnerable_ms - dt_ms).max(0.0);
        self.shoot_cooldown_ms = (self.shoot_cooldown_ms - dt_ms).max(0.0);
        self.mouth_open_ms = (self.mouth_open_ms - dt_ms).max(0.0);
    }

    /// Back to the spawn point with no momentum
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        self.vel = Vec2::ZERO;
    }

    /// Lose a life and start the invulnerability window.
    ///
    /// Returns `false` without changing anything while already invulnerable.
    pub fn take_hit(&mut self, invulnerability_ms: f32) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invulnerable_ms = invulnerability_ms;
        true
    }
}

/// A patrolling smoke enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Signed horizontal speed (units per tick)
    pub vel_x: f32,
    pub facing: Facing,
}

impl Enemy {
    pub fn new(id: u32, x: f32, y: f32, facing: Facing) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            vel_x: ENEMY_SPEED * facing.sign(),
            facing,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Turn around (velocity and facing together)
    pub fn reverse(&mut self) {
        self.vel_x = -self.vel_x;
        self.facing = self.facing.reversed();
    }
}

/// Trail sample for projectile rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// 1.0 for the newest sample, fading linearly with age
    pub alpha: f32,
}

/// Maximum number of trail points to store
pub const TRAIL_LENGTH: usize = 8;

/// A water shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Spin angle (radians)
    pub rotation: f32,
    /// Trail history (newest first)
    pub trail: Vec<TrailPoint>,
}

impl Projectile {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Record current position to the trail and refresh the fade
    pub fn record_trail(&mut self) {
        self.trail.insert(
            0,
            TrailPoint {
                pos: self.pos,
                alpha: 1.0,
            },
        );
        self.trail.truncate(TRAIL_LENGTH);

        let len = self.trail.len() as f32;
        for (i, point) in self.trail.iter_mut().enumerate() {
            point.alpha = 1.0 - i as f32 / len;
        }
    }
}

/// Platform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Floating cloud
    #[default]
    Cloud,
    /// The full-width ground; never used for enemy patrols
    Ground,
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub const fn cloud(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            kind: PlatformKind::Cloud,
        }
    }

    pub fn is_ground(&self) -> bool {
        self.kind == PlatformKind::Ground
    }
}

/// A sun orb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
    /// Once set, never cleared
    pub collected: bool,
}

impl Pickup {
    /// Collection hitbox anchored at the orb position
    pub fn hitbox(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(PICKUP_HITBOX))
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay constants for this run
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player droplet
    pub player: Player,
    /// Active enemies (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    /// Active projectiles (sorted by id for determinism)
    pub projectiles: Vec<Projectile>,
    /// Sun orbs, collected or not
    pub pickups: Vec<Pickup>,
    /// Static level geometry
    pub level: Level,
    /// Follow camera (rendering offset only)
    pub camera: Camera,
    /// Events raised during the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next projectile ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let state = Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            player: Player::new(tuning.starting_lives),
            enemies: level::spawn_enemies(),
            projectiles: Vec::new(),
            pickups: level::scatter_pickups(seed),
            level: Level::standard(),
            camera: Camera::default(),
            events: Vec::new(),
            next_id: 1,
            tuning,
        };
        log::info!(
            "New run: seed={}, {} enemies, {} sun orbs",
            seed,
            state.enemies.len(),
            state.pickups.len()
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset player, enemies, projectiles and score and resume play.
    ///
    /// Collected orbs stay collected.
    pub fn restart(&mut self) {
        self.player = Player::new(self.tuning.starting_lives);
        self.enemies = level::spawn_enemies();
        self.projectiles.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Run restarted (seed {})", self.seed);
    }

    /// Lives lost so far this run
    pub fn lives_lost(&self) -> u8 {
        self.tuning.starting_lives.saturating_sub(self.player.lives)
    }

    /// Number of orbs still on the map
    pub fn orbs_remaining(&self) -> usize {
        self.pickups.iter().filter(|p| !p.collected).count()
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.projectiles.sort_by_key(|p| p.id);
        self.pickups.sort_by_key(|p| p.id);
    }
}
