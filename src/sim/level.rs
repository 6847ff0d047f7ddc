//! The compiled-in level
//!
//! Geometry and enemy placements are fixed tables. Only the sun orb layout is
//! randomized, from the run seed, once at level load.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{Enemy, Facing, Pickup, Platform, PlatformKind};
use crate::consts::*;

/// Floating platforms (x, y, width, height), left to right then the climbing set
const CLOUDS: [(f32, f32, f32, f32); 27] = [
    (0.0, 400.0, 200.0, 20.0),
    (600.0, 350.0, 150.0, 20.0),
    (1200.0, 300.0, 200.0, 20.0),
    (1800.0, 250.0, 150.0, 20.0),
    (2400.0, 200.0, 200.0, 20.0),
    (3000.0, 150.0, 150.0, 20.0),
    (3600.0, 100.0, 200.0, 20.0),
    (4200.0, 50.0, 150.0, 20.0),
    (4800.0, 100.0, 200.0, 20.0),
    (5400.0, 150.0, 150.0, 20.0),
    (6000.0, 200.0, 200.0, 20.0),
    (6600.0, 250.0, 150.0, 20.0),
    (7200.0, 300.0, 200.0, 20.0),
    (7800.0, 350.0, 150.0, 20.0),
    (8400.0, 400.0, 200.0, 20.0),
    (900.0, 180.0, 100.0, 20.0),
    (1500.0, 130.0, 80.0, 20.0),
    (2100.0, 80.0, 120.0, 20.0),
    (2700.0, 30.0, 100.0, 20.0),
    (3300.0, 20.0, 90.0, 20.0),
    (3900.0, 30.0, 110.0, 20.0),
    (4500.0, 80.0, 100.0, 20.0),
    (5100.0, 130.0, 120.0, 20.0),
    (5700.0, 180.0, 100.0, 20.0),
    (6300.0, 230.0, 150.0, 20.0),
    (6900.0, 280.0, 100.0, 20.0),
    (7500.0, 330.0, 120.0, 20.0),
];

/// Ice spike x positions; all sit at y = 460 with a 30×40 footprint
const SPIKE_XS: [f32; 13] = [
    300.0, 800.0, 1300.0, 1800.0, 2200.0, 2600.0, 3000.0, 3400.0, 3800.0, 4200.0, 4600.0, 5000.0,
    5400.0,
];
const SPIKE_Y: f32 = 460.0;
const SPIKE_WIDTH: f32 = 30.0;
const SPIKE_HEIGHT: f32 = 40.0;

/// The golden victory portal
pub const PORTAL: Rect = Rect::new(5800.0, 460.0, 50.0, 40.0);

/// Enemy patrol starts (x, y, initial facing)
const ENEMY_SPAWNS: [(f32, f32, Facing); 7] = [
    (500.0, 320.0, Facing::Left),
    (1200.0, 270.0, Facing::Right),
    (2000.0, 120.0, Facing::Left),
    (2800.0, 20.0, Facing::Right),
    (3600.0, 70.0, Facing::Left),
    (4400.0, 220.0, Facing::Right),
    (5200.0, 320.0, Facing::Left),
];

/// Orb anchors are spaced this far apart horizontally
const ORB_SPACING: f32 = 500.0;
const ORB_BASE_X: f32 = 200.0;
const ORB_BASE_Y: f32 = 200.0;
/// Maximum random offset from an anchor, on each axis
const ORB_JITTER: f32 = 200.0;

/// Static level geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Clouds first, ground last
    pub platforms: Vec<Platform>,
    /// Damaging ice spikes
    pub spikes: Vec<Rect>,
    /// The single victory trigger
    pub portal: Rect,
}

impl Level {
    /// The one and only level
    pub fn standard() -> Self {
        let mut platforms: Vec<Platform> = CLOUDS
            .iter()
            .map(|&(x, y, w, h)| Platform::cloud(x, y, w, h))
            .collect();
        platforms.push(Platform {
            rect: Rect::new(0.0, GROUND_Y, LEVEL_WIDTH, GROUND_HEIGHT),
            kind: PlatformKind::Ground,
        });

        let spikes = SPIKE_XS
            .iter()
            .map(|&x| Rect::new(x, SPIKE_Y, SPIKE_WIDTH, SPIKE_HEIGHT))
            .collect();

        Self {
            platforms,
            spikes,
            portal: PORTAL,
        }
    }

    /// Platforms enemies may patrol on (everything except the ground)
    pub fn patrol_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| !p.is_ground())
    }
}

/// Fresh enemies at their level placements
pub fn spawn_enemies() -> Vec<Enemy> {
    ENEMY_SPAWNS
        .iter()
        .enumerate()
        .map(|(i, &(x, y, facing))| Enemy::new(i as u32, x, y, facing))
        .collect()
}

/// Scatter the sun orbs around evenly spaced anchors
pub fn scatter_pickups(seed: u64) -> Vec<Pickup> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..PICKUP_COUNT)
        .map(|i| {
            let x = ORB_BASE_X + i as f32 * ORB_SPACING + rng.random_range(0.0..ORB_JITTER);
            let y = ORB_BASE_Y + rng.random_range(0.0..ORB_JITTER);
            Pickup {
                id: i as u32,
                pos: Vec2::new(x, y),
                collected: false,
            }
        })
        .collect()
}
