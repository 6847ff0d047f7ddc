//! Wall-clock collaborator
//!
//! Only cosmetic animation reads the clock; the simulation steps on a fixed
//! timestep and never sees it.

use std::time::Instant;

/// Source of wall-clock time
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> f64;
}

/// Real time since construction
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// A clock that reads whatever it was last set to (replays, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    pub ms: f64,
}

impl FixedClock {
    pub fn advance(&mut self, ms: f64) {
        self.ms += ms;
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> f64 {
        self.ms
    }
}
