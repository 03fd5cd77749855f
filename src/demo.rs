//! Unattended demo player
//!
//! Picks slider positions from a seeded PCG stream, so a demo run with the
//! same seed always fires the same volley.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Slider positions for one shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub angle: f32,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct DemoPlayer {
    seed: u64,
    rng: Pcg32,
}

impl DemoPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next shot, snapped to whole slider steps within the tuning's ranges
    pub fn next_shot(&mut self, tuning: &Tuning) -> Shot {
        let (min_a, max_a) = tuning.angle_range;
        let (min_s, max_s) = tuning.speed_range;
        let angle = self.rng.random_range(min_a.ceil() as i32..=max_a.floor() as i32) as f32;
        let speed = self.rng.random_range(min_s.ceil() as i32..=max_s.floor() as i32) as f32;
        Shot { angle, speed }
    }
}
