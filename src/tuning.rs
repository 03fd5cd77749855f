//! Data-driven game balance
//!
//! Every geometric and physical constant the simulation reads, gathered into
//! one value. `Tuning::default()` is the shipped game; it is not exposed
//! through `Settings`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Target;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width; crossing it stops the projectile
    pub width: f32,
    /// Playfield height; crossing it stops the projectile
    pub height: f32,
    /// Cannon position
    pub launch_point: Vec2,
    pub target: Target,
    /// Added to vertical velocity every step
    pub gravity: f32,
    pub max_hits: u32,
    pub trail_window: usize,
    pub angle_range: (f32, f32),
    pub speed_range: (f32, f32),
    pub speed_divisor: f32,
    pub velocity_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            launch_point: Vec2::new(CANNON_X, CANNON_Y),
            target: Target::new(TARGET_X, TARGET_Y, TARGET_WIDTH, TARGET_HEIGHT),
            gravity: GRAVITY,
            max_hits: MAX_HITS,
            trail_window: TRAIL_WINDOW,
            angle_range: (MIN_ANGLE, MAX_ANGLE),
            speed_range: (MIN_SPEED, MAX_SPEED),
            speed_divisor: SPEED_DIVISOR,
            velocity_scale: VELOCITY_SCALE,
        }
    }
}

impl Tuning {
    /// Clamp a requested launch angle to the slider range
    pub fn clamp_angle(&self, angle: f32) -> f32 {
        angle.clamp(self.angle_range.0, self.angle_range.1)
    }

    /// Clamp a requested launch speed to the slider range
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.speed_range.0, self.speed_range.1)
    }

    /// True once a position has left the playfield through the right or bottom edge
    #[inline]
    pub fn out_of_bounds(&self, pos: Vec2) -> bool {
        pos.x > self.width || pos.y > self.height
    }
}
