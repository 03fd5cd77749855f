//! Cannonball kinematics
//!
//! Explicit Euler with a fixed step: one `step` per tick, velocity in pixels
//! per step, gravity in pixels per step squared.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A cannonball in flight (or parked at the cannon between shots)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Keep stepping while true
    pub active: bool,
    /// Recent positions, oldest first, for rendering only
    pub trail: VecDeque<Vec2>,
}

impl Projectile {
    /// Parked projectile: at the cannon, not moving, no trail
    pub fn idle(launch_point: Vec2) -> Self {
        Self {
            pos: launch_point,
            vel: Vec2::ZERO,
            active: false,
            trail: VecDeque::new(),
        }
    }

    /// Initial flight state for a shot
    ///
    /// `angle` is in degrees, `speed` in slider units; both are expected to
    /// be clamped already.
    pub fn launch(angle: f32, speed: f32, tuning: &Tuning) -> Self {
        let multiplier = speed / tuning.speed_divisor;
        let vel = crate::launch_direction(angle) * multiplier * tuning.velocity_scale;

        let mut trail = VecDeque::with_capacity(tuning.trail_window);
        trail.push_back(tuning.launch_point);

        Self {
            pos: tuning.launch_point,
            vel,
            active: true,
            trail,
        }
    }

    /// Advance one step. No-op once the projectile has stopped.
    pub fn step(&mut self, tuning: &Tuning) {
        if !self.active {
            return;
        }

        self.pos += self.vel;
        self.vel.y += tuning.gravity;

        self.record_trail(tuning.trail_window);

        if tuning.out_of_bounds(self.pos) {
            self.active = false;
        }
    }

    /// Append current position, evicting the oldest beyond `window`
    fn record_trail(&mut self, window: usize) {
        self.trail.push_back(self.pos);
        while self.trail.len() > window {
            self.trail.pop_front();
        }
    }

    /// Trail positions, oldest first
    pub fn trail_points(&self) -> Vec<Vec2> {
        self.trail.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Outcome;
    use proptest::prelude::*;

    #[test]
    fn test_launch_45_at_20() {
        let tuning = Tuning::default();
        let p = Projectile::launch(45.0, 20.0, &tuning);
        assert!((p.vel.x - 5.657).abs() < 1e-3);
        assert!((p.vel.y + 5.657).abs() < 1e-3);
        assert_eq!(p.pos, Vec2::new(50.0, 320.0));
        assert!(p.active);
        assert_eq!(p.trail_points(), vec![Vec2::new(50.0, 320.0)]);
    }

    #[test]
    fn test_step_order() {
        let tuning = Tuning::default();
        let mut p = Projectile::launch(45.0, 20.0, &tuning);
        let v0 = p.vel;
        p.step(&tuning);
        // Position moves with the pre-gravity velocity
        assert_eq!(p.pos, Vec2::new(50.0, 320.0) + v0);
        assert!((p.vel.y - (v0.y + 0.5)).abs() < 1e-6);
        assert_eq!(p.vel.x, v0.x);
        assert_eq!(p.trail.len(), 2);
        assert_eq!(p.trail.back().copied(), Some(p.pos));
    }

    #[test]
    fn test_step_is_deterministic() {
        let tuning = Tuning::default();
        let start = Projectile::launch(37.0, 13.0, &tuning);
        let mut a = start.clone();
        let mut b = start.clone();
        a.step(&tuning);
        b.step(&tuning);
        assert_eq!(a, b);
    }

    #[test]
    fn test_trail_window_slides() {
        let tuning = Tuning::default();
        let mut p = Projectile::launch(85.0, 25.0, &tuning);
        let mut history = vec![p.pos];
        while p.active {
            p.step(&tuning);
            history.push(p.pos);
            assert!(p.trail.len() <= 31);
        }
        assert!(history.len() > 31, "flight too short to exercise the window");
        assert_eq!(p.trail.len(), 31);
        assert_eq!(p.trail_points(), history[history.len() - 31..].to_vec());
    }

    #[test]
    fn test_stopped_projectile_does_not_move() {
        let tuning = Tuning::default();
        let mut p = Projectile::launch(10.0, 25.0, &tuning);
        while p.active {
            p.step(&tuning);
        }
        let frozen = p.clone();
        p.step(&tuning);
        assert_eq!(p, frozen);
    }

    #[test]
    fn test_end_to_end_45_20() {
        let tuning = Tuning::default();
        let mut p = Projectile::launch(45.0, 20.0, &tuning);
        let mut steps = 0;
        while p.active {
            p.step(&tuning);
            steps += 1;
            assert!(steps < 1000, "flight never terminated");
        }
        assert!(p.pos.x > 800.0 || p.pos.y > 400.0);
        assert_eq!(tuning.target.judge(p.pos), Outcome::Miss);

        // Same inputs, same landing spot
        let mut again = Projectile::launch(45.0, 20.0, &tuning);
        while again.active {
            again.step(&tuning);
        }
        assert_eq!(again.pos, p.pos);
    }

    #[test]
    fn test_idle_is_parked() {
        let p = Projectile::idle(Vec2::new(50.0, 320.0));
        assert!(!p.active);
        assert!(p.trail.is_empty());
        assert_eq!(p.vel, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn launch_goes_up_and_right(angle in 10.0f32..=85.0, speed in 5.0f32..=25.0) {
            let p = Projectile::launch(angle, speed, &Tuning::default());
            prop_assert!(p.vel.x >= 0.0);
            prop_assert!(p.vel.y <= 0.0);
        }

        #[test]
        fn inactive_iff_out_of_bounds(angle in 10.0f32..=85.0, speed in 5.0f32..=25.0) {
            let tuning = Tuning::default();
            let mut p = Projectile::launch(angle, speed, &tuning);
            let mut steps = 0;
            while p.active && steps < 2000 {
                p.step(&tuning);
                steps += 1;
                let out = p.pos.x > 800.0 || p.pos.y > 400.0;
                prop_assert_eq!(!p.active, out);
                prop_assert!(p.trail.len() <= 31);
            }
            prop_assert!(!p.active);
        }
    }
}
