//! Target rectangle geometry and the hit/miss judge
//!
//! The target is an axis-aligned rectangle in screen space:
//! - x, y: top-left corner
//! - width, height: extent toward +x and +y (downward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Outcome;

/// Fixed target rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Target {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center of the rectangle (bullseye)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict containment: a point on any edge is outside
    pub fn contains_strict(&self, pos: Vec2) -> bool {
        pos.x > self.x && pos.x < self.right() && pos.y > self.y && pos.y < self.bottom()
    }

    /// Classify the final position of a stopped projectile
    pub fn judge(&self, pos: Vec2) -> Outcome {
        if self.contains_strict(pos) {
            Outcome::Hit
        } else {
            Outcome::Miss
        }
    }

    /// Rectangle grown by `margin` on every side (hit highlight)
    pub fn inflated(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target::new(650.0, 280.0, 60.0, 50.0)
    }

    #[test]
    fn test_corner_is_miss() {
        assert_eq!(target().judge(Vec2::new(650.0, 280.0)), Outcome::Miss);
    }

    #[test]
    fn test_just_inside_corner_is_hit() {
        assert_eq!(target().judge(Vec2::new(651.0, 281.0)), Outcome::Hit);
    }

    #[test]
    fn test_edges_are_misses() {
        let t = target();
        // Inside on one axis only
        assert_eq!(t.judge(Vec2::new(680.0, 330.0)), Outcome::Miss);
        assert_eq!(t.judge(Vec2::new(710.0, 300.0)), Outcome::Miss);
        assert_eq!(t.judge(Vec2::new(680.0, 279.0)), Outcome::Miss);
        assert_eq!(t.judge(Vec2::new(640.0, 300.0)), Outcome::Miss);
    }

    #[test]
    fn test_center_and_inflate() {
        let t = target();
        assert_eq!(t.center(), Vec2::new(680.0, 305.0));
        let big = t.inflated(20.0);
        assert_eq!(big, Target::new(630.0, 260.0, 100.0, 90.0));
        assert_eq!(big.center(), t.center());
    }
}
