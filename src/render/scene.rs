//! Frame assembly: snapshot in, triangles and labels out
//!
//! Draw order is back to front: sky, ground, grass, target, cannon, trail,
//! projectile, result overlay.

use glam::Vec2;
use serde::Serialize;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{Outcome, Snapshot};

/// Height of the ground band at the bottom of the field
pub const GROUND_HEIGHT: f32 = 60.0;
/// Horizontal spacing of grass strokes
pub const GRASS_SPACING: f32 = 40.0;
pub const BULLSEYE_RADIUS: f32 = 12.0;
pub const CANNON_BASE_RADIUS: f32 = 15.0;
pub const BARREL_WIDTH: f32 = 8.0;
pub const TRAIL_WIDTH: f32 = 2.0;
pub const PROJECTILE_RADIUS: f32 = 6.0;
pub const RIM_WIDTH: f32 = 2.0;
/// Hit highlight margin around the target
pub const HIT_GLOW_MARGIN: f32 = 20.0;
/// Label font size (pixels)
pub const LABEL_SIZE: f32 = 24.0;

/// Centered text to draw on top of the frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: &'static str,
    pub pos: Vec2,
    pub color: [f32; 4],
    pub size: f32,
}

/// One frame's worth of geometry
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
}

impl Frame {
    /// Raw vertex data for upload to a GPU buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Project a snapshot into drawable geometry
pub fn build_frame(snap: &Snapshot, settings: &Settings) -> Frame {
    let segments = settings.quality.circle_segments();
    let mut v: Vec<Vertex> = Vec::with_capacity(1024);

    // Background
    v.extend(shapes::rect(
        Vec2::ZERO,
        Vec2::new(snap.width, snap.height),
        colors::SKY,
    ));
    let ground_top = snap.height - GROUND_HEIGHT;
    v.extend(shapes::rect(
        Vec2::new(0.0, ground_top),
        Vec2::new(snap.width, GROUND_HEIGHT),
        colors::GROUND,
    ));
    if settings.quality.grass_enabled() {
        let mut x = 0.0;
        while x < snap.width {
            v.extend(shapes::line(
                Vec2::new(x, ground_top),
                Vec2::new(x + 20.0, ground_top + 10.0),
                2.0,
                colors::GRASS,
            ));
            x += GRASS_SPACING;
        }
    }

    // Target
    let t = snap.target;
    v.extend(shapes::rect(
        Vec2::new(t.x, t.y),
        Vec2::new(t.width, t.height),
        colors::TARGET,
    ));
    v.extend(shapes::circle(
        t.center(),
        BULLSEYE_RADIUS,
        colors::BULLSEYE,
        segments,
    ));

    // Cannon
    v.extend(shapes::circle(
        snap.cannon,
        CANNON_BASE_RADIUS,
        colors::CANNON,
        segments,
    ));
    v.extend(shapes::line(
        snap.cannon,
        snap.barrel_end,
        BARREL_WIDTH,
        colors::CANNON,
    ));

    if settings.trails {
        v.extend(shapes::polyline(&snap.trail, TRAIL_WIDTH, colors::TRAIL));
    }

    if snap.projectile_active {
        v.extend(shapes::circle(
            snap.projectile_pos,
            PROJECTILE_RADIUS,
            colors::PROJECTILE,
            segments,
        ));
        v.extend(shapes::ring(
            snap.projectile_pos,
            PROJECTILE_RADIUS - RIM_WIDTH / 2.0,
            PROJECTILE_RADIUS + RIM_WIDTH / 2.0,
            colors::PROJECTILE_RIM,
            segments,
        ));
    }

    let mut labels = Vec::new();
    if settings.result_overlay {
        match snap.last_outcome {
            Some(Outcome::Hit) => {
                let glow = t.inflated(HIT_GLOW_MARGIN);
                v.extend(shapes::rect(
                    Vec2::new(glow.x, glow.y),
                    Vec2::new(glow.width, glow.height),
                    colors::HIT_GLOW,
                ));
                labels.push(Label {
                    text: Outcome::Hit.headline(),
                    pos: Vec2::new(t.center().x, t.y - 30.0),
                    color: colors::HIT_TEXT,
                    size: LABEL_SIZE,
                });
            }
            Some(Outcome::Miss) => {
                v.extend(shapes::rect(
                    Vec2::ZERO,
                    Vec2::new(snap.width, snap.height),
                    colors::MISS_TINT,
                ));
                labels.push(Label {
                    text: Outcome::Miss.headline(),
                    pos: Vec2::new(snap.width / 2.0, snap.height / 2.0),
                    color: colors::MISS_TEXT,
                    size: LABEL_SIZE,
                });
            }
            None => {}
        }
    }

    Frame {
        vertices: v,
        labels,
    }
}
