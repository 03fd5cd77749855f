//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.529, 0.808, 0.922, 1.0];
    pub const GROUND: [f32; 4] = [0.545, 0.451, 0.333, 1.0];
    pub const GRASS: [f32; 4] = [0.133, 0.545, 0.133, 1.0];
    pub const TARGET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BULLSEYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CANNON: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const TRAIL: [f32; 4] = [1.0, 0.647, 0.0, 0.6];
    pub const PROJECTILE: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
    pub const PROJECTILE_RIM: [f32; 4] = [1.0, 0.647, 0.0, 1.0];
    pub const HIT_GLOW: [f32; 4] = [0.0, 1.0, 0.0, 0.3];
    pub const HIT_TEXT: [f32; 4] = [0.0, 0.667, 0.0, 1.0];
    pub const MISS_TINT: [f32; 4] = [1.0, 0.0, 0.0, 0.2];
    pub const MISS_TEXT: [f32; 4] = [0.667, 0.0, 0.0, 1.0];
}
