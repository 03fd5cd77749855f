//! Cannon Range - a projectile-motion target range
//!
//! Core modules:
//! - `sim`: Deterministic simulation (launch, physics step, judge, game state)
//! - `platform`: Tick sources and the session driver that owns a game
//! - `render`: Pure projection of a state snapshot into vertices and labels
//! - `settings`: Presentation preferences loaded from JSON
//! - `tuning`: Playfield geometry and physics constants as one value
//! - `demo`: Seeded unattended player

pub mod demo;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, y grows downward)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 400.0;

    /// Cannon position; every shot starts here
    pub const CANNON_X: f32 = 50.0;
    pub const CANNON_Y: f32 = 320.0;

    /// Target rectangle (top-left corner + size)
    pub const TARGET_X: f32 = 650.0;
    pub const TARGET_Y: f32 = 280.0;
    pub const TARGET_WIDTH: f32 = 60.0;
    pub const TARGET_HEIGHT: f32 = 50.0;

    /// Downward acceleration added to vertical velocity every step
    pub const GRAVITY: f32 = 0.5;
    /// Hits needed to finish a session
    pub const MAX_HITS: u32 = 3;

    /// Positions kept in the trail (30 previous + the newest)
    pub const TRAIL_WINDOW: usize = 31;

    /// Launch angle limits (degrees)
    pub const MIN_ANGLE: f32 = 10.0;
    pub const MAX_ANGLE: f32 = 85.0;
    /// Launch speed limits (slider units)
    pub const MIN_SPEED: f32 = 5.0;
    pub const MAX_SPEED: f32 = 25.0;

    /// Slider speed that maps to a multiplier of 1.0
    pub const SPEED_DIVISOR: f32 = 20.0;
    /// Pixels per step at multiplier 1.0
    pub const VELOCITY_SCALE: f32 = 8.0;

    /// Slider defaults
    pub const DEFAULT_ANGLE: f32 = 45.0;
    pub const DEFAULT_SPEED: f32 = 15.0;

    /// Cannon barrel length for drawing (pixels)
    pub const BARREL_LENGTH: f32 = 30.0;

    /// Host frame rate the stepper is tuned for
    pub const FRAME_RATE: u32 = 60;
    /// Maximum catch-up ticks per poll to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Unit direction for a launch angle in degrees, in screen space (up is -y)
#[inline]
pub fn launch_direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Tip of the cannon barrel for the given angle
#[inline]
pub fn barrel_end(origin: Vec2, angle_deg: f32, length: f32) -> Vec2 {
    origin + launch_direction(angle_deg) * length
}
