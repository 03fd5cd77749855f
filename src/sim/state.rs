//! Game state and core simulation types
//!
//! One `GameState` per session: the projectile, the slider values and the
//! session counters. Rendering reads it through `Snapshot`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::Projectile;
use crate::consts::{BARREL_LENGTH, DEFAULT_ANGLE, DEFAULT_SPEED};
use crate::tuning::Tuning;

/// Current phase of a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Idle, sliders editable, fire allowed
    #[default]
    Ready,
    /// Projectile in flight
    Firing,
    /// Outcome shown, inputs locked until retry
    Result,
}

/// Judge verdict for one shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }

    /// Banner text
    pub fn headline(&self) -> &'static str {
        match self {
            Outcome::Hit => "HIT!",
            Outcome::Miss => "MISSED",
        }
    }

    /// Feedback line under the banner
    pub fn hint(&self) -> &'static str {
        match self {
            Outcome::Hit => "Perfect! You balanced angle and speed!",
            Outcome::Miss => "Try adjusting angle or speed",
        }
    }
}

/// Events raised by the simulation for the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Projectile left the playfield and was judged
    Stopped { outcome: Outcome, pos: Vec2 },
    /// Hit quota reached; raised once per session
    SessionComplete { hits: u32, attempts: u32 },
}

/// Complete state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub status: GameStatus,
    /// Launch angle in degrees
    pub angle: f32,
    /// Launch speed in slider units
    pub speed: f32,
    pub projectile: Projectile,
    pub last_outcome: Option<Outcome>,
    pub hits: u32,
    pub attempts: u32,
    /// Set when `hits` reaches `max_hits`; cleared by play-again
    pub complete: bool,
    /// Simulation tick counter for the current session
    pub time_ticks: u64,
    /// Events not yet handed to the host
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        let angle = tuning.clamp_angle(DEFAULT_ANGLE);
        let speed = tuning.clamp_speed(DEFAULT_SPEED);
        let projectile = Projectile::idle(tuning.launch_point);
        Self {
            tuning,
            status: GameStatus::Ready,
            angle,
            speed,
            projectile,
            last_outcome: None,
            hits: 0,
            attempts: 0,
            complete: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Fire is allowed only when idle and the hit quota is open
    pub fn can_fire(&self) -> bool {
        self.status == GameStatus::Ready && self.hits < self.tuning.max_hits
    }

    /// Queue an event for the host
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fraction of the hit quota reached (0..=1)
    pub fn progress(&self) -> f32 {
        if self.tuning.max_hits == 0 {
            return 1.0;
        }
        (self.hits as f32 / self.tuning.max_hits as f32).min(1.0)
    }

    /// Read-only view for renderers and hosts
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            angle: self.angle,
            speed: self.speed,
            projectile_pos: self.projectile.pos,
            projectile_active: self.projectile.active,
            trail: self.projectile.trail_points(),
            last_outcome: self.last_outcome,
            hits: self.hits,
            attempts: self.attempts,
            max_hits: self.tuning.max_hits,
            complete: self.complete,
            progress: self.progress(),
            cannon: self.tuning.launch_point,
            barrel_end: crate::barrel_end(self.tuning.launch_point, self.angle, BARREL_LENGTH),
            target: self.tuning.target,
            width: self.tuning.width,
            height: self.tuning.height,
        }
    }
}

/// Everything a presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub angle: f32,
    pub speed: f32,
    pub projectile_pos: Vec2,
    pub projectile_active: bool,
    /// Oldest first
    pub trail: Vec<Vec2>,
    pub last_outcome: Option<Outcome>,
    pub hits: u32,
    pub attempts: u32,
    pub max_hits: u32,
    pub complete: bool,
    pub progress: f32,
    pub cannon: Vec2,
    pub barrel_end: Vec2,
    pub target: super::Target,
    pub width: f32,
    pub height: f32,
}
