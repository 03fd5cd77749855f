//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod projectile;
pub mod state;
pub mod target;
pub mod tick;

pub use projectile::Projectile;
pub use state::{GameEvent, GameState, GameStatus, Outcome, Snapshot};
pub use target::Target;
pub use tick::{Command, apply, tick};
