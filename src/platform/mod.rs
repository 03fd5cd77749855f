//! Platform abstraction layer
//!
//! Keeps the simulation host-agnostic:
//! - `ticker`: frame callback scheduling (manual or wall-clock)
//! - `session`: drives a `GameState` from host commands and ticks

pub mod session;
pub mod ticker;

pub use session::{EventLog, Session, SessionObserver};
pub use ticker::{FrameClock, ManualTicks, TickHandle, TickSource};
