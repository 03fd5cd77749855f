//! Session driver: owns a game, a tick source and an observer
//!
//! The session arms exactly one tick after a successful fire, runs one
//! simulation step per delivered tick, and re-arms only while the projectile
//! is in flight. Dropping the session cancels the outstanding tick.

use glam::Vec2;

use super::ticker::{TickHandle, TickSource};
use crate::sim::{Command, GameEvent, GameState, GameStatus, Outcome, Snapshot, apply, tick};

/// Outbound notifications from a session
pub trait SessionObserver {
    /// A shot landed (or left the field) and was judged
    fn on_stopped(&mut self, _outcome: Outcome, _pos: Vec2) {}
    /// Hit quota reached; called once per session
    fn on_session_complete(&mut self, _hits: u32, _attempts: u32) {}
}

impl SessionObserver for () {}

impl<O: SessionObserver + ?Sized> SessionObserver for &mut O {
    fn on_stopped(&mut self, outcome: Outcome, pos: Vec2) {
        (**self).on_stopped(outcome, pos)
    }

    fn on_session_complete(&mut self, hits: u32, attempts: u32) {
        (**self).on_session_complete(hits, attempts)
    }
}

/// Observer that records everything it is told
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl SessionObserver for EventLog {
    fn on_stopped(&mut self, outcome: Outcome, pos: Vec2) {
        self.events.push(GameEvent::Stopped { outcome, pos });
    }

    fn on_session_complete(&mut self, hits: u32, attempts: u32) {
        self.events.push(GameEvent::SessionComplete { hits, attempts });
    }
}

impl EventLog {
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Stopped { outcome, .. } => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::SessionComplete { .. }))
            .count()
    }
}

pub struct Session<T: TickSource, O: SessionObserver> {
    state: GameState,
    ticks: T,
    observer: O,
    /// Outstanding tick request, if any
    pending: Option<TickHandle>,
}

impl<T: TickSource, O: SessionObserver> Session<T, O> {
    pub fn new(state: GameState, ticks: T, observer: O) -> Self {
        Self {
            state,
            ticks,
            observer,
            pending: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    pub fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// True while a tick is scheduled
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a host command. Returns true if it changed the state.
    pub fn command(&mut self, command: Command) -> bool {
        let applied = apply(&mut self.state, command);
        if applied {
            if self.state.status == GameStatus::Firing {
                self.arm();
            } else {
                self.disarm();
            }
        }
        self.dispatch_events();
        applied
    }

    pub fn set_angle(&mut self, angle: f32) -> bool {
        self.command(Command::SetAngle(angle))
    }

    pub fn set_speed(&mut self, speed: f32) -> bool {
        self.command(Command::SetSpeed(speed))
    }

    pub fn fire(&mut self) -> bool {
        self.command(Command::Fire)
    }

    pub fn retry(&mut self) -> bool {
        self.command(Command::Retry)
    }

    pub fn play_again(&mut self) -> bool {
        self.command(Command::PlayAgain)
    }

    /// Tick callback from the host's scheduler
    ///
    /// Handles that were cancelled or superseded are ignored.
    pub fn on_tick(&mut self, handle: TickHandle) {
        if self.pending != Some(handle) {
            log::debug!("Ignoring stale tick {:?}", handle);
            return;
        }
        self.pending = None;

        let in_flight = tick(&mut self.state);
        self.dispatch_events();
        if in_flight {
            self.arm();
        }
    }

    fn arm(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.ticks.request_tick());
        }
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.ticks.cancel(handle);
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Stopped { outcome, pos } => self.observer.on_stopped(outcome, pos),
                GameEvent::SessionComplete { hits, attempts } => {
                    self.observer.on_session_complete(hits, attempts)
                }
            }
        }
    }
}

impl<T: TickSource, O: SessionObserver> Drop for Session<T, O> {
    fn drop(&mut self) {
        self.disarm();
    }
}
