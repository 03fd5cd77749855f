//! Fixed-step simulation tick and host commands
//!
//! Commands are applied between ticks. A command issued in the wrong state is
//! ignored, never an error.

use super::projectile::Projectile;
use super::state::{GameEvent, GameState, GameStatus, Outcome};

/// Input commands from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Launch angle in degrees (clamped)
    SetAngle(f32),
    /// Launch speed in slider units (clamped)
    SetSpeed(f32),
    Fire,
    /// Back to Ready with the projectile parked
    Retry,
    /// Reset the session counters, then retry
    PlayAgain,
}

/// Apply one command. Returns true if it changed the state.
pub fn apply(state: &mut GameState, command: Command) -> bool {
    let applied = match command {
        Command::SetAngle(angle) => set_angle(state, angle),
        Command::SetSpeed(speed) => set_speed(state, speed),
        Command::Fire => fire(state),
        Command::Retry => retry(state),
        Command::PlayAgain => play_again(state),
    };
    if !applied {
        log::debug!("Ignored {:?} in {:?}", command, state.status);
    }
    applied
}

fn set_angle(state: &mut GameState, angle: f32) -> bool {
    if state.status != GameStatus::Ready {
        return false;
    }
    state.angle = state.tuning.clamp_angle(angle);
    true
}

fn set_speed(state: &mut GameState, speed: f32) -> bool {
    if state.status != GameStatus::Ready {
        return false;
    }
    state.speed = state.tuning.clamp_speed(speed);
    true
}

fn fire(state: &mut GameState) -> bool {
    if !state.can_fire() {
        return false;
    }
    state.projectile = Projectile::launch(state.angle, state.speed, &state.tuning);
    state.attempts += 1;
    state.last_outcome = None;
    state.status = GameStatus::Firing;
    log::debug!(
        "Fired shot {} at {:.0} deg, speed {:.0}",
        state.attempts,
        state.angle,
        state.speed
    );
    true
}

fn retry(state: &mut GameState) -> bool {
    if state.status == GameStatus::Firing {
        return false;
    }
    state.projectile = Projectile::idle(state.tuning.launch_point);
    state.last_outcome = None;
    state.status = GameStatus::Ready;
    true
}

fn play_again(state: &mut GameState) -> bool {
    if state.status == GameStatus::Firing {
        return false;
    }
    state.hits = 0;
    state.attempts = 0;
    state.complete = false;
    state.time_ticks = 0;
    retry(state)
}

/// Advance the game by one step
///
/// Returns true while the projectile is still in flight, which is the only
/// condition under which a host should schedule another tick.
pub fn tick(state: &mut GameState) -> bool {
    if state.status != GameStatus::Firing {
        return false;
    }

    state.time_ticks += 1;
    state.projectile.step(&state.tuning);

    if state.projectile.active {
        return true;
    }

    let pos = state.projectile.pos;
    let outcome = state.tuning.target.judge(pos);
    state.last_outcome = Some(outcome);
    state.status = GameStatus::Result;
    log::info!(
        "Shot {} {:?} at ({:.1}, {:.1})",
        state.attempts,
        outcome,
        pos.x,
        pos.y
    );
    state.push_event(GameEvent::Stopped { outcome, pos });

    if outcome == Outcome::Hit && state.hits < state.tuning.max_hits {
        state.hits += 1;
        if state.hits >= state.tuning.max_hits && !state.complete {
            state.complete = true;
            log::info!(
                "Session complete: {} hits in {} attempts",
                state.hits,
                state.attempts
            );
            state.push_event(GameEvent::SessionComplete {
                hits: state.hits,
                attempts: state.attempts,
            });
        }
    }

    false
}
