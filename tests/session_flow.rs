use cannon_range::platform::{EventLog, ManualTicks, Session};
use cannon_range::render::build_frame;
use cannon_range::sim::{GameEvent, GameState, GameStatus, Outcome, Target};
use cannon_range::{Settings, Tuning};

fn run_flight<O: cannon_range::platform::SessionObserver>(
    session: &mut Session<ManualTicks, O>,
) -> u32 {
    let mut ticks = 0;
    while let Some(handle) = session.ticks_mut().next_due() {
        session.on_tick(handle);
        ticks += 1;
        assert!(ticks < 5000, "flight never ended");
    }
    ticks
}

// ── default range ─────────────────────────────────────────────────────────────

#[test]
fn default_range_45_at_20_misses_deterministically() {
    let mut landings = Vec::new();
    for _ in 0..2 {
        let mut session = Session::new(GameState::default(), ManualTicks::new(), EventLog::default());
        session.set_angle(45.0);
        session.set_speed(20.0);
        assert!(session.fire());

        let v = session.state().projectile.vel;
        assert!((v.x - 5.657).abs() < 1e-3);
        assert!((v.y + 5.657).abs() < 1e-3);

        run_flight(&mut session);
        let pos = session.state().projectile.pos;
        assert!(pos.x > 800.0 || pos.y > 400.0);
        assert_eq!(session.state().status, GameStatus::Result);
        assert_eq!(session.observer().outcomes(), vec![Outcome::Miss]);
        landings.push(pos);
    }
    assert_eq!(landings[0], landings[1]);
}

#[test]
fn sliders_ignored_mid_flight_then_editable_after_retry() {
    let mut session = Session::new(GameState::default(), ManualTicks::new(), ());
    session.fire();
    let handle = session.ticks_mut().next_due().unwrap();
    session.on_tick(handle);

    assert!(!session.set_angle(20.0));
    assert!(!session.set_speed(24.0));
    assert_eq!(session.state().angle, 45.0);
    assert_eq!(session.state().speed, 15.0);

    run_flight(&mut session);
    assert!(session.retry());
    assert!(session.set_angle(20.0));
    assert_eq!(session.state().angle, 20.0);
}

#[test]
fn snapshot_trail_is_bounded_for_long_flights() {
    let mut session = Session::new(GameState::default(), ManualTicks::new(), ());
    session.set_angle(85.0);
    session.set_speed(25.0);
    session.fire();
    let mut max_len = 0;
    while let Some(handle) = session.ticks_mut().next_due() {
        session.on_tick(handle);
        max_len = max_len.max(session.snapshot().trail.len());
    }
    assert_eq!(max_len, 31);
}

// ── full session ──────────────────────────────────────────────────────────────

#[test]
fn three_hits_complete_session_and_play_again_restarts() {
    // Target over the floor where a flat, fast shot comes down
    let tuning = Tuning {
        target: Target::new(200.0, 380.0, 200.0, 60.0),
        ..Default::default()
    };
    let mut session = Session::new(GameState::new(tuning), ManualTicks::new(), EventLog::default());
    session.set_angle(10.0);
    session.set_speed(25.0);

    for _ in 0..3 {
        assert!(session.fire());
        run_flight(&mut session);
        let frame = build_frame(&session.snapshot(), &Settings::default());
        assert_eq!(frame.labels[0].text, "HIT!");
        session.retry();
    }

    assert!(session.state().complete);
    assert_eq!(session.snapshot().progress, 1.0);
    assert!(!session.fire());
    assert_eq!(session.state().attempts, 3);

    let completions: Vec<_> = session
        .observer()
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::SessionComplete { .. }))
        .cloned()
        .collect();
    assert_eq!(
        completions,
        vec![GameEvent::SessionComplete {
            hits: 3,
            attempts: 3
        }]
    );

    assert!(session.play_again());
    assert_eq!(session.state().hits, 0);
    assert!(session.fire());
    assert_eq!(session.state().attempts, 1);
}
