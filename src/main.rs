//! Cannon Range entry point
//!
//! Headless host: plays a volley of shots through a `Session`, either as fast
//! as possible or paced by a wall-clock `FrameClock`, and reports outcomes.

use std::time::Instant;

use glam::Vec2;

use cannon_range::demo::DemoPlayer;
use cannon_range::platform::{FrameClock, ManualTicks, Session, SessionObserver, TickSource};
use cannon_range::render::build_frame;
use cannon_range::sim::{GameState, Outcome};
use cannon_range::{Settings, Tuning};

const USAGE: &str = "Usage: cannon-range [--angle DEG] [--speed N] [--shots N] [--demo SEED] \
[--settings PATH] [--realtime] [--json]";

#[derive(Debug)]
struct Options {
    angle: Option<f32>,
    speed: Option<f32>,
    shots: u32,
    demo_seed: Option<u64>,
    settings_path: Option<String>,
    realtime: bool,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            angle: None,
            speed: None,
            shots: 1,
            demo_seed: None,
            settings_path: None,
            realtime: false,
            json: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    fn value<'a>(it: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a String, String> {
        it.next().ok_or_else(|| format!("{flag} needs a value"))
    }
    fn number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, String> {
        raw.parse().map_err(|_| format!("{flag}: not a number: {raw}"))
    }

    let mut opts = Options::default();
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--angle" => opts.angle = Some(number(value(&mut it, arg)?, arg)?),
            "--speed" => opts.speed = Some(number(value(&mut it, arg)?, arg)?),
            "--shots" => opts.shots = number(value(&mut it, arg)?, arg)?,
            "--demo" => opts.demo_seed = Some(number(value(&mut it, arg)?, arg)?),
            "--settings" => opts.settings_path = Some(value(&mut it, arg)?.clone()),
            "--realtime" => opts.realtime = true,
            "--json" => opts.json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

/// Logs outcomes and keeps a tally
#[derive(Default)]
struct Reporter {
    hits: u32,
    misses: u32,
    completions: u32,
}

impl SessionObserver for Reporter {
    fn on_stopped(&mut self, outcome: Outcome, pos: Vec2) {
        match outcome {
            Outcome::Hit => self.hits += 1,
            Outcome::Miss => self.misses += 1,
        }
        log::info!(
            "{} {} (landed at {:.1}, {:.1})",
            outcome.headline(),
            outcome.hint(),
            pos.x,
            pos.y
        );
    }

    fn on_session_complete(&mut self, hits: u32, attempts: u32) {
        self.completions += 1;
        log::info!("You mastered projectile motion! {hits} hits in {attempts} attempts");
    }
}

/// Deliver scheduled ticks until the flight ends
trait Pump: TickSource + Sized {
    fn pump<O: SessionObserver>(session: &mut Session<Self, O>);
}

impl Pump for ManualTicks {
    fn pump<O: SessionObserver>(session: &mut Session<Self, O>) {
        while let Some(handle) = session.ticks_mut().next_due() {
            session.on_tick(handle);
        }
    }
}

impl Pump for FrameClock {
    fn pump<O: SessionObserver>(session: &mut Session<Self, O>) {
        session.ticks_mut().reset(Instant::now());
        while session.is_armed() {
            if let Some(wait) = session.ticks().time_until_due() {
                std::thread::sleep(wait);
            }
            session.ticks_mut().advance(Instant::now());
            while let Some(handle) = session.ticks_mut().take_due() {
                session.on_tick(handle);
            }
        }
    }
}

fn play<T: Pump>(
    session: &mut Session<T, Reporter>,
    opts: &Options,
    settings: &Settings,
) -> Result<(), serde_json::Error> {
    let tuning = session.state().tuning.clone();
    let mut demo = opts.demo_seed.map(DemoPlayer::new);
    if let Some(player) = &demo {
        log::info!("Demo volley with seed {}", player.seed());
    }

    for _ in 0..opts.shots {
        if let Some(player) = demo.as_mut() {
            let shot = player.next_shot(&tuning);
            session.set_angle(shot.angle);
            session.set_speed(shot.speed);
        }

        if !session.fire() {
            log::info!("Hit quota reached, starting a new session");
            session.play_again();
            session.fire();
        }
        T::pump(session);

        let snapshot = session.snapshot();
        let frame = build_frame(&snapshot, settings);
        log::debug!(
            "Result frame: {} triangles, {} labels",
            frame.triangle_count(),
            frame.labels.len()
        );
        if opts.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        }

        session.retry();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("cannon_range=info"))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let settings = match &opts.settings_path {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let mut state = GameState::new(Tuning::default());
    state.angle = state.tuning.clamp_angle(opts.angle.unwrap_or(settings.initial_angle));
    state.speed = state.tuning.clamp_speed(opts.speed.unwrap_or(settings.initial_speed));
    log::info!(
        "Cannon Range starting: angle {:.0}, speed {:.0}, {} shot(s)",
        state.angle,
        state.speed,
        opts.shots
    );

    let tally = if opts.realtime {
        let mut session = Session::new(state, FrameClock::with_rate(settings.frame_rate), Reporter::default());
        play(&mut session, &opts, &settings)?;
        summary(session.observer())
    } else {
        let mut session = Session::new(state, ManualTicks::new(), Reporter::default());
        play(&mut session, &opts, &settings)?;
        summary(session.observer())
    };
    log::info!("{tally}");
    Ok(())
}

fn summary(r: &Reporter) -> String {
    format!(
        "Done: {} hit(s), {} miss(es), {} completed session(s)",
        r.hits, r.misses, r.completions
    )
}
