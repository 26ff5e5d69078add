//! Simply Snakes headless host
//!
//! Two ways to drive the simulation without a window:
//! - `simply-snakes replay <script.json> [settings.json]` runs a scripted key
//!   sequence as fast as possible and prints the final arena as JSON.
//! - `simply-snakes play [settings.json]` runs in real time at the configured
//!   tick rate, reading key names (`w`, `up`, ...) from stdin, one or more per
//!   line. `quit` or end of input stops the session.

use std::io::BufRead;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use simply_snakes::Settings;
use simply_snakes::replay::ReplayScript;
use simply_snakes::sim::{Arena, FixedStep, InputLatches};

const USAGE: &str = "usage: simply-snakes replay <script.json> [settings.json]\n       simply-snakes play [settings.json]";

fn load_settings(path: Option<&String>) -> Settings {
    match path {
        Some(path) => Settings::load(Path::new(path)),
        None => Settings::default(),
    }
}

fn run_replay(script_path: &str, settings: Settings) -> ExitCode {
    let Some(script) = ReplayScript::load(Path::new(script_path)) else {
        eprintln!("could not load replay script {}", script_path);
        return ExitCode::FAILURE;
    };

    let mut arena = Arena::new(settings.arena_config());
    let events = script.run(&mut arena, &settings.keys, settings.tick_dt());
    for event in &events {
        log::info!(
            "tick {}: {:?} lost to {:?}",
            event.tick,
            event.outcome.loser,
            event.outcome.cause
        );
    }

    match arena.snapshot().to_json() {
        Some(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}

fn run_interactive(settings: Settings) -> ExitCode {
    let latches = Arc::new(InputLatches::new());
    let running = Arc::new(AtomicBool::new(true));

    let reader_latches = Arc::clone(&latches);
    let reader_running = Arc::clone(&running);
    let keys = settings.keys.clone();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for key in line.split_whitespace() {
                if key.eq_ignore_ascii_case("quit") {
                    reader_running.store(false, Ordering::Relaxed);
                    return;
                }
                if let Some((side, direction)) = keys.lookup(key) {
                    reader_latches.latch(side).store(direction);
                }
            }
        }
        reader_running.store(false, Ordering::Relaxed);
    });

    let mut arena = Arena::new(settings.arena_config());
    let mut clock = FixedStep::new(settings.tick_dt());
    let mut last = Instant::now();
    log::info!(
        "Arena {}x{}, {} ticks/s",
        arena.bounds().width,
        arena.bounds().height,
        settings.tick_rate
    );

    while running.load(Ordering::Relaxed) {
        let now = Instant::now();
        let frame_time = now.duration_since(last).as_secs_f32();
        last = now;

        for _ in 0..clock.advance(frame_time) {
            latches.apply(&mut arena);
            if arena.update(clock.dt()).is_some() {
                let (a, b) = arena.scores();
                println!("round {}: {} - {}", arena.round(), a, b);
            }
        }
        std::thread::sleep(Duration::from_secs_f32(clock.dt()));
    }

    let (a, b) = arena.scores();
    println!("final: {} - {} after {} rounds", a, b, arena.round());
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Simply Snakes starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("replay") => match args.get(1) {
            Some(script) => run_replay(script, load_settings(args.get(2))),
            None => {
                eprintln!("{}", USAGE);
                ExitCode::FAILURE
            }
        },
        Some("play") => run_interactive(load_settings(args.get(1))),
        _ => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
    }
}
