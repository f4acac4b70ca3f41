//! Skyhop headless entry point
//!
//! Runs one autopilot session against a logging renderer and prints a JSON
//! summary. Usage: `skyhop [SEED] [SETTINGS_JSON | QUALITY]`, where QUALITY
//! is one of `low`, `medium` or `high`.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use skyhop::audio::LogSink;
use skyhop::highscores::{HighScoreEntry, format_duration};
use skyhop::input::Key;
use skyhop::render::LogRenderer;
use skyhop::sim::{GamePhase, Viewport};
use skyhop::{FrameDriver, Settings};

/// ~60 Hz display
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Give up after five minutes of simulated play
const MAX_FRAMES: u64 = 60 * 60 * 5;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    quality: &'static str,
    frames: u64,
    score: u64,
    high_score: u64,
    best_combo: u32,
    duration: String,
    peak_difficulty: f32,
    peak_entities: usize,
    leaderboard: Vec<HighScoreEntry>,
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed_arg = args.next().and_then(|s| s.parse::<u64>().ok());
    let settings = args
        .next()
        .map(|arg| Settings::from_arg(&arg))
        .unwrap_or_default();

    let seed = seed_arg.or(settings.seed).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!(
        "Skyhop (headless) starting with seed {}, {} quality",
        seed,
        settings.quality.as_str()
    );

    let mut driver = FrameDriver::new(seed, Viewport::new(400.0, 800.0), &settings, LogSink);
    let mut renderer = LogRenderer::new(600);
    let handle = driver.handle();

    driver.input_mut().autopilot = true;
    driver.input_mut().key_down(Key::Start);

    let mut timestamp = 0.0;
    while driver.frame(timestamp, &mut renderer) {
        timestamp += FRAME_MS;
        if driver.phase() == GamePhase::GameOver || renderer.frames >= MAX_FRAMES {
            handle.cancel();
        }
    }

    let state = driver.state();
    let summary = RunSummary {
        seed,
        quality: settings.quality.as_str(),
        frames: renderer.frames,
        score: state.score(),
        high_score: state.high_score,
        best_combo: state.scoreboard.best_combo,
        duration: format_duration(state.elapsed_ms),
        peak_difficulty: renderer.peak_difficulty,
        peak_entities: renderer.peak_entities,
        leaderboard: driver.leaderboard().entries.clone(),
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Failed to encode run summary: {}", err),
    }
}
