//! Skyhop - an endless-jumper platformer
//!
//! Core modules:
//! - `sim`: Simulation core (physics, generation, collisions, scoring)
//! - `driver`: Frame loop that feeds the simulation and its collaborators
//! - `input`: Held-key and pointer state folded into per-tick input
//! - `audio`: Event-driven sound triggers behind a mute flag
//! - `render`: Read-only frame snapshots for renderers
//! - `settings`: Player preferences (JSON)
//! - `highscores`: In-memory session leaderboard

pub mod audio;
pub mod driver;
pub mod highscores;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use driver::{FrameDriver, LoopHandle};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame time the per-tick constants are tuned for (~60 Hz)
    pub const REFERENCE_FRAME_MS: f32 = 16.0;

    /// Player
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const GRAVITY: f32 = 0.4;
    pub const JUMP_VELOCITY: f32 = 13.0;
    pub const BOOST_VELOCITY: f32 = 20.0;
    pub const MOVE_ACCELERATION: f32 = 0.8;
    pub const MAX_VELOCITY: f32 = 10.0;
    pub const FRICTION: f32 = 0.92;
    /// Horizontal decay while falling out of the run (no steering)
    pub const FALLING_DRAG: f32 = 0.98;
    /// Below this |vx| snaps to zero
    pub const VELOCITY_DEAD_ZONE: f32 = 0.1;

    /// Platforms
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;
    pub const INITIAL_PLATFORM_COUNT: usize = 30;
    pub const MIN_PLATFORM_SPACING: f32 = 30.0;
    pub const MAX_PLATFORM_SPACING: f32 = 200.0;
    pub const PLATFORM_JITTER: f32 = 10.0;
    /// A new platform is generated once the frontier drops below this y
    pub const GENERATION_FRONTIER_Y: f32 = 100.0;
    pub const MOVING_PLATFORM_AMPLITUDE: f32 = 2.0;
    pub const MOVING_PLATFORM_PERIOD_MS: f32 = 500.0;

    /// Obstacles, monsters, power-ups
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const MONSTER_SIZE: f32 = 30.0;
    pub const POWER_UP_SIZE: f32 = 30.0;
    pub const OBSTACLE_CHANCE: f32 = 0.3;
    /// Vertical gap between a new platform and the obstacle above it
    pub const OBSTACLE_GAP: f32 = 10.0;
    pub const MONSTER_CHANCE: f32 = 0.01;
    pub const POWER_UP_CHANCE: f32 = 0.01;
    pub const SAW_AMPLITUDE: f32 = 3.0;
    pub const SAW_PERIOD_MS: f32 = 300.0;

    /// Timed effects
    pub const JETPACK_DURATION_MS: f32 = 5000.0;
    pub const SHIELD_DURATION_MS: f32 = 10000.0;

    /// Scoring
    pub const COMBO_TIMEOUT_MS: f32 = 1000.0;
    pub const COMBO_POINTS: u64 = 10;

    /// Difficulty zones (measured in cumulative height)
    pub const EASY_ZONE: f32 = 5000.0;
    pub const MEDIUM_ZONE: f32 = 15000.0;
    pub const DIFFICULTY_INCREASE_RATE: f32 = 0.0001;

    /// The run ends once the player sinks below this many viewport heights
    pub const GAME_OVER_DEPTH: f32 = 1.5;

    /// Particles
    pub const MAX_PARTICLES: usize = 256;
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const PARTICLE_SPREAD: f32 = 5.0;
    pub const BREAK_BURST: usize = 10;
    pub const BOOST_BURST: usize = 15;
    pub const SHIELD_BURST: usize = 20;
    pub const BREAK_COLOR: u32 = 0xEF4444;
    pub const BOOST_COLOR: u32 = 0x8B5CF6;
    pub const SHIELD_COLOR: u32 = 0x60A5FA;
}

/// Scale factor from a frame delta (ms) to reference-frame units
#[inline]
pub fn frame_scale(dt_ms: f32) -> f32 {
    dt_ms / consts::REFERENCE_FRAME_MS
}
