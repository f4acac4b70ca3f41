//! Simulation core
//!
//! All gameplay logic lives here. Given a seed and a sequence of
//! (frame delta, input) pairs the outcome is fully reproducible:
//! - Seeded RNG only
//! - Timed effects are deadlines, not callbacks
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod effects;
pub mod generate;
pub mod particles;
pub mod physics;
pub mod score;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{Aabb, lands_on, resolve_collisions};
pub use difficulty::difficulty;
pub use effects::ActiveEffects;
pub use generate::{
    generate_monster, generate_obstacle, generate_platform, generate_power_up,
    platform_kind_for_roll,
};
pub use score::Scoreboard;
pub use state::{
    Facing, GameEvent, GamePhase, GameState, Monster, MonsterKind, Obstacle, ObstacleKind,
    Particle, Platform, PlatformKind, Player, PowerUp, PowerUpKind, Viewport,
};
pub use tick::{TickInput, tick};
