//! Game state and core simulation types
//!
//! The simulation owns every entity collection; renderers only borrow it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::effects::ActiveEffects;
use super::generate;
use super::score::Scoreboard;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing simulated
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Simulation frozen until resumed
    Paused,
    /// Hit without a shield; the player drops out of the world
    Falling,
    /// Run ended
    GameOver,
}

/// Measured play area in world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False until the host has reported real, positive dimensions
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Vertical anchor the camera keeps the player pinned to
    #[inline]
    pub fn midpoint(&self) -> f32 {
        self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player character (top-left anchored square)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// `vel.y` is positive while rising (the opposite of screen y)
    pub vel: Vec2,
    pub facing: Facing,
    pub size: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            facing: Facing::Right,
            size: PLAYER_SIZE,
        }
    }
}

impl Player {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }
}

/// Platform variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Sways horizontally with simulation time
    Moving,
    /// Crumbles on the first landing, no bounce
    Breakable,
    /// Launches the player at boost velocity
    Boost,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT))
    }

    /// Top-center point, where landing particles spawn
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + PLATFORM_WIDTH / 2.0, self.pos.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Spike,
    /// Oscillates horizontally with simulation time
    Saw,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(OBSTACLE_SIZE))
    }
}

/// Monster colors. Purely cosmetic: every variant behaves the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterKind {
    Green,
    Blue,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: u32,
    pub pos: Vec2,
    pub kind: MonsterKind,
}

impl Monster {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(MONSTER_SIZE))
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Jetpack,
    Shield,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(POWER_UP_SIZE))
    }
}

/// A particle for visual feedback (simulated, not gameplay-affecting)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0xRRGGBB
    pub color: u32,
    /// Time since the burst, for fade-out
    pub age_ms: f32,
}

/// Things that happened during a tick, consumed by audio and renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    /// Landed on a platform (any variant)
    Landed { kind: PlatformKind, combo: u32 },
    PlatformBroken { id: u32 },
    PowerUpCollected { kind: PowerUpKind },
    ShieldAbsorbed,
    /// Hit an obstacle or monster without a shield
    Hit,
    GameOver {
        score: u64,
        best_combo: u32,
        duration_ms: f32,
        new_high_score: bool,
    },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub player: Player,
    /// Entity collections, in spawn order
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub monsters: Vec<Monster>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub effects: ActiveEffects,
    pub scoreboard: Scoreboard,
    /// Best score this session (never persisted)
    pub high_score: u64,
    /// Simulation time of the current run
    pub elapsed_ms: f32,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    /// Live particle cap (0 disables bursts)
    pub max_particles: usize,
    /// Set when a run starts before the viewport is measured
    layout_pending: bool,
    next_id: u32,
}

impl GameState {
    /// Create a session sitting at the menu
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            viewport,
            player: Player::default(),
            platforms: Vec::new(),
            obstacles: Vec::new(),
            monsters: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::with_capacity(MAX_PARTICLES),
            effects: ActiveEffects::default(),
            scoreboard: Scoreboard::default(),
            high_score: 0,
            elapsed_ms: 0.0,
            events: Vec::new(),
            max_particles: MAX_PARTICLES,
            layout_pending: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        // Particles burn through ids; long sessions wrap rather than overflow
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.scoreboard.score
    }

    /// Cumulative climb height; drives difficulty
    #[inline]
    pub fn height(&self) -> f32 {
        self.scoreboard.score as f32
    }

    /// Begin a fresh run. The high score and RNG stream carry over.
    pub fn start(&mut self) {
        self.platforms.clear();
        self.obstacles.clear();
        self.monsters.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.effects.clear();
        self.scoreboard = Scoreboard::default();
        self.elapsed_ms = 0.0;
        self.player = Player::default();
        self.phase = GamePhase::Playing;
        self.layout_pending = true;
        self.ensure_layout();

        log::info!(
            "Run started (seed {}, viewport {}x{})",
            self.seed,
            self.viewport.width,
            self.viewport.height
        );
        self.events.push(GameEvent::RunStarted);
    }

    /// Lay out the starting ladder once the viewport is known
    pub fn ensure_layout(&mut self) {
        if !self.layout_pending || !self.viewport.is_measured() {
            return;
        }
        self.layout_pending = false;

        self.platforms = generate::initial_platforms(self);
        if let Some(first) = self.platforms.first() {
            let x = first.pos.x + PLATFORM_WIDTH / 2.0 - PLAYER_SIZE / 2.0;
            let y = first.pos.y - PLAYER_SIZE;
            self.player = Player::at(Vec2::new(x, y));
        }
    }

    /// Apply a new viewport measurement (takes effect next tick)
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
        }
        self.viewport = viewport;
    }

    /// End the run and fold its score into the session high score
    pub fn finish_run(&mut self) {
        let score = self.scoreboard.score;
        let new_high_score = score > self.high_score;
        self.high_score = self.high_score.max(score);
        self.phase = GamePhase::GameOver;

        if new_high_score {
            log::info!("Game over: {} points (new high score)", score);
        } else {
            log::info!("Game over: {} points (best {})", score, self.high_score);
        }
        self.events.push(GameEvent::GameOver {
            score,
            best_combo: self.scoreboard.best_combo,
            duration_ms: self.elapsed_ms,
            new_high_score,
        });
    }

    /// True once the first measured layout has been produced
    pub fn is_laid_out(&self) -> bool {
        !self.layout_pending
    }
}
