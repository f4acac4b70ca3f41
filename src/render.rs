//! Renderer-facing snapshots
//!
//! Drawing lives outside this crate. Each frame a renderer gets a borrowed,
//! read-only view of everything it needs to draw.

use serde::Serialize;

use crate::sim::{
    GamePhase, GameState, Monster, Obstacle, Particle, Platform, Player, PowerUp, PowerUpKind,
    Viewport, difficulty,
};

/// Everything visible this frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView<'a> {
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub player: &'a Player,
    pub platforms: &'a [Platform],
    pub obstacles: &'a [Obstacle],
    pub monsters: &'a [Monster],
    pub power_ups: &'a [PowerUp],
    pub particles: &'a [Particle],
    pub jetpack_active: bool,
    pub shield_active: bool,
    /// Countdown for the HUD (0 when inactive)
    pub jetpack_remaining_ms: f32,
    pub shield_remaining_ms: f32,
    pub score: u64,
    pub high_score: u64,
    pub combo: u32,
    pub difficulty: f32,
}

impl<'a> FrameView<'a> {
    pub fn of(state: &'a GameState) -> Self {
        let now = state.elapsed_ms;
        Self {
            phase: state.phase,
            viewport: state.viewport,
            player: &state.player,
            platforms: &state.platforms,
            obstacles: &state.obstacles,
            monsters: &state.monsters,
            power_ups: &state.power_ups,
            particles: &state.particles,
            jetpack_active: state.effects.jetpack_active(),
            shield_active: state.effects.shield_active(),
            jetpack_remaining_ms: state.effects.remaining_ms(PowerUpKind::Jetpack, now),
            shield_remaining_ms: state.effects.remaining_ms(PowerUpKind::Shield, now),
            score: state.score(),
            high_score: state.high_score,
            combo: state.scoreboard.combo,
            difficulty: difficulty(state.height()),
        }
    }
}

/// Anything that can draw a frame
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Headless renderer that tracks a few stats and logs now and then
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub peak_entities: usize,
    pub peak_difficulty: f32,
    /// Log a summary line every N frames (0 disables)
    pub log_every: u64,
}

impl LogRenderer {
    pub fn new(log_every: u64) -> Self {
        Self {
            log_every,
            ..Default::default()
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        self.frames += 1;
        let entities = view.platforms.len()
            + view.obstacles.len()
            + view.monsters.len()
            + view.power_ups.len()
            + view.particles.len();
        self.peak_entities = self.peak_entities.max(entities);
        self.peak_difficulty = self.peak_difficulty.max(view.difficulty);

        if self.log_every > 0 && self.frames.is_multiple_of(self.log_every) {
            log::info!(
                "frame {} {:?}: score {} combo {} difficulty {:.2} entities {}{}{}",
                self.frames,
                view.phase,
                view.score,
                view.combo,
                view.difficulty,
                entities,
                if view.jetpack_active { " [jetpack]" } else { "" },
                if view.shield_active { " [shield]" } else { "" },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Viewport;

    #[test]
    fn test_view_reflects_state() {
        let mut state = GameState::new(3, Viewport::new(400.0, 800.0));
        state.start();
        state.effects.activate(PowerUpKind::Shield, 0.0);

        let view = FrameView::of(&state);
        assert_eq!(view.phase, GamePhase::Playing);
        assert_eq!(view.platforms.len(), state.platforms.len());
        assert!(view.shield_active);
        assert!(!view.jetpack_active);
        assert_eq!(view.shield_remaining_ms, 10_000.0);
        assert_eq!(view.difficulty, 0.0);
    }

    #[test]
    fn test_view_serializes() {
        let mut state = GameState::new(3, Viewport::new(400.0, 800.0));
        state.start();
        let json = serde_json::to_string(&FrameView::of(&state)).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut state = GameState::new(3, Viewport::new(400.0, 800.0));
        state.start();
        let mut renderer = LogRenderer::new(0);
        renderer.render(&FrameView::of(&state));
        renderer.render(&FrameView::of(&state));
        assert_eq!(renderer.frames, 2);
        assert!(renderer.peak_entities >= state.platforms.len());
    }
}
