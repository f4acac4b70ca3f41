//! Per-frame simulation tick
//!
//! Core game loop. Advances the run by one display frame of variable length.

use super::state::{GamePhase, GameState};
use super::{autopilot, collision, generate, particles, physics, scroll};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Held directions
    pub left: bool,
    pub right: bool,
    /// Absolute pointer/touch x in viewport space (direct placement)
    pub pointer_x: Option<f32>,
    /// Pause toggle
    pub pause: bool,
    /// Start a run from the menu or game-over screen
    pub start: bool,
    /// Idle/demo mode - the autopilot steers
    pub autopilot: bool,
}

/// Advance the game state by one frame of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    state.events.clear();

    if input.start && matches!(state.phase, GamePhase::Menu | GamePhase::GameOver) {
        state.start();
        return;
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::debug!("Paused at {:.0}ms", state.elapsed_ms);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::debug!("Resumed");
            }
            _ => {}
        }
    }

    // Nothing advances outside an active run
    if !matches!(state.phase, GamePhase::Playing | GamePhase::Falling) {
        return;
    }

    // No geometry to simulate against until the host measures the viewport
    if !state.viewport.is_measured() {
        return;
    }
    state.ensure_layout();

    let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
    state.elapsed_ms += dt_ms;
    state.effects.expire(state.elapsed_ms);

    match state.phase {
        GamePhase::Playing => {
            let mut input = *input;
            if input.autopilot {
                (input.left, input.right) = autopilot::steer(state);
            }
            play_step(state, &input, dt_ms);
        }
        GamePhase::Falling => fall_step(state, dt_ms),
        _ => {}
    }

    // Sinking far enough below the screen ends the run
    if matches!(state.phase, GamePhase::Playing | GamePhase::Falling)
        && state.player.pos.y > state.viewport.height * GAME_OVER_DEPTH
    {
        state.finish_run();
    }
}

fn play_step(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    let width = state.viewport.width;

    physics::steer(&mut state.player, input);
    physics::advance(&mut state.player, dt_ms, width);
    if let Some(pointer_x) = input.pointer_x {
        physics::follow_pointer(&mut state.player, pointer_x, width);
    }

    collision::resolve_collisions(state);

    // Jetpack overrides gravity for as long as it burns
    if state.phase == GamePhase::Playing && state.effects.jetpack_active() {
        state.player.vel.y = BOOST_VELOCITY;
    }

    state.scoreboard.decay_combo(state.elapsed_ms);

    physics::sway(&mut state.platforms, &mut state.obstacles, state.elapsed_ms, dt_ms);
    scroll::prune(state);
    generate::spawn_content(state);
    scroll::rebase(state);

    particles::update(&mut state.particles, dt_ms, state.viewport.height);
}

/// Out of control after a hit: no input, no collisions, just gravity
fn fall_step(state: &mut GameState, dt_ms: f32) {
    physics::drift(&mut state.player);
    physics::advance(&mut state.player, dt_ms, state.viewport.width);
    particles::update(&mut state.particles, dt_ms, state.viewport.height);
}
