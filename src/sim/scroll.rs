//! Camera scrolling
//!
//! The player never climbs above the viewport midpoint. Instead the world is
//! shifted down by the overshoot, and that distance is what the run scores.

use super::state::GameState;

/// Re-base world coordinates when the player is above the midpoint.
/// Returns the distance scrolled (0 when nothing moved).
pub fn rebase(state: &mut GameState) -> f32 {
    let mid = state.viewport.midpoint();
    if state.player.pos.y >= mid {
        return 0.0;
    }

    let diff = mid - state.player.pos.y;
    state.player.pos.y = mid;

    for platform in &mut state.platforms {
        platform.pos.y += diff;
    }
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += diff;
    }
    for monster in &mut state.monsters {
        monster.pos.y += diff;
    }
    for power_up in &mut state.power_ups {
        power_up.pos.y += diff;
    }

    state.scoreboard.add_climb(diff);
    diff
}

/// Drop entities that scrolled below the visible area
pub fn prune(state: &mut GameState) {
    let bottom = state.viewport.height;
    state.platforms.retain(|p| p.pos.y < bottom);
    state.obstacles.retain(|o| o.pos.y < bottom);
    state.monsters.retain(|m| m.pos.y < bottom);
    state.power_ups.retain(|p| p.pos.y < bottom);
}
