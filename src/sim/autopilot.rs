//! Idle/demo mode steering
//!
//! Picks the closest platform under the player's feet and steers toward its
//! center, veering away from hazards that are about to drop onto the player.

use super::state::{GameState, PlatformKind};
use crate::consts::{PLATFORM_WIDTH, PLAYER_SIZE};

/// Horizontal slack before the autopilot bothers to steer
const AIM_TOLERANCE: f32 = 6.0;
/// How far above the player hazards are considered threatening
const HAZARD_LOOKAHEAD: f32 = 160.0;

/// Held directions the autopilot would press this tick
pub fn steer(state: &GameState) -> (bool, bool) {
    let player = &state.player;
    let center_x = player.center().x;

    // Dodge first: anything hanging just above us
    let threat = state
        .obstacles
        .iter()
        .map(|o| o.bounds())
        .chain(state.monsters.iter().map(|m| m.bounds()))
        .filter(|b| {
            let above = player.pos.y - b.max().y;
            (0.0..HAZARD_LOOKAHEAD).contains(&above)
                && b.max().x > player.pos.x - PLAYER_SIZE
                && b.min.x < player.pos.x + player.size + PLAYER_SIZE
        })
        .map(|b| (b.min.x + b.max().x) / 2.0)
        .next();

    if let Some(threat_x) = threat {
        return if threat_x > center_x {
            (true, false)
        } else {
            (false, true)
        };
    }

    let feet = player.bottom();
    let target = state
        .platforms
        .iter()
        .filter(|p| p.pos.y >= feet - 4.0)
        .min_by(|a, b| {
            let rank = |kind: PlatformKind| u8::from(kind == PlatformKind::Breakable);
            rank(a.kind)
                .cmp(&rank(b.kind))
                .then(a.pos.y.partial_cmp(&b.pos.y).unwrap_or(std::cmp::Ordering::Equal))
        })
        .map(|p| p.pos.x + PLATFORM_WIDTH / 2.0);

    match target {
        Some(x) if x < center_x - AIM_TOLERANCE => (true, false),
        Some(x) if x > center_x + AIM_TOLERANCE => (false, true),
        _ => (false, false),
    }
}
