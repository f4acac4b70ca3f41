//! Collision detection and response
//!
//! Discrete axis-aligned box tests against post-integration positions. A fast
//! enough fall can skip a platform in one frame; that is accepted.

use glam::Vec2;

use super::particles;
use super::state::{GameEvent, GamePhase, GameState, PlatformKind, Player, Platform};
use crate::consts::*;

/// Axis-aligned bounding box (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap; boxes that merely touch do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// A landing needs the feet inside the platform's thickness band while
/// descending, so rising through a platform never counts.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    let feet = player.bottom();
    feet >= platform.pos.y
        && feet <= platform.pos.y + PLATFORM_HEIGHT
        && player.pos.x + player.size > platform.pos.x
        && player.pos.x < platform.pos.x + PLATFORM_WIDTH
        && player.vel.y < 0.0
}

/// Resolve the player against every entity class
pub fn resolve_collisions(state: &mut GameState) {
    if !state.viewport.is_measured() {
        return;
    }
    resolve_platforms(state);
    resolve_hazards(state);
    resolve_power_ups(state);
}

fn resolve_platforms(state: &mut GameState) {
    let mut broken = Vec::new();

    for i in 0..state.platforms.len() {
        let platform = state.platforms[i];
        if !lands_on(&state.player, &platform) {
            continue;
        }

        match platform.kind {
            PlatformKind::Breakable => {
                broken.push(platform.id);
                particles::burst(state, platform.top_center(), BREAK_BURST, BREAK_COLOR);
                state.events.push(GameEvent::PlatformBroken { id: platform.id });
            }
            PlatformKind::Boost => {
                state.player.vel.y = BOOST_VELOCITY;
                particles::burst(state, platform.top_center(), BOOST_BURST, BOOST_COLOR);
            }
            PlatformKind::Normal | PlatformKind::Moving => {
                state.player.vel.y = JUMP_VELOCITY;
            }
        }

        let combo = state.scoreboard.register_landing(state.elapsed_ms);
        state.events.push(GameEvent::Landed {
            kind: platform.kind,
            combo,
        });
    }

    if !broken.is_empty() {
        state.platforms.retain(|p| !broken.contains(&p.id));
    }
}

/// Obstacles and monsters: a shield soaks one hit, otherwise the run is lost
fn resolve_hazards(state: &mut GameState) {
    let player_box = state.player.bounds();

    let obstacle_hit = state
        .obstacles
        .iter()
        .any(|o| o.bounds().overlaps(&player_box));
    if obstacle_hit {
        take_hit(state);
    }

    let mut defeated = Vec::new();
    for i in 0..state.monsters.len() {
        if state.phase != GamePhase::Playing {
            break;
        }
        let monster = state.monsters[i];
        if !monster.bounds().overlaps(&player_box) {
            continue;
        }
        if take_hit(state) {
            defeated.push(monster.id);
        }
    }

    if !defeated.is_empty() {
        state.monsters.retain(|m| !defeated.contains(&m.id));
    }
}

/// Returns true if the shield absorbed the hit
fn take_hit(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }

    if state.effects.consume_shield() {
        log::debug!("Shield absorbed a hit at {:.0}ms", state.elapsed_ms);
        let center = state.player.center();
        particles::burst(state, center, SHIELD_BURST, SHIELD_COLOR);
        state.events.push(GameEvent::ShieldAbsorbed);
        true
    } else {
        log::info!("Player hit at score {}", state.score());
        state.phase = GamePhase::Falling;
        state.events.push(GameEvent::Hit);
        false
    }
}

fn resolve_power_ups(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let player_box = state.player.bounds();
    let now = state.elapsed_ms;

    let mut collected = Vec::new();
    for power_up in &state.power_ups {
        if power_up.bounds().overlaps(&player_box) {
            collected.push((power_up.id, power_up.kind));
        }
    }

    for &(_, kind) in &collected {
        log::debug!("Collected {:?} at {:.0}ms", kind, now);
        state.effects.activate(kind, now);
        state.events.push(GameEvent::PowerUpCollected { kind });
    }
    if !collected.is_empty() {
        state
            .power_ups
            .retain(|p| !collected.iter().any(|&(id, _)| id == p.id));
    }
}
