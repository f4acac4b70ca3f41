//! Procedural content generation
//!
//! Platforms are stacked upward from the frontier with spacing and variant
//! odds driven by difficulty. Obstacles ride along with new platforms;
//! monsters and power-ups drop in one screen above the player.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::difficulty::difficulty;
use super::state::{
    GameState, Monster, MonsterKind, Obstacle, ObstacleKind, Platform, PlatformKind, PowerUp,
    PowerUpKind,
};
use crate::consts::*;

/// Vertical gap to the next platform at a given difficulty
pub fn platform_spacing(difficulty: f32) -> f32 {
    MIN_PLATFORM_SPACING + (MAX_PLATFORM_SPACING - MIN_PLATFORM_SPACING) * difficulty
}

/// Pick a platform variant from a single uniform draw in [0, 1)
///
/// The bands are cumulative, so the four variants always partition the unit
/// interval. Anything past the last band (including out-of-range draws)
/// falls through to `Boost`.
pub fn platform_kind_for_roll(roll: f32, difficulty: f32) -> PlatformKind {
    if roll < 0.6 - 0.2 * difficulty {
        PlatformKind::Normal
    } else if roll < 0.8 - 0.2 * difficulty {
        PlatformKind::Moving
    } else if roll < 0.9 - 0.1 * difficulty {
        PlatformKind::Breakable
    } else {
        PlatformKind::Boost
    }
}

/// Uniform x such that an entity of `size` stays inside the viewport
fn random_x(rng: &mut Pcg32, viewport_width: f32, size: f32) -> f32 {
    rng.random::<f32>() * (viewport_width - size).max(0.0)
}

/// Create the next platform above `prev_top_y`
pub fn generate_platform(state: &mut GameState, prev_top_y: f32) -> Platform {
    let difficulty = difficulty(state.height());
    let spacing = platform_spacing(difficulty);
    let jitter = state.rng.random::<f32>() * PLATFORM_JITTER;
    let x = random_x(&mut state.rng, state.viewport.width, PLATFORM_WIDTH);
    let kind = platform_kind_for_roll(state.rng.random::<f32>(), difficulty);

    Platform {
        id: state.next_entity_id(),
        pos: Vec2::new(x, prev_top_y - spacing - jitter),
        kind,
    }
}

pub fn generate_obstacle(state: &mut GameState, y: f32) -> Obstacle {
    let x = random_x(&mut state.rng, state.viewport.width, OBSTACLE_SIZE);
    let kind = if state.rng.random::<f32>() < 0.5 {
        ObstacleKind::Spike
    } else {
        ObstacleKind::Saw
    };
    Obstacle {
        id: state.next_entity_id(),
        pos: Vec2::new(x, y),
        kind,
    }
}

pub fn generate_power_up(state: &mut GameState, y: f32) -> PowerUp {
    let x = random_x(&mut state.rng, state.viewport.width, POWER_UP_SIZE);
    let kind = if state.rng.random::<f32>() < 0.5 {
        PowerUpKind::Jetpack
    } else {
        PowerUpKind::Shield
    };
    PowerUp {
        id: state.next_entity_id(),
        pos: Vec2::new(x, y),
        kind,
    }
}

pub fn generate_monster(state: &mut GameState, y: f32) -> Monster {
    let x = random_x(&mut state.rng, state.viewport.width, MONSTER_SIZE);
    let kind = match state.rng.random_range(0..3u32) {
        0 => MonsterKind::Green,
        1 => MonsterKind::Blue,
        _ => MonsterKind::Red,
    };
    Monster {
        id: state.next_entity_id(),
        pos: Vec2::new(x, y),
        kind,
    }
}

/// Starting ladder: evenly spaced normal platforms climbing from the bottom
pub fn initial_platforms(state: &mut GameState) -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(INITIAL_PLATFORM_COUNT);
    let mut y = state.viewport.height - MIN_PLATFORM_SPACING;

    for _ in 0..INITIAL_PLATFORM_COUNT {
        let x = random_x(&mut state.rng, state.viewport.width, PLATFORM_WIDTH);
        platforms.push(Platform {
            id: state.next_entity_id(),
            pos: Vec2::new(x, y),
            kind: PlatformKind::Normal,
        });
        y -= MIN_PLATFORM_SPACING;
    }
    platforms
}

/// Topmost platform y, or `None` when the list is empty
pub fn frontier_y(platforms: &[Platform]) -> Option<f32> {
    platforms.iter().map(|p| p.pos.y).reduce(f32::min)
}

/// Per-tick generation triggers
pub fn spawn_content(state: &mut GameState) {
    if !state.viewport.is_measured() {
        return;
    }

    let next_from = match frontier_y(&state.platforms) {
        None => Some(state.viewport.height),
        Some(y) if y > GENERATION_FRONTIER_Y => Some(y),
        Some(_) => None,
    };

    if let Some(prev_top_y) = next_from {
        let platform = generate_platform(state, prev_top_y);
        let obstacle_y = platform.pos.y - OBSTACLE_SIZE - OBSTACLE_GAP;
        state.platforms.push(platform);

        if state.rng.random::<f32>() < OBSTACLE_CHANCE {
            let obstacle = generate_obstacle(state, obstacle_y);
            state.obstacles.push(obstacle);
        }
    }

    let drop_y = state.player.pos.y - state.viewport.height;

    if state.rng.random::<f32>() < MONSTER_CHANCE {
        let monster = generate_monster(state, drop_y);
        state.monsters.push(monster);
    }

    if state.rng.random::<f32>() < POWER_UP_CHANCE {
        let power_up = generate_power_up(state, drop_y);
        log::debug!("Spawned {:?} power-up at y={:.0}", power_up.kind, drop_y);
        state.power_ups.push(power_up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use proptest::prelude::*;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Viewport::new(400.0, 800.0));
        state.start();
        state
    }

    #[test]
    fn test_variant_bands_at_zero_difficulty() {
        assert_eq!(platform_kind_for_roll(0.0, 0.0), PlatformKind::Normal);
        assert_eq!(platform_kind_for_roll(0.59, 0.0), PlatformKind::Normal);
        assert_eq!(platform_kind_for_roll(0.6, 0.0), PlatformKind::Moving);
        assert_eq!(platform_kind_for_roll(0.79, 0.0), PlatformKind::Moving);
        assert_eq!(platform_kind_for_roll(0.8, 0.0), PlatformKind::Breakable);
        assert_eq!(platform_kind_for_roll(0.9, 0.0), PlatformKind::Boost);
    }

    #[test]
    fn test_variant_bands_shift_with_difficulty() {
        // At difficulty 1 normal shrinks to 0.4
        assert_eq!(platform_kind_for_roll(0.45, 1.0), PlatformKind::Moving);
        assert_eq!(platform_kind_for_roll(0.39, 1.0), PlatformKind::Normal);
        assert_eq!(platform_kind_for_roll(0.7, 1.0), PlatformKind::Breakable);
        assert_eq!(platform_kind_for_roll(0.85, 1.0), PlatformKind::Boost);
    }

    #[test]
    fn test_out_of_range_roll_has_defined_variant() {
        assert_eq!(platform_kind_for_roll(1.5, 0.0), PlatformKind::Boost);
        assert_eq!(platform_kind_for_roll(f32::NAN, 0.0), PlatformKind::Boost);
    }

    #[test]
    fn test_variant_ratios_converge() {
        let mut rng = <Pcg32 as rand::SeedableRng>::seed_from_u64(42);
        let samples = 100_000;
        let mut counts = [0usize; 4];
        for _ in 0..samples {
            let kind = platform_kind_for_roll(rng.random::<f32>(), 0.0);
            let idx = match kind {
                PlatformKind::Normal => 0,
                PlatformKind::Moving => 1,
                PlatformKind::Breakable => 2,
                PlatformKind::Boost => 3,
            };
            counts[idx] += 1;
        }
        let expected = [0.6, 0.2, 0.1, 0.1];
        for (count, p) in counts.iter().zip(expected) {
            let ratio = *count as f32 / samples as f32;
            assert!((ratio - p).abs() < 0.01, "ratio {} vs {}", ratio, p);
        }
    }

    #[test]
    fn test_spacing_endpoints() {
        assert_eq!(platform_spacing(0.0), MIN_PLATFORM_SPACING);
        assert_eq!(platform_spacing(1.0), MAX_PLATFORM_SPACING);
    }

    #[test]
    fn test_generate_platform_position() {
        let mut state = playing_state(3);
        for _ in 0..200 {
            let p = generate_platform(&mut state, 90.0);
            assert!(p.pos.y <= 90.0 - MIN_PLATFORM_SPACING);
            assert!(p.pos.y >= 90.0 - MIN_PLATFORM_SPACING - PLATFORM_JITTER);
            assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0 - PLATFORM_WIDTH);
        }
    }

    #[test]
    fn test_spacing_widens_with_height() {
        let mut state = playing_state(3);
        state.scoreboard.score = 15000;
        let p = generate_platform(&mut state, 0.0);
        assert!(p.pos.y <= -MAX_PLATFORM_SPACING);
    }

    #[test]
    fn test_spacing_ignores_anchor_position() {
        // Far-off anchor, no climb yet: still easy-zone spacing
        let mut state = playing_state(3);
        state.scoreboard.score = 0;
        for _ in 0..50 {
            let p = generate_platform(&mut state, 20_000.0);
            let gap = 20_000.0 - p.pos.y;
            assert!(gap >= MIN_PLATFORM_SPACING, "gap {}", gap);
            assert!(gap <= MIN_PLATFORM_SPACING + PLATFORM_JITTER, "gap {}", gap);
        }
    }

    #[test]
    fn test_narrow_viewport_never_goes_negative() {
        let mut state = playing_state(5);
        state.viewport = Viewport::new(20.0, 800.0);
        let p = generate_platform(&mut state, 50.0);
        assert_eq!(p.pos.x, 0.0);
        let o = generate_obstacle(&mut state, 0.0);
        assert_eq!(o.pos.x, 0.0);
    }

    #[test]
    fn test_frontier_triggers_generation() {
        let mut state = playing_state(11);
        // Initial ladder tops out at 800 - 30 * 30 = -100, no new platform
        let before = state.platforms.len();
        state.power_ups.clear();
        spawn_content(&mut state);
        assert_eq!(state.platforms.len(), before);

        // Push everything down past the trigger line
        for p in &mut state.platforms {
            p.pos.y += 250.0;
        }
        spawn_content(&mut state);
        assert_eq!(state.platforms.len(), before + 1);
        let newest = state.platforms.last().copied().unwrap();
        assert!(newest.pos.y < 150.0);
    }

    #[test]
    fn test_empty_platform_list_generates_immediately() {
        let mut state = playing_state(13);
        state.platforms.clear();
        spawn_content(&mut state);
        assert_eq!(state.platforms.len(), 1);
        assert!(state.platforms[0].pos.y < 800.0);
    }

    #[test]
    fn test_unmeasured_viewport_defers_generation() {
        let mut state = playing_state(13);
        state.platforms.clear();
        state.viewport = Viewport::default();
        spawn_content(&mut state);
        assert!(state.platforms.is_empty());
        assert!(state.monsters.is_empty());
    }

    #[test]
    fn test_drops_land_one_screen_above_player() {
        let mut state = playing_state(17);
        state.player.pos.y = 400.0;
        for _ in 0..2000 {
            spawn_content(&mut state);
            for p in &mut state.platforms {
                p.pos.y += 1.0;
            }
        }
        assert!(!state.monsters.is_empty());
        assert!(!state.power_ups.is_empty());
        assert!(state.monsters.iter().all(|m| m.pos.y == -400.0));
        assert!(state.power_ups.iter().all(|p| p.pos.y == -400.0));
    }

    #[test]
    fn test_spawn_rates_converge() {
        let mut state = playing_state(29);
        let rounds = 20_000;
        let (mut obstacles, mut monsters, mut power_ups) = (0usize, 0usize, 0usize);

        for _ in 0..rounds {
            // Empty list forces one new platform per call
            state.platforms.clear();
            state.obstacles.clear();
            state.monsters.clear();
            state.power_ups.clear();
            spawn_content(&mut state);

            assert_eq!(state.platforms.len(), 1);
            if let Some(obstacle) = state.obstacles.first() {
                let platform = state.platforms[0];
                assert_eq!(obstacle.pos.y, platform.pos.y - OBSTACLE_SIZE - OBSTACLE_GAP);
                obstacles += 1;
            }
            monsters += state.monsters.len();
            power_ups += state.power_ups.len();
        }

        let rate = |n: usize| n as f32 / rounds as f32;
        assert!((rate(obstacles) - OBSTACLE_CHANCE).abs() < 0.02, "obstacles {}", rate(obstacles));
        assert!((rate(monsters) - MONSTER_CHANCE).abs() < 0.004, "monsters {}", rate(monsters));
        assert!((rate(power_ups) - POWER_UP_CHANCE).abs() < 0.004, "power-ups {}", rate(power_ups));
    }

    #[test]
    fn test_no_obstacle_without_new_platform() {
        let mut state = playing_state(31);
        // Initial ladder tops out above the trigger line
        for _ in 0..500 {
            spawn_content(&mut state);
        }
        assert!(state.obstacles.is_empty());
    }

    proptest! {
        #[test]
        fn initial_ladder_is_within_bounds(seed in any::<u64>(), width in 61.0f32..2000.0, height in 200.0f32..2000.0) {
            let mut state = GameState::new(seed, Viewport::new(width, height));
            let ladder = initial_platforms(&mut state);
            prop_assert_eq!(ladder.len(), INITIAL_PLATFORM_COUNT);
            for p in &ladder {
                prop_assert!(p.pos.x >= 0.0 && p.pos.x <= width - PLATFORM_WIDTH);
                prop_assert_eq!(p.kind, PlatformKind::Normal);
            }
            prop_assert_eq!(ladder[0].pos.y, height - MIN_PLATFORM_SPACING);
        }
    }
}
