//! Player kinematics
//!
//! Horizontal motion is per-frame (acceleration, friction, clamp). Vertical
//! motion is scaled by `dt / 16ms` so uneven frame times integrate evenly.

use super::state::{Facing, Obstacle, ObstacleKind, Platform, PlatformKind, Player};
use super::tick::TickInput;
use crate::consts::*;
use crate::frame_scale;

/// Apply held-direction input, friction and the speed clamp
pub fn steer(player: &mut Player, input: &TickInput) {
    let mut vx = player.vel.x;
    if input.left {
        vx -= MOVE_ACCELERATION;
        player.facing = Facing::Left;
    } else if input.right {
        vx += MOVE_ACCELERATION;
        player.facing = Facing::Right;
    }

    vx *= FRICTION;
    vx = vx.clamp(-MAX_VELOCITY, MAX_VELOCITY);
    if vx.abs() < VELOCITY_DEAD_ZONE {
        vx = 0.0;
    }
    player.vel.x = vx;
}

/// Out of control: no input, slow horizontal decay
pub fn drift(player: &mut Player) {
    player.vel.x *= FALLING_DRAG;
}

/// Integrate position and gravity for one frame
pub fn advance(player: &mut Player, dt_ms: f32, viewport_width: f32) {
    let scale = frame_scale(dt_ms);

    player.pos.x = wrap_x(player.pos.x + player.vel.x, player.size, viewport_width);
    player.pos.y -= player.vel.y * scale;
    player.vel.y -= GRAVITY * scale;
}

/// Leaving one side re-enters from the other
pub fn wrap_x(x: f32, size: f32, viewport_width: f32) -> f32 {
    if x < -size {
        viewport_width
    } else if x > viewport_width {
        -size
    } else {
        x
    }
}

/// Touch drag: place the player under the pointer, bypassing acceleration
pub fn follow_pointer(player: &mut Player, pointer_x: f32, viewport_width: f32) {
    if !pointer_x.is_finite() {
        return;
    }
    player.facing = if pointer_x < player.pos.x {
        Facing::Left
    } else {
        Facing::Right
    };
    let max_x = (viewport_width - player.size).max(0.0);
    player.pos.x = (pointer_x - player.size / 2.0).clamp(0.0, max_x);
}

/// Sway moving platforms and saws along their sine paths
pub fn sway(platforms: &mut [Platform], obstacles: &mut [Obstacle], elapsed_ms: f32, dt_ms: f32) {
    let scale = frame_scale(dt_ms);

    let platform_dx = (elapsed_ms / MOVING_PLATFORM_PERIOD_MS).sin() * MOVING_PLATFORM_AMPLITUDE * scale;
    for platform in platforms.iter_mut().filter(|p| p.kind == PlatformKind::Moving) {
        platform.pos.x += platform_dx;
    }

    let saw_dx = (elapsed_ms / SAW_PERIOD_MS).sin() * SAW_AMPLITUDE * scale;
    for obstacle in obstacles.iter_mut().filter(|o| o.kind == ObstacleKind::Saw) {
        obstacle.pos.x += saw_dx;
    }
}
