//! Particle bursts
//!
//! Visual feedback only, but simulated alongside everything else so bursts
//! are reproducible for a given seed.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle};
use crate::consts::{PARTICLE_GRAVITY, PARTICLE_SPREAD};
use crate::frame_scale;

/// Particles fade out over this long
pub const PARTICLE_FADE_MS: f32 = 1000.0;

/// Spawn `count` particles at `at` with random velocities
pub fn burst(state: &mut GameState, at: Vec2, count: usize, color: u32) {
    if state.max_particles == 0 {
        return;
    }

    // Only the newest `max_particles` of this burst could survive anyway
    let count = count.min(state.max_particles);
    let excess = (state.particles.len() + count).saturating_sub(state.max_particles);
    if excess > 0 {
        // Drop the oldest to make room
        state.particles.drain(..excess.min(state.particles.len()));
    }

    for _ in 0..count {
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            (state.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
        );
        let id = state.next_entity_id();
        state.particles.push(Particle {
            id,
            pos: at,
            vel,
            color,
            age_ms: 0.0,
        });
    }
}

/// Integrate particles and drop the ones that fell off screen
pub fn update(particles: &mut Vec<Particle>, dt_ms: f32, viewport_height: f32) {
    let scale = frame_scale(dt_ms);
    for particle in particles.iter_mut() {
        particle.pos += particle.vel * scale;
        particle.vel.y += PARTICLE_GRAVITY * scale;
        particle.age_ms += dt_ms;
    }
    particles.retain(|p| p.pos.y < viewport_height);
}

impl Particle {
    /// 1.0 when fresh, fading linearly to 0.0
    pub fn opacity(&self) -> f32 {
        (1.0 - self.age_ms / PARTICLE_FADE_MS).clamp(0.0, 1.0)
    }
}
