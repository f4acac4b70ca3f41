//! Timed power-up effects
//!
//! Each effect stores the simulation time at which it lapses. The tick checks
//! deadlines before anything reads the flags, so expiry is deterministic and
//! needs no scheduler.

use serde::{Deserialize, Serialize};

use super::state::PowerUpKind;
use crate::consts::{JETPACK_DURATION_MS, SHIELD_DURATION_MS};

/// Active power-up effects (deadlines in run time, ms)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub jetpack_until: Option<f32>,
    pub shield_until: Option<f32>,
}

impl ActiveEffects {
    pub fn duration_ms(kind: PowerUpKind) -> f32 {
        match kind {
            PowerUpKind::Jetpack => JETPACK_DURATION_MS,
            PowerUpKind::Shield => SHIELD_DURATION_MS,
        }
    }

    /// Start (or restart) an effect at `now_ms`
    pub fn activate(&mut self, kind: PowerUpKind, now_ms: f32) {
        let deadline = Some(now_ms + Self::duration_ms(kind));
        match kind {
            PowerUpKind::Jetpack => self.jetpack_until = deadline,
            PowerUpKind::Shield => self.shield_until = deadline,
        }
    }

    /// Drop every effect whose deadline has been reached
    pub fn expire(&mut self, now_ms: f32) {
        if self.jetpack_until.is_some_and(|t| now_ms >= t) {
            log::debug!("Jetpack expired at {:.0}ms", now_ms);
            self.jetpack_until = None;
        }
        if self.shield_until.is_some_and(|t| now_ms >= t) {
            log::debug!("Shield expired at {:.0}ms", now_ms);
            self.shield_until = None;
        }
    }

    #[inline]
    pub fn jetpack_active(&self) -> bool {
        self.jetpack_until.is_some()
    }

    #[inline]
    pub fn shield_active(&self) -> bool {
        self.shield_until.is_some()
    }

    /// Spend the shield on a hit. Returns false if there was none.
    pub fn consume_shield(&mut self) -> bool {
        self.shield_until.take().is_some()
    }

    /// Time left on an effect, for HUD countdowns
    pub fn remaining_ms(&self, kind: PowerUpKind, now_ms: f32) -> f32 {
        let deadline = match kind {
            PowerUpKind::Jetpack => self.jetpack_until,
            PowerUpKind::Shield => self.shield_until,
        };
        deadline.map_or(0.0, |t| (t - now_ms).max(0.0))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jetpack_lasts_exactly_its_duration() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Jetpack, 1000.0);

        effects.expire(5999.0);
        assert!(effects.jetpack_active());
        effects.expire(6000.0);
        assert!(!effects.jetpack_active());
    }

    #[test]
    fn test_shield_single_use() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Shield, 0.0);
        assert!(effects.consume_shield());
        assert!(!effects.shield_active());
        assert!(!effects.consume_shield());
    }

    #[test]
    fn test_shield_times_out() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Shield, 0.0);
        effects.expire(9999.0);
        assert!(effects.shield_active());
        effects.expire(10000.0);
        assert!(!effects.shield_active());
    }

    #[test]
    fn test_reactivation_extends() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Jetpack, 0.0);
        effects.activate(PowerUpKind::Jetpack, 4000.0);
        effects.expire(8000.0);
        assert!(effects.jetpack_active());
        assert_eq!(effects.remaining_ms(PowerUpKind::Jetpack, 8000.0), 1000.0);
    }

    #[test]
    fn test_effects_are_independent() {
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Jetpack, 0.0);
        effects.activate(PowerUpKind::Shield, 0.0);
        effects.expire(5000.0);
        assert!(!effects.jetpack_active());
        assert!(effects.shield_active());
        assert_eq!(effects.remaining_ms(PowerUpKind::Jetpack, 5000.0), 0.0);
    }
}
