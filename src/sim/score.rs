//! Score and combo tracking

use serde::{Deserialize, Serialize};

use crate::consts::{COMBO_POINTS, COMBO_TIMEOUT_MS};

/// Score for the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Never decreases during a run
    pub score: u64,
    /// Consecutive landings without a long idle gap
    pub combo: u32,
    pub best_combo: u32,
    /// Run time of the most recent landing
    pub last_landing_ms: f32,
}

impl Scoreboard {
    /// Count a landing: bump the combo and award `combo * 10`
    pub fn register_landing(&mut self, now_ms: f32) -> u32 {
        self.combo += 1;
        self.best_combo = self.best_combo.max(self.combo);
        self.score += self.combo as u64 * COMBO_POINTS;
        self.last_landing_ms = now_ms;
        self.combo
    }

    /// Reset the combo once the idle timeout has passed
    pub fn decay_combo(&mut self, now_ms: f32) {
        if self.combo > 0 && now_ms - self.last_landing_ms > COMBO_TIMEOUT_MS {
            log::debug!("Combo x{} dropped", self.combo);
            self.combo = 0;
        }
    }

    /// Credit climbed distance (whole units only)
    pub fn add_climb(&mut self, distance: f32) {
        if distance > 0.0 {
            self.score += distance.floor() as u64;
        }
    }
}
