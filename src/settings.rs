//! Game settings and preferences
//!
//! Stored as JSON. Nothing here affects gameplay rules, only presentation and
//! the session seed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;

/// Effects quality presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => MAX_PARTICLES / 4,
            QualityPreset::Medium => MAX_PARTICLES,
            QualityPreset::High => MAX_PARTICLES * 2,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Effects quality preset
    pub quality: QualityPreset,
    /// Particle bursts on landings and hits
    pub particles: bool,

    // === Audio ===
    /// Global mute; every trigger becomes a no-op
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    /// Fixed session seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,

            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,

            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle cap (0 when particles are off)
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Sound effect gain after mute and master volume
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Music gain after mute and master volume
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Command-line form: a quality preset name, otherwise a settings file
    pub fn from_arg(arg: &str) -> Self {
        match QualityPreset::parse(arg) {
            Some(preset) => Self::from_preset(preset),
            None => Self::load(Path::new(arg)),
        }
    }

    /// Save settings as JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "seed": 42 }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.quality, QualityPreset::Medium);
        assert_eq!(settings.music_volume, 0.5);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ muted: yes").is_err());
    }

    #[test]
    fn test_mute_silences_everything() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        assert_eq!(settings.effective_sfx_volume(), 0.0);
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_particle_cap() {
        assert_eq!(Settings::default().max_particles(), MAX_PARTICLES);
        assert_eq!(Settings::from_preset(QualityPreset::Low).max_particles(), MAX_PARTICLES / 4);
        let off = Settings {
            particles: false,
            ..Default::default()
        };
        assert_eq!(off.max_particles(), 0);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(QualityPreset::parse("HIGH"), Some(QualityPreset::High));
        assert_eq!(QualityPreset::parse("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("ultra"), None);
        assert_eq!(QualityPreset::Low.as_str(), "Low");
    }

    #[test]
    fn test_arg_selects_preset_or_file() {
        assert_eq!(Settings::from_arg("low").quality, QualityPreset::Low);
        assert_eq!(Settings::from_arg("High"), Settings::from_preset(QualityPreset::High));

        let path = std::env::temp_dir().join(format!("skyhop-arg-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "quality": "Low", "muted": true }"#).unwrap();
        let settings = Settings::from_arg(&path.to_string_lossy());
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(settings.muted);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("skyhop-settings-{}.json", std::process::id()));
        let settings = Settings {
            quality: QualityPreset::High,
            seed: Some(7),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("skyhop-settings-does-not-exist.json");
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
