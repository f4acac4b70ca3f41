//! Audio triggers
//!
//! The game decides *when* a sound plays; an [`AudioSink`] decides how. The
//! manager sits in between and owns the mute flag and volume mixing, so a
//! muted game never reaches the sink at all.

use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Landed on a platform
    Jump,
    /// Picked up a power-up
    Collect,
    /// Hit an obstacle or monster unprotected
    Hit,
    /// Run ended
    GameOver,
}

impl SoundEffect {
    /// Which effect (if any) a simulation event triggers
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Landed { .. } => Some(SoundEffect::Jump),
            GameEvent::PowerUpCollected { .. } => Some(SoundEffect::Collect),
            GameEvent::Hit => Some(SoundEffect::Hit),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::RunStarted | GameEvent::PlatformBroken { .. } | GameEvent::ShieldAbsorbed => {
                None
            }
        }
    }
}

/// Playback backend (fire-and-forget)
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
    /// Start or stop the looping background track
    fn set_music(&mut self, playing: bool, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} @ {:.2}", effect, volume);
    }

    fn set_music(&mut self, playing: bool, volume: f32) {
        log::debug!("music {} @ {:.2}", if playing { "on" } else { "off" }, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    /// Mute flag and volume mix
    settings: Settings,
    music_playing: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            settings: settings.clone(),
            music_playing: false,
        }
    }

    /// Mute/unmute all audio. Muting also stops the music.
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
        if muted {
            self.stop_music();
        }
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.settings.muted);
        self.settings.muted
    }

    pub fn is_muted(&self) -> bool {
        self.settings.muted
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    /// Play a sound effect (no-op when muted or silent)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.settings.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// React to a simulation event
    pub fn on_event(&mut self, event: &GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }

    /// Background music runs only while actively playing and audible
    pub fn sync_music(&mut self, phase: GamePhase) {
        let volume = self.settings.effective_music_volume();
        let want = phase == GamePhase::Playing && volume > 0.0;
        if want == self.music_playing {
            return;
        }
        self.music_playing = want;
        self.sink.set_music(want, volume);
    }

    pub fn stop_music(&mut self) {
        if self.music_playing {
            self.music_playing = false;
            self.sink.set_music(false, 0.0);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
