//! Frame loop
//!
//! The host calls [`FrameDriver::frame`] once per display refresh with its
//! timestamp. The driver turns timestamps into frame deltas, feeds the
//! simulation, forwards events to audio and the leaderboard, and hands the
//! renderer a snapshot. Everything runs on the caller's thread.

use std::cell::Cell;
use std::rc::Rc;

use crate::audio::{AudioManager, AudioSink};
use crate::highscores::HighScores;
use crate::input::InputState;
use crate::render::{FrameView, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Viewport, tick};

/// Cancels a running frame loop (e.g. on teardown)
#[derive(Debug, Clone, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub struct FrameDriver<S: AudioSink> {
    state: GameState,
    input: InputState,
    audio: AudioManager<S>,
    leaderboard: HighScores,
    last_timestamp: Option<f64>,
    handle: LoopHandle,
}

impl<S: AudioSink> FrameDriver<S> {
    pub fn new(seed: u64, viewport: Viewport, settings: &Settings, sink: S) -> Self {
        let mut state = GameState::new(seed, viewport);
        state.max_particles = settings.max_particles();

        Self {
            state,
            input: InputState::new(),
            audio: AudioManager::new(sink, settings),
            leaderboard: HighScores::new(),
            last_timestamp: None,
            handle: LoopHandle::default(),
        }
    }

    /// Handle that stops this loop when cancelled
    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Run one frame. Returns false once the loop has been cancelled; the host
    /// should stop scheduling frames at that point.
    pub fn frame<R: Renderer>(&mut self, timestamp_ms: f64, renderer: &mut R) -> bool {
        if self.handle.is_cancelled() {
            self.audio.stop_music();
            return false;
        }

        // First frame has no predecessor
        let dt_ms = match self.last_timestamp {
            Some(prev) => (timestamp_ms - prev).max(0.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        let input = self.input.take();
        tick(&mut self.state, &input, dt_ms);

        for event in &self.state.events {
            self.audio.on_event(event);
            match *event {
                GameEvent::RunStarted => self.input.release_all(),
                GameEvent::GameOver {
                    score,
                    best_combo,
                    duration_ms,
                    ..
                } => {
                    self.leaderboard.add_score(score, best_combo, duration_ms);
                }
                _ => {}
            }
        }
        self.audio.sync_music(self.state.phase);

        renderer.render(&FrameView::of(&self.state));
        true
    }

    /// Viewport provider hook
    pub fn resize(&mut self, viewport: Viewport) {
        self.state.resize(viewport);
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager<S> {
        &mut self.audio
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn leaderboard(&self) -> &HighScores {
        &self.leaderboard
    }
}

impl<S: AudioSink> Drop for FrameDriver<S> {
    fn drop(&mut self) {
        self.handle.cancel();
        self.audio.stop_music();
    }
}
