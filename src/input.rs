//! Input state
//!
//! Hosts report raw key and pointer events here. Once per frame the state is
//! folded into a [`TickInput`]: held keys persist, one-shot actions (pause,
//! start) and pointer moves are consumed.

use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Pause,
    Start,
}

impl Key {
    /// Map a DOM-style key name to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "p" | "P" | "Escape" => Some(Key::Pause),
            "Enter" | " " => Some(Key::Start),
            _ => None,
        }
    }
}

/// Held keys plus pending one-shot actions
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    pointer_x: Option<f32>,
    pause_requested: bool,
    start_requested: bool,
    /// Idle/demo mode
    pub autopilot: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Pause => self.pause_requested = true,
            Key::Start => self.start_requested = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Pause | Key::Start => {}
        }
    }

    /// Pointer/touch position in viewport space
    pub fn pointer_move(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    /// Forget held keys (e.g. when a run starts)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
        self.pointer_x = None;
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Pause | Key::Start => false,
        }
    }

    /// Build this frame's input, consuming one-shot actions
    pub fn take(&mut self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            pointer_x: self.pointer_x.take(),
            pause: std::mem::take(&mut self.pause_requested),
            start: std::mem::take(&mut self.start_requested),
            autopilot: self.autopilot,
        }
    }
}
