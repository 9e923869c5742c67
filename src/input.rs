//! Input capability: discrete events plus per-frame snapshots
//!
//! Discrete happenings (clicks, the pause key, quit) arrive as drained
//! events; held movement keys and the pointer position are sampled once per
//! frame. A host maps its physical devices onto these; the crate ships
//! `ScriptedInput` for tests and headless runs.

use std::collections::VecDeque;

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// A discrete input happening since the previous frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Host asked the session to terminate
    Quit,
    MouseDown { button: MouseButton, pos: Vec2 },
    /// The pause/resume key (whatever the host binds it to)
    PauseKey,
}

/// Held movement keys, sampled once per frame. The host decides which
/// physical keys map here (arrows, WASD, a gamepad).
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Input capability consumed by the session
pub trait InputSource {
    /// Move all events queued since the previous drain into `out`
    fn drain(&mut self, out: &mut Vec<InputEvent>);
    fn move_keys(&self) -> MoveKeys;
    /// Current pointer position (arena coordinates)
    fn mouse_pos(&self) -> Vec2;
}

/// Event source with no device behind it; feed it by hand
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputEvent>,
    keys: MoveKeys,
    mouse: Vec2,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn set_keys(&mut self, keys: MoveKeys) {
        self.keys = keys;
    }

    pub fn set_mouse(&mut self, pos: Vec2) {
        self.mouse = pos;
    }

    /// Convenience: queue a left click at `pos`
    pub fn click(&mut self, pos: Vec2) {
        self.mouse = pos;
        self.push(InputEvent::MouseDown {
            button: MouseButton::Left,
            pos,
        });
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self, out: &mut Vec<InputEvent>) {
        out.extend(self.queue.drain(..));
    }

    fn move_keys(&self) -> MoveKeys {
        self.keys
    }

    fn mouse_pos(&self) -> Vec2 {
        self.mouse
    }
}
