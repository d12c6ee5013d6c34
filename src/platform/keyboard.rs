//! Keyboard input from winit
//!
//! Splits raw key events into the two input modalities the game uses: a
//! queue of discrete `InputEvent`s and the set of keys currently held.

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::{HeldKeys, InputEvent, Key};

/// Map a physical key to a game key; unbound keys map to `None`
pub fn map_key(key: PhysicalKey) -> Option<Key> {
    match key {
        PhysicalKey::Code(code) => match code {
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::KeyP => Some(Key::P),
            KeyCode::KeyR => Some(Key::R),
            _ => None,
        },
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Collects keyboard state between frames
#[derive(Debug, Default)]
pub struct Keyboard {
    held: HeldKeys,
    pending: Vec<InputEvent>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Auto-repeat presses only keep the key held.
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState, repeat: bool) {
        let Some(key) = map_key(key) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                self.held.press(key);
                if !repeat {
                    self.pending.push(InputEvent::KeyPressed(key));
                }
            }
            ElementState::Released => self.held.release(key),
        }
    }

    /// Queue a quit request
    pub fn request_quit(&mut self) {
        self.pending.push(InputEvent::Quit);
    }

    /// Window lost focus: no release events will follow
    pub fn focus_lost(&mut self) {
        self.held.release_all();
    }

    /// Take the events queued since the last frame, oldest first
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn held(&self) -> &HeldKeys {
        &self.held
    }
}
