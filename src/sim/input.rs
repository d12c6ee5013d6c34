//! Input model
//!
//! Two separate modalities:
//! - `InputEvent`: discrete, edge-triggered happenings consumed once per frame
//! - `HeldKeys`: which keys are down right now, queried for paddle movement

use std::collections::HashSet;

use super::state::Player;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Player 1 up
    W,
    /// Player 1 down
    S,
    /// Player 2 up
    Up,
    /// Player 2 down
    Down,
    /// Pause toggle
    P,
    /// Restart
    R,
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / quit signal
    Quit,
    /// A key went down (auto-repeat excluded)
    KeyPressed(Key),
}

/// Set of keys currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    /// Forget every held key (e.g. focus lost, no release events will arrive)
    pub fn release_all(&mut self) {
        self.keys.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Paddle intents derived from the held keys
    pub fn controls(&self) -> PaddleControls {
        let mut controls = PaddleControls::default();
        for player in Player::BOTH {
            let (up, down) = player.keys();
            controls.set(
                player,
                PaddleIntent {
                    up: self.is_held(up),
                    down: self.is_held(down),
                },
            );
        }
        controls
    }
}

impl FromIterator<Key> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Up/down intent for a single paddle. Both may be set at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

/// Per-frame paddle intents for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleControls {
    intents: [PaddleIntent; 2],
}

impl PaddleControls {
    pub fn get(&self, player: Player) -> PaddleIntent {
        self.intents[player.index()]
    }

    pub fn set(&mut self, player: Player, intent: PaddleIntent) {
        self.intents[player.index()] = intent;
    }
}
