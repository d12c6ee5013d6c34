//! Game rules
//!
//! All gameplay logic lives here. This module stays pure:
//! - Elapsed time comes in as a parameter
//! - Input arrives as plain values (`InputEvent`, `PaddleControls`)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use input::{HeldKeys, InputEvent, Key, PaddleControls, PaddleIntent};
pub use state::{
    Ball, GameEvent, GameState, Paddle, Player, RoundState, Rules, Score, ScorePopup,
};
pub use tick::{LoopControl, apply_event, tick};
