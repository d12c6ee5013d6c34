//! Platform abstraction layer
//!
//! Handles the winit side of:
//! - Input events (key mapping, held keys, quit)
//! - Time (wall-clock frame delta)

pub mod clock;
pub mod keyboard;

pub use clock::FrameClock;
pub use keyboard::{Keyboard, map_key};
