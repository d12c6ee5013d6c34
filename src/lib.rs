//! Pong Duel - two players, two paddles, one ball
//!
//! Core modules:
//! - `sim`: Pure game rules (state, input model, per-frame update)
//! - `renderer`: Frame description and the wgpu rectangle pipeline
//! - `platform`: winit key mapping and frame timing
//! - `settings`: Window preferences
//! - `error`: Fatal startup errors

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical canvas dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle size
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Distance from the left edge to player 1's paddle
    pub const PADDLE_MARGIN: f32 = 50.0;
    /// Paddle speed (pixels per second)
    pub const PADDLE_SPEED: f32 = 400.0;

    /// Ball edge length (the ball is a square)
    pub const BALL_SIZE: f32 = 15.0;
    /// Per-axis velocity magnitude the speed scalar multiplies
    pub const BALL_VELOCITY_UNITS: f32 = 4.0;
    /// Speed scalar divisor; with 4 velocity units base speed moves 400 px/s per axis
    pub const BALL_SPEED_DIVISOR: f32 = 4.0;
    /// Ball speed at serve
    pub const BALL_BASE_SPEED: f32 = 400.0;
    /// Speed gained on every paddle hit
    pub const BALL_SPEED_STEP: f32 = 50.0;

    /// Points needed to win a round
    pub const WIN_SCORE: u32 = 5;
    /// Seconds the score popup stays up
    pub const POPUP_DURATION: f32 = 1.0;
}
