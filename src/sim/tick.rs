//! Per-frame simulation step
//!
//! `apply_event` handles discrete input, `tick` advances one variable-length
//! frame. Neither touches the clock, the window or the GPU.

use super::input::{InputEvent, Key, PaddleControls};
use super::state::{GameEvent, GameState, Player, RoundState};
use crate::consts::{BALL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Whether the outer loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Apply one discrete input event
pub fn apply_event(state: &mut GameState, event: InputEvent) -> LoopControl {
    match event {
        InputEvent::Quit => return LoopControl::Exit,
        InputEvent::KeyPressed(Key::P) => state.toggle_pause(),
        InputEvent::KeyPressed(Key::R) => state.restart(),
        // Movement keys act through the held state only
        InputEvent::KeyPressed(_) => {}
    }
    LoopControl::Continue
}

/// Advance the game by `dt` seconds.
///
/// Only runs while Playing. `dt` is used as-is, with no upper cap.
pub fn tick(state: &mut GameState, controls: &PaddleControls, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.round != RoundState::Playing {
        return events;
    }
    let rules = state.rules;

    // Paddles
    let step = rules.paddle_speed * dt;
    for player in Player::BOTH {
        state.paddle_mut(player).drive(controls.get(player), step);
    }

    // Ball
    let ball = &mut state.ball;
    ball.advance(dt);

    // Top/bottom walls: flip only, no position correction
    if ball.rect.top() <= 0.0 || ball.rect.top() + BALL_SIZE >= SCREEN_HEIGHT {
        ball.dir.y = -ball.dir.y;
    }

    // Paddles, checked independently; player 2 wins the direction when both hit
    for player in Player::BOTH {
        if state.ball.rect.intersects(&state.paddle(player).rect) {
            state.ball.dir.x = player.opponent().side_direction();
            state.ball.speed += rules.ball_speed_step;
            events.push(GameEvent::PaddleHit(player));
        }
    }

    // Goals; the left edge takes priority
    let scorer = if state.ball.rect.left() <= 0.0 {
        Some(Player::Two)
    } else if state.ball.rect.left() + BALL_SIZE >= SCREEN_WIDTH {
        Some(Player::One)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        state.score.award(scorer);
        state.popup.last_scorer = Some(scorer);
        state.popup.timer = rules.popup_duration;
        // Serve away from the breached wall
        state
            .ball
            .serve(scorer.side_direction(), rules.base_ball_speed);
        events.push(GameEvent::Scored(scorer));
    }

    if let Some(winner) = state.score.reached(rules.win_score) {
        state.round = RoundState::GameOver;
        events.push(GameEvent::RoundWon(winner));
    }

    if state.popup.timer > 0.0 {
        state.popup.timer -= dt;
    }

    events
}
