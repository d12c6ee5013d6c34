//! Game state and core simulation types
//!
//! Everything the game knows lives in `GameState`; nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::input::{Key, PaddleIntent};
use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle, W/S
    One,
    /// Right paddle, arrow keys
    Two,
}

impl Player {
    /// Both players, in collision/check order
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// 1 or 2, for logs
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// (up, down) bindings
    pub const fn keys(self) -> (Key, Key) {
        match self {
            Player::One => (Key::W, Key::S),
            Player::Two => (Key::Up, Key::Down),
        }
    }

    /// Horizontal sign pointing toward this player's side of the court
    pub const fn side_direction(self) -> f32 {
        match self {
            Player::One => -1.0,
            Player::Two => 1.0,
        }
    }
}

/// Round state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Active gameplay
    Playing,
    /// Frozen until pause is pressed again
    Paused,
    /// Someone reached the win score; frozen until restart
    GameOver,
}

/// Gameplay tuning. Defaults are the compile-time constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    pub win_score: u32,
    pub paddle_speed: f32,
    pub base_ball_speed: f32,
    pub ball_speed_step: f32,
    pub popup_duration: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            paddle_speed: PADDLE_SPEED,
            base_ball_speed: BALL_BASE_SPEED,
            ball_speed_step: BALL_SPEED_STEP,
            popup_duration: POPUP_DURATION,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle in its starting spot, vertically centered
    pub fn new(player: Player) -> Self {
        let x = match player {
            Player::One => PADDLE_MARGIN,
            Player::Two => SCREEN_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        let y = SCREEN_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    pub fn y(&self) -> f32 {
        self.rect.pos.y
    }

    /// Highest y the bound check lets the paddle move down from
    pub const MAX_Y: f32 = SCREEN_HEIGHT - PADDLE_HEIGHT;

    /// Move by `step` pixels according to the intent.
    ///
    /// Bounds are checked before moving, not after, and the down check sees
    /// the position the up check already produced. A paddle can therefore end
    /// a frame up to one step past an edge.
    pub fn drive(&mut self, intent: PaddleIntent, step: f32) {
        if intent.up && self.rect.pos.y > 0.0 {
            self.rect.pos.y -= step;
        }
        if intent.down && self.rect.pos.y < Self::MAX_Y {
            self.rect.pos.y += step;
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Direction signs per axis, each +1 or -1
    pub dir: Vec2,
    /// Speed scalar; grows on paddle hits, resets on serve
    pub speed: f32,
}

impl Ball {
    /// Ball at the screen center heading down-right
    pub fn new(speed: f32) -> Self {
        Self {
            rect: Rect::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, BALL_SIZE, BALL_SIZE),
            dir: Vec2::ONE,
            speed,
        }
    }

    /// Put the ball back at the screen center with the given horizontal sign.
    /// The vertical sign is kept.
    pub fn serve(&mut self, dir_x: f32, speed: f32) {
        self.rect.pos = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
        self.dir.x = dir_x.signum();
        self.speed = speed;
    }

    /// Velocity in pixels per second
    pub fn velocity(&self) -> Vec2 {
        self.dir * BALL_VELOCITY_UNITS * (self.speed / BALL_SPEED_DIVISOR)
    }

    pub fn advance(&mut self, dt: f32) {
        self.rect.pos += self.velocity() * dt;
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    points: [u32; 2],
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    pub fn award(&mut self, player: Player) {
        self.points[player.index()] += 1;
    }

    /// Leading player, if any has reached `target`
    pub fn reached(&self, target: u32) -> Option<Player> {
        Player::BOTH.into_iter().find(|&p| self.get(p) >= target)
    }
}

/// Score flash shown after a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorePopup {
    /// Seconds left; at or below zero means hidden. Not clamped.
    pub timer: f32,
    pub last_scorer: Option<Player>,
}

impl ScorePopup {
    pub fn is_visible(&self) -> bool {
        self.timer > 0.0
    }
}

/// Things that happened during a frame, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PaddleHit(Player),
    Scored(Player),
    RoundWon(Player),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub round: RoundState,
    pub rules: Rules,
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    pub popup: ScorePopup,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self {
            round: RoundState::Playing,
            rules,
            paddles: Player::BOTH.map(Paddle::new),
            ball: Ball::new(rules.base_ball_speed),
            score: Score::default(),
            popup: ScorePopup::default(),
        }
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        &mut self.paddles[player.index()]
    }

    /// Flip Playing and Paused. Has no effect once the round is over.
    pub fn toggle_pause(&mut self) {
        self.round = match self.round {
            RoundState::Playing => RoundState::Paused,
            RoundState::Paused => RoundState::Playing,
            RoundState::GameOver => RoundState::GameOver,
        };
    }

    /// Start a fresh round from any state.
    ///
    /// Scores, ball and round state reset; paddles and the popup stay where
    /// they are.
    pub fn restart(&mut self) {
        self.score = Score::default();
        self.round = RoundState::Playing;
        self.ball = Ball::new(self.rules.base_ball_speed);
    }

    /// The winner, once the round is over
    pub fn winner(&self) -> Option<Player> {
        match self.round {
            RoundState::GameOver => self.score.reached(self.rules.win_score),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();
        assert_eq!(state.round, RoundState::Playing);
        assert_eq!(state.paddle(Player::One).rect, Rect::new(50.0, 250.0, 20.0, 100.0));
        assert_eq!(state.paddle(Player::Two).rect, Rect::new(730.0, 250.0, 20.0, 100.0));
        assert_eq!(state.ball.rect, Rect::new(400.0, 300.0, 15.0, 15.0));
        assert_eq!(state.ball.dir, Vec2::ONE);
        assert_eq!(state.ball.speed, 400.0);
        assert!(!state.popup.is_visible());
    }

    #[test]
    fn test_base_speed_moves_400_px_per_second() {
        let ball = Ball::new(BALL_BASE_SPEED);
        assert_eq!(ball.velocity(), Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_paddle_drive_pre_move_bounds() {
        let mut paddle = Paddle::new(Player::One);

        // At the top edge, up does nothing
        paddle.rect.pos.y = 0.0;
        paddle.drive(PaddleIntent { up: true, down: false }, 10.0);
        assert_eq!(paddle.y(), 0.0);

        // Slightly below the top, one step overshoots
        paddle.rect.pos.y = 3.0;
        paddle.drive(PaddleIntent { up: true, down: false }, 10.0);
        assert_eq!(paddle.y(), -7.0);

        // At the bottom, down does nothing
        paddle.rect.pos.y = Paddle::MAX_Y;
        paddle.drive(PaddleIntent { up: false, down: true }, 10.0);
        assert_eq!(paddle.y(), Paddle::MAX_Y);
    }

    #[test]
    fn test_paddle_drive_both_keys_sequential_checks() {
        let mut paddle = Paddle::new(Player::Two);

        // Mid-screen: up then down cancel out
        let start = paddle.y();
        paddle.drive(PaddleIntent { up: true, down: true }, 10.0);
        assert_eq!(paddle.y(), start);

        // At the top: up is blocked, down still applies
        paddle.rect.pos.y = 0.0;
        paddle.drive(PaddleIntent { up: true, down: true }, 10.0);
        assert_eq!(paddle.y(), 10.0);
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = GameState::new();
        state.toggle_pause();
        assert_eq!(state.round, RoundState::Paused);
        state.toggle_pause();
        assert_eq!(state.round, RoundState::Playing);

        state.round = RoundState::GameOver;
        state.toggle_pause();
        assert_eq!(state.round, RoundState::GameOver);
    }

    #[test]
    fn test_restart_keeps_paddles() {
        let mut state = GameState::new();
        state.paddle_mut(Player::One).rect.pos.y = 12.0;
        state.paddle_mut(Player::Two).rect.pos.y = 480.0;
        state.score.award(Player::One);
        state.score.award(Player::Two);
        state.ball.rect.pos = Vec2::new(10.0, 20.0);
        state.ball.dir = Vec2::new(-1.0, -1.0);
        state.ball.speed = 650.0;
        state.round = RoundState::GameOver;

        state.restart();

        assert_eq!(state.round, RoundState::Playing);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball, Ball::new(BALL_BASE_SPEED));
        assert_eq!(state.paddle(Player::One).y(), 12.0);
        assert_eq!(state.paddle(Player::Two).y(), 480.0);
    }

    #[test]
    fn test_winner_only_when_over() {
        let mut state = GameState::new();
        for _ in 0..WIN_SCORE {
            state.score.award(Player::Two);
        }
        assert_eq!(state.winner(), None);

        state.round = RoundState::GameOver;
        assert_eq!(state.winner(), Some(Player::Two));
    }

    #[test]
    fn test_serve_keeps_vertical_sign() {
        let mut ball = Ball::new(BALL_BASE_SPEED);
        ball.dir = Vec2::new(-1.0, -1.0);
        ball.speed = 900.0;
        ball.serve(1.0, BALL_BASE_SPEED);

        assert_eq!(ball.rect.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.dir, Vec2::new(1.0, -1.0));
        assert_eq!(ball.speed, BALL_BASE_SPEED);
    }
}
