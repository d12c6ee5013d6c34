//! Frame description
//!
//! Turns a `GameState` into a flat list of filled rectangles. Knows nothing
//! about the GPU, so what gets drawn can be tested directly.

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GameState, Player, Rect, RoundState};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized channels, as the shader wants them
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_array();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(20, 25, 45);
    pub const DIVIDER: Color = Color::rgb(80, 80, 120);
    pub const PADDLE_ONE: Color = Color::rgb(255, 180, 80);
    pub const PADDLE_TWO: Color = Color::rgb(100, 200, 255);
    pub const BALL: Color = Color::rgb(255, 255, 255);
    pub const SCORE_MARK: Color = Color::rgb(255, 255, 255);
    pub const PAUSED: Color = Color::rgb(255, 255, 100);
    pub const GAME_OVER: Color = Color::rgba(0, 255, 100, 180);
}

/// Layout of the HUD pieces
pub mod layout {
    use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::sim::Rect;

    pub const DIVIDER_WIDTH: f32 = 4.0;
    pub const SCORE_MARK_SIZE: f32 = 10.0;
    pub const SCORE_MARK_SPACING: f32 = 20.0;
    pub const SCORE_MARK_Y: f32 = 20.0;

    pub const POPUP: Rect = Rect::new(
        SCREEN_WIDTH / 2.0 - 40.0,
        SCREEN_HEIGHT / 2.0 - 40.0,
        80.0,
        80.0,
    );
    pub const PAUSED: Rect = Rect::new(
        SCREEN_WIDTH / 2.0 - 60.0,
        SCREEN_HEIGHT / 2.0 - 20.0,
        120.0,
        40.0,
    );
    pub const GAME_OVER: Rect = Rect::new(
        SCREEN_WIDTH / 2.0 - 150.0,
        SCREEN_HEIGHT / 2.0 - 40.0,
        300.0,
        80.0,
    );
}

/// One filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Color,
}

/// Everything needed to draw one frame, in back-to-front order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear: Color,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn fill(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand { rect, color });
    }
}

/// Player color, also used for the popup mix
pub fn paddle_color(player: Player) -> Color {
    match player {
        Player::One => colors::PADDLE_ONE,
        Player::Two => colors::PADDLE_TWO,
    }
}

/// Popup color: the scorer's channel (red for 1, green for 2) at full
fn popup_color(last_scorer: Option<Player>) -> Color {
    let channel = |p: Player| if last_scorer == Some(p) { 255 } else { 100 };
    Color::rgb(channel(Player::One), channel(Player::Two), 100)
}

/// Score marks grow outward from each player's quarter of the screen
fn score_mark(player: Player, index: u32) -> Rect {
    let offset = index as f32 * layout::SCORE_MARK_SPACING;
    let x = match player {
        Player::One => SCREEN_WIDTH / 4.0 - offset,
        Player::Two => SCREEN_WIDTH * 3.0 / 4.0 + offset,
    };
    Rect::new(
        x,
        layout::SCORE_MARK_Y,
        layout::SCORE_MARK_SIZE,
        layout::SCORE_MARK_SIZE,
    )
}

/// Describe the frame for the current state
pub fn describe_frame(state: &GameState) -> Frame {
    let mut frame = Frame {
        clear: colors::BACKGROUND,
        commands: Vec::with_capacity(16),
    };

    frame.fill(
        Rect::new(
            SCREEN_WIDTH / 2.0 - layout::DIVIDER_WIDTH / 2.0,
            0.0,
            layout::DIVIDER_WIDTH,
            SCREEN_HEIGHT,
        ),
        colors::DIVIDER,
    );

    for player in Player::BOTH {
        frame.fill(state.paddle(player).rect, paddle_color(player));
    }

    frame.fill(state.ball.rect, colors::BALL);

    for player in Player::BOTH {
        for i in 0..state.score.get(player) {
            frame.fill(score_mark(player, i), colors::SCORE_MARK);
        }
    }

    if state.popup.is_visible() {
        frame.fill(layout::POPUP, popup_color(state.popup.last_scorer));
    }

    match state.round {
        RoundState::Playing => {}
        RoundState::Paused => frame.fill(layout::PAUSED, colors::PAUSED),
        RoundState::GameOver => frame.fill(layout::GAME_OVER, colors::GAME_OVER),
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(frame: &Frame, color: Color) -> usize {
        frame.commands.iter().filter(|c| c.color == color).count()
    }

    #[test]
    fn test_fresh_game_frame() {
        let state = GameState::new();
        let frame = describe_frame(&state);

        assert_eq!(frame.clear, colors::BACKGROUND);
        // Divider, two paddles, ball
        assert_eq!(frame.commands.len(), 4);
        assert_eq!(
            frame.commands[0].rect,
            Rect::new(398.0, 0.0, 4.0, 600.0)
        );
        assert_eq!(frame.commands[1].color, colors::PADDLE_ONE);
        assert_eq!(frame.commands[2].color, colors::PADDLE_TWO);
        assert_eq!(frame.commands[3].rect, state.ball.rect);
    }

    #[test]
    fn test_one_mark_per_point() {
        let mut state = GameState::new();
        state.score.award(Player::One);
        state.score.award(Player::One);
        state.score.award(Player::Two);

        let frame = describe_frame(&state);
        let marks: Vec<Rect> = frame
            .commands
            .iter()
            .filter(|c| c.rect.size.x == layout::SCORE_MARK_SIZE)
            .map(|c| c.rect)
            .collect();

        assert_eq!(
            marks,
            vec![
                Rect::new(200.0, 20.0, 10.0, 10.0),
                Rect::new(180.0, 20.0, 10.0, 10.0),
                Rect::new(600.0, 20.0, 10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_popup_color_tracks_scorer() {
        let mut state = GameState::new();
        state.popup.timer = 0.5;
        state.popup.last_scorer = Some(Player::One);

        let frame = describe_frame(&state);
        let popup = frame
            .commands
            .iter()
            .find(|c| c.rect == layout::POPUP)
            .map(|c| c.color);
        assert_eq!(popup, Some(Color::rgb(255, 100, 100)));

        state.popup.last_scorer = Some(Player::Two);
        let frame = describe_frame(&state);
        assert_eq!(count(&frame, Color::rgb(100, 255, 100)), 1);
    }

    #[test]
    fn test_expired_popup_hidden() {
        let mut state = GameState::new();
        state.popup.timer = -0.01;
        state.popup.last_scorer = Some(Player::One);

        let frame = describe_frame(&state);
        assert!(frame.commands.iter().all(|c| c.rect != layout::POPUP));
    }

    #[test]
    fn test_round_overlays() {
        let mut state = GameState::new();

        state.round = RoundState::Paused;
        let frame = describe_frame(&state);
        assert_eq!(count(&frame, colors::PAUSED), 1);
        assert_eq!(count(&frame, colors::GAME_OVER), 0);

        state.round = RoundState::GameOver;
        let frame = describe_frame(&state);
        assert_eq!(count(&frame, colors::PAUSED), 0);
        let last = frame.commands.last().copied();
        assert_eq!(
            last,
            Some(DrawCommand {
                rect: Rect::new(250.0, 260.0, 300.0, 80.0),
                color: colors::GAME_OVER,
            })
        );
    }

    #[test]
    fn test_color_to_array() {
        assert_eq!(colors::BALL.to_array(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::rgba(0, 0, 0, 0).to_array(), [0.0; 4]);
    }
}
