//! Pong Duel entry point
//!
//! Creates the window and renderer, then runs the game loop:
//! poll events → update → render → present.

use std::process::ExitCode;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use pong_duel::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pong_duel::platform::{FrameClock, Keyboard};
use pong_duel::renderer::{RenderState, describe_frame};
use pong_duel::sim::{
    GameEvent, GameState, InputEvent, Key, LoopControl, Player, apply_event, tick,
};
use pong_duel::{Settings, StartupError};

/// The running game
struct Game {
    settings: Settings,
    state: GameState,
    keyboard: Keyboard,
    clock: FrameClock,
    // Dropped before the window it draws into
    render_state: Option<RenderState>,
    window: Option<Arc<Window>>,
    startup_error: Option<StartupError>,
}

impl Game {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            state: GameState::new(),
            keyboard: Keyboard::new(),
            clock: FrameClock::new(),
            render_state: None,
            window: None,
            startup_error: None,
        }
    }

    /// Create the window and its render surface
    fn create_window(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(Arc<Window>, RenderState), StartupError> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(self.settings.resizable);

        let window = Arc::new(event_loop.create_window(attributes)?);
        let size = window.inner_size();
        log::info!("Window created ({}x{})", size.width, size.height);

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), self.settings.vsync))?;
        Ok((window, render_state))
    }

    /// Apply queued discrete input; returns Exit on quit
    fn process_events(&mut self) -> LoopControl {
        for event in self.keyboard.drain_events() {
            if apply_event(&mut self.state, event) == LoopControl::Exit {
                return LoopControl::Exit;
            }
            match event {
                InputEvent::KeyPressed(Key::P) => log::info!("Round {:?}", self.state.round),
                InputEvent::KeyPressed(Key::R) => log::info!("Game restarted"),
                _ => {}
            }
        }
        LoopControl::Continue
    }

    /// One update step
    fn update(&mut self) {
        let dt = self.clock.tick();
        let controls = self.keyboard.held().controls();
        for event in tick(&mut self.state, &controls, dt) {
            match event {
                GameEvent::PaddleHit(player) => {
                    log::debug!(
                        "Player {} hit, ball speed {}",
                        player.number(),
                        self.state.ball.speed
                    );
                }
                GameEvent::Scored(player) => {
                    log::info!(
                        "Player {} scores ({} - {})",
                        player.number(),
                        self.state.score.get(Player::One),
                        self.state.score.get(Player::Two)
                    );
                }
                GameEvent::RoundWon(player) => {
                    log::info!("Player {} wins! Press R to restart", player.number());
                }
            }
        }
    }

    /// Render the current frame
    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let frame = describe_frame(&self.state);
        match render_state.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timeout, frame skipped"),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match self.create_window(event_loop) {
            Ok((window, render_state)) => {
                self.render_state = Some(render_state);
                self.window = Some(window);
                self.clock.reset();
                log::info!("Pong running! W/S and Up/Down move, P pauses, R restarts");
            }
            Err(e) => {
                log::error!("{} startup failed: {}", e.stage(), e);
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.keyboard.request_quit(),
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard
                    .handle_key(event.physical_key, event.state, event.repeat);
            }
            WindowEvent::Focused(false) => self.keyboard.focus_lost(),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.render(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }
        if self.process_events() == LoopControl::Exit {
            log::info!("Quit requested, exiting");
            event_loop.exit();
            return;
        }
        self.update();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pong starting...");

    let settings = Settings::load();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            let e = StartupError::from(e);
            log::error!("{} startup failed: {}", e.stage(), e);
            return ExitCode::from(e.exit_code());
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new(settings);
    if let Err(e) = event_loop.run_app(&mut game) {
        let e = StartupError::from(e);
        log::error!("{} failed: {}", e.stage(), e);
        return ExitCode::from(e.exit_code());
    }

    match game.startup_error.take() {
        Some(e) => ExitCode::from(e.exit_code()),
        None => {
            log::info!("Goodbye");
            ExitCode::SUCCESS
        }
    }
}
