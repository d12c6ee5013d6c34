//! Fatal startup errors
//!
//! Once the window and surface exist the game loop has no error path; every
//! failure before that point ends the process with exit status 1.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("windowing system could not initialize: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window could not be created: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("render surface could not be created: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter for the render surface: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("graphics device could not be created: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

impl StartupError {
    /// Which startup stage failed
    pub fn stage(&self) -> &'static str {
        match self {
            StartupError::EventLoop(_) => "video",
            StartupError::Window(_) => "window",
            StartupError::Surface(_) | StartupError::Adapter(_) | StartupError::Device(_) => {
                "renderer"
            }
        }
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        1
    }
}
