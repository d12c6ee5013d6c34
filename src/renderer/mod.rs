//! Rendering module
//!
//! `scene` describes a frame as colored rectangles; the rest pushes those
//! rectangles through a small wgpu pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Color, DrawCommand, Frame, describe_frame};
pub use vertex::Vertex;
