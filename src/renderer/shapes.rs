//! Shape generation for 2D primitives

use glam::Vec2;

use super::scene::{DrawCommand, Frame};
use super::vertex::Vertex;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

/// Map logical canvas coordinates (origin top-left, y down) to NDC
#[inline]
pub fn canvas_to_ndc(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x / SCREEN_WIDTH * 2.0 - 1.0,
        1.0 - p.y / SCREEN_HEIGHT * 2.0,
    )
}

/// Generate vertices for a filled rectangle (two triangles, NDC)
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let tl = canvas_to_ndc(rect.pos);
    let br = canvas_to_ndc(rect.pos + rect.size);

    let v = |x: f32, y: f32| Vertex::new(x, y, color);
    [
        v(tl.x, tl.y),
        v(tl.x, br.y),
        v(br.x, tl.y),
        v(br.x, tl.y),
        v(tl.x, br.y),
        v(br.x, br.y),
    ]
}

/// Vertices for a whole frame, preserving draw order
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(frame.commands.len() * 6);
    for DrawCommand { rect: r, color } in &frame.commands {
        vertices.extend_from_slice(&rect(r, color.to_array()));
    }
    vertices
}
