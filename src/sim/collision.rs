//! Axis-aligned rectangles and overlap tests
//!
//! Everything in the game is an axis-aligned rectangle, so a single AABB
//! test covers ball/paddle contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its origin at the top-left corner (y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Whether the two rectangles overlap on both axes
    ///
    /// Edges are inclusive: rectangles that merely touch count as overlapping.
    /// Rectangles with a negative extent never overlap anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.cmplt(Vec2::ZERO).any() || other.size.cmplt(Vec2::ZERO).any() {
            return false;
        }
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_inside() {
        let paddle = Rect::new(50.0, 250.0, 20.0, 100.0);
        let ball = Rect::new(60.0, 300.0, 15.0, 15.0);
        assert!(ball.intersects(&paddle));
        assert!(paddle.intersects(&ball));
    }

    #[test]
    fn test_overlap_needs_both_axes() {
        let paddle = Rect::new(50.0, 250.0, 20.0, 100.0);

        // Same rows, far to the right
        let ball = Rect::new(200.0, 300.0, 15.0, 15.0);
        assert!(!ball.intersects(&paddle));

        // Same columns, above the paddle
        let ball = Rect::new(55.0, 100.0, 15.0, 15.0);
        assert!(!ball.intersects(&paddle));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let paddle = Rect::new(50.0, 250.0, 20.0, 100.0);
        let ball = Rect::new(70.0, 250.0, 15.0, 15.0);
        assert!(ball.intersects(&paddle));

        let ball = Rect::new(70.1, 250.0, 15.0, 15.0);
        assert!(!ball.intersects(&paddle));
    }

    #[test]
    fn test_negative_extent_never_overlaps() {
        let a = Rect::new(0.0, 0.0, -10.0, 10.0);
        let b = Rect::new(-5.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }
}
