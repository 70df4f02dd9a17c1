//! Axis-aligned rectangle geometry
//!
//! Screen space: top-left origin, y grows downward. Every entity in the
//! game occupies one of these.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (position is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
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

    /// Bottom edge (the "foot" of a body)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict horizontal overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Strict AABB overlap (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.top() < other.bottom() && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(-5.0, -5.0, 20.0, 20.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Horizontal overlap alone is not enough
        assert!(a.overlaps_x(&Rect::new(5.0, 50.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(5.0, 50.0, 10.0, 10.0)));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(r.right(), 6.0);
        assert_eq!(r.bottom(), 8.0);
        assert_eq!(r.left(), 2.0);
        assert_eq!(r.top(), 3.0);
    }
}
