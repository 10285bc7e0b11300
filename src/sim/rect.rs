//! Axis-aligned rectangle geometry
//!
//! The playfield is flat, so every collision shape reduces to an AABB:
//! the player's body and the two slabs of each gate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Shrink every side inward by `amount`. Degenerate results (a rectangle
    /// smaller than 2 * amount) collapse to a point at the center and can
    /// never overlap anything.
    pub fn shrink(&self, amount: f32) -> Self {
        let center = (self.min + self.max) / 2.0;
        let min = (self.min + Vec2::splat(amount)).min(center);
        let max = (self.max - Vec2::splat(amount)).max(center);
        Self { min, max }
    }

    /// Strict separating-axis overlap test: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::from_origin_size(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_origin_size(5.0, 5.0, 10.0, 10.0);
        let c = Rect::from_origin_size(20.0, 20.0, 5.0, 5.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        // Same vertical span, disjoint horizontally
        let a = Rect::from_origin_size(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_origin_size(11.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_exactly_touching_edges_overlap() {
        // The raw test counts shared edges; callers shrink by the collision
        // buffer first when they want grazes excluded.
        let a = Rect::from_origin_size(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_origin_size(10.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(!a.shrink(2.0).overlaps(&b.shrink(2.0)));
    }

    #[test]
    fn test_shrink() {
        let r = Rect::from_origin_size(0.0, 0.0, 10.0, 20.0).shrink(2.0);
        assert_eq!(r.min, Vec2::new(2.0, 2.0));
        assert_eq!(r.max, Vec2::new(8.0, 18.0));
    }

    #[test]
    fn test_shrink_degenerate_collapses() {
        let r = Rect::from_origin_size(0.0, 0.0, 3.0, 3.0).shrink(2.0);
        assert_eq!(r.min, r.max);
        assert_eq!(r.width(), 0.0);
    }
}
