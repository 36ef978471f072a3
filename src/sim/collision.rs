//! Axis-aligned bounding boxes
//!
//! Every entity is a rectangle anchored at its top-left corner. Overlap uses
//! strict inequalities on all four sides, so boxes that merely touch do not
//! collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box (top-left corner + size, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Anything with a collision box
pub trait Body {
    fn aabb(&self) -> Aabb;

    fn collides_with(&self, other: &impl Body) -> bool {
        self.aabb().overlaps(&other.aabb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&boxed(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&boxed(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&boxed(-10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&boxed(0.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_center_and_edges() {
        let a = boxed(10.0, 20.0, 30.0, 50.0);
        assert_eq!(a.right(), 40.0);
        assert_eq!(a.bottom(), 70.0);
        assert_eq!(a.center(), Vec2::new(25.0, 45.0));
    }
}
