//! Collision detection between the boat and static obstacles
//!
//! Obstacles are axis-aligned rectangles (forest banks, rocks); the boat is
//! a circle. The test is the standard closest-point circle-vs-AABB check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned obstacle rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Closest point on (or in) the rectangle to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }
}

/// Check whether a circle overlaps an obstacle rectangle.
#[inline]
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Test the boat circle against an obstacle list.
///
/// Returns the index of the first overlapping rectangle in insertion order.
/// First hit wins; simultaneous overlaps are not distinguished.
pub fn first_hit(center: Vec2, radius: f32, obstacles: &[Rect]) -> Option<usize> {
    obstacles
        .iter()
        .position(|rect| circle_rect_collision(center, radius, rect))
}
