//! Mathematical types shared between game logic and the UI host.
//!
//! These are the canonical representations for box positions in pixel space.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D point - box positions, drop targets, touch coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Point {
    /// Creates a new Point
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f32; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Overlap test for two equal-side squares anchored at their top-left corner.
///
/// The comparison is on open intervals: squares that merely touch along an
/// edge or at a corner do not overlap. This is what lets a falling box come
/// to rest flush against its neighbor without registering a collision.
#[must_use]
pub fn squares_overlap(a: Point, b: Point, side: f32) -> bool {
    a.x < b.x + side && b.x < a.x + side && a.y < b.y + side && b.y < a.y + side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 5.0);

        let sum = a + b;
        assert_eq!(sum.x, 5.0);
        assert_eq!(sum.y, 7.0);

        let diff = b - a;
        assert_eq!(diff.x, 3.0);
        assert_eq!(diff.y, 3.0);

        let scaled = a * 2.0;
        assert_eq!(scaled.x, 2.0);
        assert_eq!(scaled.y, 4.0);
    }

    #[test]
    fn test_point_bytemuck() {
        let p = Point::new(1.0, 2.0);
        let bytes: &[u8] = bytemuck::bytes_of(&p);
        assert_eq!(bytes.len(), 8); // 2 * 4 bytes
    }

    #[test]
    fn test_squares_overlap() {
        let a = Point::new(0.0, 0.0);
        assert!(squares_overlap(a, Point::new(1.0, 1.0), 2.0));
        assert!(squares_overlap(Point::new(1.0, 1.0), a, 2.0));
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let a = Point::new(0.0, 0.0);
        // Flush along both axes: resting exactly side-by-side.
        assert!(!squares_overlap(a, Point::new(2.0, 2.0), 2.0));
        assert!(!squares_overlap(a, Point::new(2.0, 0.0), 2.0));
        assert!(!squares_overlap(a, Point::new(0.0, 2.0), 2.0));
    }

    #[test]
    fn test_separated_squares_do_not_overlap() {
        let a = Point::new(0.0, 0.0);
        assert!(!squares_overlap(a, Point::new(5.0, 0.0), 2.0));
        assert!(!squares_overlap(a, Point::new(0.0, -5.0), 2.0));
    }
}
