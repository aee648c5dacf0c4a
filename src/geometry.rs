//! Points and rectangles in layout coordinates
//!
//! The y-axis points up: a line's ascender lies above its baseline.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self { width: 1.0, height: 1.0 }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Rect {
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self { left, bottom, right, top }
    }

    /// Rectangle with its bottom-left corner at the origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.bottom && point.y <= self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_and_contains() {
        let a = Rect::new(0.0, -2.0, 10.0, 8.0);
        let b = Rect::new(5.0, -4.0, 20.0, 6.0);
        let u = a.union(&b);

        assert_eq!(u, Rect::new(0.0, -4.0, 20.0, 8.0));
        assert_eq!(u.width(), 20.0);
        assert_eq!(u.height(), 12.0);
        assert_eq!(a.center_x(), 5.0);
        assert!(u.contains(Point::new(15.0, 7.0)));
        assert!(!a.contains(Point::new(15.0, 7.0)));
    }
}
