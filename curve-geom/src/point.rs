// SPDX-License-Identifier: MIT
//! 2-D point/vector arithmetic for the recursive quad construction.

use std::ops::{Add, Div, Mul, Sub};

/// A 2-D coordinate with `f64` components. Copied freely, never shared.
///
/// By convention in this crate `x` runs along image rows and `y` along
/// columns; the tracer's [`polyline`](crate::tracer::polyline) performs the
/// swap to pixel coordinates at the very end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, s: f64) -> Point {
        Point::new(self.x / s, self.y / s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_arithmetic() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(1.0, 2.0);
        assert_eq!(a + b, Point::new(4.0, 6.0));
        assert_eq!(a - b, Point::new(2.0, 2.0));
        assert_eq!(a * 2.0, Point::new(6.0, 8.0));
        assert_eq!(a / 2.0, Point::new(1.5, 2.0));
    }

    #[test]
    fn dot_product() {
        let e = Point::new(3.0, 0.0);
        assert_eq!(e.dot(e), 9.0);
        assert_eq!(Point::new(1.0, 2.0).dot(Point::new(2.0, -1.0)), 0.0);
    }
}
