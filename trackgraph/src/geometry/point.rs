use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

use super::tolerance::EPS_LEN;

/// 2D point in surface coordinates. Plain value: every operation returns a new point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn add(self, p: Point) -> Point {
        Point::new(self.x + p.x, self.y + p.y)
    }

    pub fn sub(self, p: Point) -> Point {
        Point::new(self.x - p.x, self.y - p.y)
    }

    pub fn scale(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    /// Scalar product.
    pub fn dot(self, p: Point) -> f64 {
        self.x * p.x + self.y * p.y
    }

    pub fn distance_sq(self, p: Point) -> f64 {
        let dx = self.x - p.x;
        let dy = self.y - p.y;
        dx * dx + dy * dy
    }

    pub fn distance_to(self, p: Point) -> f64 {
        self.distance_sq(p).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Inclusive circle containment. The bounding-box checks only reject early;
    /// the result always equals `distance_to(center) <= radius`.
    pub fn is_in_circle(self, center: Point, radius: f64) -> bool {
        if self.x < center.x - radius { return false; }
        if self.x > center.x + radius { return false; }
        if self.y < center.y - radius { return false; }
        if self.y > center.y + radius { return false; }
        self.distance_sq(center) <= radius * radius
    }

    /// Whether the point lies within `delta` of the segment `p1`-`p2`, i.e. inside
    /// the capsule of half-width `delta` around it. A zero-length segment is a point.
    pub fn is_on_line(self, p1: Point, p2: Point, delta: f64) -> bool {
        let dir = p2.sub(p1);
        let len = dir.dot(dir).sqrt();
        if len <= EPS_LEN {
            return self.distance_to(p1) <= delta;
        }
        if self.sub(p1).dot(dir) < 0.0 {
            return self.distance_to(p1) <= delta;
        }
        if self.sub(p2).dot(p1.sub(p2)) < 0.0 {
            return self.distance_to(p2) <= delta;
        }
        let cross = dir.y * self.x - dir.x * self.y + p2.x * p1.y - p2.y * p1.x;
        cross.abs() / len <= delta
    }

    /// Linear interpolation `self + (to - self) * t`.
    pub fn lerp(self, to: Point, t: f64) -> Point {
        to.sub(self).scale(t).add(self)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::add(self, rhs) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::sub(self, rhs) }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point { self.scale(k) }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Point::new(x, y) }
}
