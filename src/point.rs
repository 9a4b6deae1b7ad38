// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use std::fmt;
use std::ops::{Add, Sub};

use crate::common::FloatExt;
use crate::Vec2;

/// A 2D point.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Determine the midpoint of two points.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Returns a new `Point` with `x` and `y` rounded to `digits` decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use tangent_walk::Point;
    /// let p = Point::new(225.000000001, 448.4313483).round_to(2);
    /// assert_eq!(p, Point::new(225.0, 448.43));
    /// ```
    #[inline]
    pub fn round_to(self, digits: u32) -> Point {
        Point::new(self.x.round_to(digits), self.y.round_to(digits))
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Compare if two points are no further than `accuracy` apart.
    pub fn is_near(pt1: Point, pt2: Point, accuracy: f64) -> bool {
        if pt1.x.is_infinite() || pt1.y.is_infinite() || pt2.x.is_infinite() || pt2.y.is_infinite()
        {
            return pt1 == pt2;
        }
        (pt2 - pt1).hypot() <= accuracy
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Point {
        Point { x: v.0, y: v.1 }
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(v: Point) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vec2) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub<Point> for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        assert_eq!(
            Point::new(0., 0.) + Vec2::new(10., 0.),
            Point::new(10., 0.)
        );
        assert_eq!(
            Point::new(0., 0.) - Point::new(-5., 101.),
            Vec2::new(5., -101.)
        );
        assert_eq!((Point::new(-11., 1.) - Point::new(-7., -2.)).hypot(), 5.);
    }

    #[test]
    fn midpoint() {
        let m = Point::new(50., 250.).midpoint(Point::new(250., 450.));
        assert_eq!(m, Point::new(150., 350.));
    }

    #[test]
    fn rounding_normalizes_negative_zero() {
        let p = Point::new(-0.0001, 12.3456).round_to(2);
        assert_eq!(format!("{p}"), "(0, 12.35)");
    }

    #[test]
    fn display() {
        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{}", p), "(0.12345, 9.87654)");

        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{:.2}", p), "(0.12, 9.88)");
    }

    #[test]
    fn test_point_comparisons() {
        assert!(Point::is_near(Point::new(0., 0.), Point::new(0., 0.), 0.));
        assert!(Point::is_near(
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::INFINITY, f64::INFINITY),
            0.
        ));
        assert!(!Point::is_near(Point::new(0., 0.), Point::new(1., 1.), 0.));
        assert!(!Point::is_near(
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            0.
        ));

        let epsilon = 0.02;
        assert!(Point::is_near(Point::new(50., 250.), Point::new(50.01, 250.01), epsilon));
        assert!(!Point::is_near(Point::new(50., 250.), Point::new(50.03, 250.), epsilon));
    }
}
