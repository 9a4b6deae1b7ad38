// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape, and the concentric pair a walk runs on.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{GeometryError, Point, Rect, Vec2};

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// The point on the circle at `angle` radians from the positive x axis.
    #[inline]
    pub fn point_at_angle(&self, angle: f64) -> Point {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// Signed distance from `pt` to the circle's boundary; negative inside.
    #[inline]
    pub fn boundary_distance(&self, pt: Point) -> f64 {
        (pt - self.center).hypot() - self.radius.abs()
    }

    /// The smallest rectangle enclosing the circle.
    ///
    /// This is the box an oval primitive is drawn from.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        let (x, y) = self.center.into();
        Rect::new(x - r, y - r, x + r, y + r)
    }
}

/// Radius of the circle inscribed in a regular `sides`-gon whose corners
/// lie on a circle of radius `big_radius`.
///
/// This is `R·sin(π/2·(n−2)/n)`, which equals the apothem `R·cos(π/n)`.
pub fn inscribed_radius(big_radius: f64, sides: u32) -> f64 {
    let n = f64::from(sides);
    big_radius * (FRAC_PI_2 * (n - 2.0) / n).sin()
}

/// Two concentric circles: the big one the walk moves on, and the small
/// one every drawn chord is tangent to.
///
/// Construction guarantees `0 < small_radius < big_radius` and that every
/// value is finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CirclePair {
    center: Point,
    big_radius: f64,
    small_radius: f64,
}

impl CirclePair {
    /// Validate and build a circle pair.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] unless both radii are finite and
    /// `0 < small_radius < big_radius`.
    pub fn new(
        center: impl Into<Point>,
        big_radius: f64,
        small_radius: f64,
    ) -> Result<Self, GeometryError> {
        let center = center.into();
        if !center.is_finite() || !big_radius.is_finite() || !small_radius.is_finite() {
            return Err(GeometryError::NotFinite);
        }
        if big_radius <= 0.0 {
            return Err(GeometryError::NonPositiveBigRadius(big_radius));
        }
        if small_radius <= 0.0 {
            return Err(GeometryError::NonPositiveSmallRadius(small_radius));
        }
        if small_radius >= big_radius {
            return Err(GeometryError::SmallNotInside {
                small: small_radius,
                big: big_radius,
            });
        }
        Ok(CirclePair {
            center,
            big_radius,
            small_radius,
        })
    }

    /// Build a pair whose small circle is inscribed in a regular polygon of
    /// `sides` sides with its corners on the big circle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewSides`] for fewer than three sides, and
    /// otherwise the errors of [`CirclePair::new`].
    pub fn from_sides(
        center: impl Into<Point>,
        big_radius: f64,
        sides: u32,
    ) -> Result<Self, GeometryError> {
        if sides < 3 {
            return Err(GeometryError::TooFewSides(sides));
        }
        CirclePair::new(center, big_radius, inscribed_radius(big_radius, sides))
    }

    /// The shared center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the big circle.
    #[inline]
    pub fn big_radius(&self) -> f64 {
        self.big_radius
    }

    /// Radius of the small circle.
    #[inline]
    pub fn small_radius(&self) -> f64 {
        self.small_radius
    }

    /// The circle points are walked on.
    #[inline]
    pub fn big(&self) -> Circle {
        Circle::new(self.center, self.big_radius)
    }

    /// The circle every chord touches.
    #[inline]
    pub fn small(&self) -> Circle {
        Circle::new(self.center, self.small_radius)
    }

    /// The leftmost point of the big circle, `(h − R, k)`.
    #[inline]
    pub fn start_point(&self) -> Point {
        Point::new(self.center.x - self.big_radius, self.center.y)
    }

    /// The central angle, in radians, of every tangent chord.
    ///
    /// A chord tangent to the small circle at its midpoint subtends
    /// `acos(2(r/R)² − 1)` at the center.
    pub fn step_angle(&self) -> f64 {
        let ratio = self.small_radius / self.big_radius;
        (2.0 * ratio * ratio - 1.0).clamp(-1.0, 1.0).acos()
    }

    /// Whether a full turn is a whole number of steps, so that a walk comes
    /// back to where it started.
    pub fn closes_exactly(&self) -> bool {
        let turns = TAU / self.step_angle();
        (turns - turns.round()).abs() < 1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn bounding_box() {
        let c = Circle::new((250.0, 250.0), 200.0);
        assert_eq!(c.bounding_box(), Rect::new(50.0, 50.0, 450.0, 450.0));
        let neg = Circle::new((250.0, 250.0), -150.0);
        assert_eq!(neg.bounding_box(), Rect::new(100.0, 100.0, 400.0, 400.0));
    }

    #[test]
    fn point_at_angle_is_on_boundary() {
        let c = Circle::new((250.0, 250.0), 200.0);
        for i in 0..16 {
            let p = c.point_at_angle(f64::from(i) * PI / 8.0);
            assert_approx_eq(c.boundary_distance(p), 0.0);
        }
        assert_approx_eq(c.boundary_distance(c.center), -200.0);
    }

    #[test]
    fn inscribed_radius_is_apothem() {
        for n in 3..12 {
            assert_approx_eq(inscribed_radius(200.0, n), 200.0 * (PI / f64::from(n)).cos());
        }
        assert_approx_eq(inscribed_radius(200.0, 3), 100.0);
    }

    #[test]
    fn pair_validation() {
        assert!(CirclePair::new((250.0, 250.0), 200.0, 150.0).is_ok());
        assert_eq!(
            CirclePair::new((250.0, 250.0), 200.0, 200.0),
            Err(GeometryError::SmallNotInside {
                small: 200.0,
                big: 200.0
            })
        );
        assert_eq!(
            CirclePair::new((250.0, 250.0), 200.0, 0.0),
            Err(GeometryError::NonPositiveSmallRadius(0.0))
        );
        assert_eq!(
            CirclePair::new((250.0, 250.0), -1.0, -2.0),
            Err(GeometryError::NonPositiveBigRadius(-1.0))
        );
        assert_eq!(
            CirclePair::new((f64::NAN, 250.0), 200.0, 150.0),
            Err(GeometryError::NotFinite)
        );
        assert_eq!(
            CirclePair::from_sides((250.0, 250.0), 200.0, 2),
            Err(GeometryError::TooFewSides(2))
        );
    }

    #[test]
    fn pair_accessors() {
        let pair = CirclePair::new((250.0, 250.0), 200.0, 150.0).unwrap();
        assert_eq!(pair.start_point(), Point::new(50.0, 250.0));
        assert_eq!(pair.big(), Circle::new((250.0, 250.0), 200.0));
        assert_eq!(pair.small(), Circle::new((250.0, 250.0), 150.0));
        assert_eq!(pair.center(), Point::new(250.0, 250.0));
    }

    #[test]
    fn step_angle_and_closure() {
        let pair = CirclePair::new((250.0, 250.0), 200.0, 150.0).unwrap();
        assert_approx_eq(pair.step_angle(), 0.125f64.acos());
        assert!(!pair.closes_exactly());

        for n in 3..10 {
            let pair = CirclePair::from_sides((0.0, 0.0), 100.0, n).unwrap();
            assert_approx_eq(pair.step_angle(), 2.0 * PI / f64::from(n));
            assert!(pair.closes_exactly(), "{n} sides should close");
        }
    }
}
