// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::Point;

/// A single line segment, drawn from `p0` to `p1`.
///
/// Each step of a [`TangentWalk`](crate::TangentWalk) produces one of these.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The midpoint of the line.
    ///
    /// For a chord of a walk this is where it touches the small circle.
    #[inline]
    pub fn midpoint(self) -> Point {
        self.p0.midpoint(self.p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint() {
        let l = Line::new((50.0, 250.0), (250.0, 450.0));
        assert_eq!(l.midpoint(), Point::new(150.0, 350.0));
        assert_eq!(l.p0, Point::new(50.0, 250.0));
    }
}
