// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use std::fmt;

use crate::Point;

/// A rectangle.
///
/// The canvas draws ovals inscribed in one of these.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// The width of the rectangle.
    ///
    /// Note: nothing forbids negative width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    ///
    /// Note: nothing forbids negative height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect {{ ")?;
        fmt::Display::fmt(&Point::new(self.x0, self.y0), f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.width(), f)?;
        write!(f, "×")?;
        fmt::Display::fmt(&self.height(), f)?;
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Rect};

    #[test]
    fn extents() {
        let r = Rect::new(50.0, 50.0, 450.0, 350.0);
        assert_eq!(r.width(), 400.0);
        assert_eq!(r.height(), 300.0);
        assert_eq!(r.center(), Point::new(250.0, 200.0));
    }

    #[test]
    fn display() {
        let r = Rect::new(10., 12.23214, 21.0, 34.5);
        let s = format!("{r:.2}");
        assert_eq!(s.as_str(), "Rect { (10.00, 12.23) 11.00×22.27 }");
    }
}
