// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Startup parameters for a walk.

use std::time::Duration;

use crate::{CirclePair, GeometryError, Point, Rect, TangentSolver, TangentWalk};

/// How the small circle's radius is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SmallCircle {
    /// A radius given directly.
    Radius(f64),
    /// The circle inscribed in a regular polygon with this many sides.
    Sides(u32),
}

/// Everything needed to set up and pace a walk.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// Radius of the circle the walk moves on.
    pub big_radius: f64,
    /// The circle every chord is tangent to.
    pub small: SmallCircle,
    /// Canvas width; the circles are centered horizontally.
    pub width: f64,
    /// Canvas height; the circles are centered vertically.
    pub height: f64,
    /// Pause between ticks, in milliseconds.
    pub delay_ms: u64,
    /// Decimal digits every walked point is rounded to.
    pub precision: u32,
    /// Segment limit; `None` lets the walk run until it closes.
    pub max_ticks: Option<usize>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            big_radius: 200.0,
            small: SmallCircle::Radius(150.0),
            width: 500.0,
            height: 500.0,
            delay_ms: 50,
            precision: TangentSolver::DEFAULT_PRECISION,
            max_ticks: Some(TangentWalk::DEFAULT_MAX_TICKS),
        }
    }
}

impl WalkConfig {
    /// The shared center of both circles.
    pub fn center(&self) -> Point {
        Point::new(0.5 * self.width, 0.5 * self.height)
    }

    /// The pause between ticks.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Validate the geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when the radii or side count don't
    /// describe a small circle strictly inside the big one.
    pub fn circle_pair(&self) -> Result<CirclePair, GeometryError> {
        let pair = match self.small {
            SmallCircle::Radius(r) => CirclePair::new(self.center(), self.big_radius, r)?,
            SmallCircle::Sides(n) => CirclePair::from_sides(self.center(), self.big_radius, n)?,
        };
        let frame = Rect::new(0.0, 0.0, self.width, self.height);
        let bounds = pair.big().bounding_box();
        if bounds.x0 < frame.x0 || bounds.y0 < frame.y0 || bounds.x1 > frame.x1 || bounds.y1 > frame.y1
        {
            log::warn!("big circle {bounds} does not fit the {frame} canvas");
        }
        if !pair.closes_exactly() {
            log::warn!(
                "step angle {:.4} rad does not divide a full turn; the walk may not close",
                pair.step_angle()
            );
        }
        Ok(pair)
    }

    /// Validate the configuration and set up a walk.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Precision`] when `precision` exceeds
    /// [`TangentSolver::MAX_PRECISION`], and otherwise the errors of
    /// [`WalkConfig::circle_pair`].
    pub fn build(&self) -> Result<TangentWalk, GeometryError> {
        if self.precision > TangentSolver::MAX_PRECISION {
            return Err(GeometryError::Precision(self.precision));
        }
        let pair = self.circle_pair()?;
        Ok(TangentWalk::new(pair, self.precision)
            .with_max_ticks(self.max_ticks)
            .with_delay(self.delay()))
    }
}
