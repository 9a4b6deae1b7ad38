// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while setting up circle geometry.

use std::fmt;

/// An error which can be returned when constructing a [`CirclePair`] or
/// building a walk from a [`WalkConfig`].
///
/// [`CirclePair`]: crate::CirclePair
/// [`WalkConfig`]: crate::WalkConfig
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// The center or one of the radii is NaN or infinite.
    NotFinite,
    /// The big circle's radius is zero or negative.
    NonPositiveBigRadius(f64),
    /// The small circle's radius is zero or negative.
    NonPositiveSmallRadius(f64),
    /// The small circle does not fit strictly inside the big one.
    SmallNotInside {
        /// The small circle's radius.
        small: f64,
        /// The big circle's radius.
        big: f64,
    },
    /// A polygon needs at least three sides.
    TooFewSides(u32),
    /// Points can't be rounded to more decimal digits than an `f64` holds.
    Precision(u32),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NotFinite => write!(f, "circle geometry must be finite"),
            GeometryError::NonPositiveBigRadius(r) => {
                write!(f, "big radius must be positive, got {r}")
            }
            GeometryError::NonPositiveSmallRadius(r) => {
                write!(f, "small radius must be positive, got {r}")
            }
            GeometryError::SmallNotInside { small, big } => write!(
                f,
                "small radius {small} must be less than big radius {big}"
            ),
            GeometryError::TooFewSides(n) => {
                write!(f, "a polygon needs at least 3 sides, got {n}")
            }
            GeometryError::Precision(digits) => write!(
                f,
                "precision must be at most {} digits, got {digits}",
                crate::TangentSolver::MAX_PRECISION
            ),
        }
    }
}

impl std::error::Error for GeometryError {}
