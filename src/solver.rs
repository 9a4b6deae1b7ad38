// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finding the next point of a tangent walk.
//!
//! Given a point `P` on the big circle, we look for the points `Q` on the
//! same circle such that the chord `PQ` touches the small circle at its
//! midpoint. Writing `u = P − C` and `v = Q − C`, the midpoint constraint
//! `|u + v|² = 4r²` together with `|v|² = R²` gives
//!
//! ```text
//! u·v = (4r² − |u|² − R²) / 2 = d
//! ```
//!
//! so `v = (d/|u|)·û + t·û⊥` where `û⊥` is `û` turned by 90°, and `t` solves
//! `t² + (d/|u|)² − R² = 0`.

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::{CirclePair, Point};

/// Up to two candidate next points, in ascending order of `t`.
pub type Candidates = ArrayVec<Point, 2>;

/// Computes the candidate next points of a walk for a fixed [`CirclePair`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentSolver {
    pair: CirclePair,
    precision: u32,
}

impl TangentSolver {
    /// Decimal digits candidates are rounded to unless told otherwise.
    pub const DEFAULT_PRECISION: u32 = 2;

    /// The most decimal digits an `f64` reliably carries.
    pub const MAX_PRECISION: u32 = f64::DIGITS;

    /// Create a solver rounding its results to `precision` decimals.
    ///
    /// Precision is capped at [`TangentSolver::MAX_PRECISION`].
    pub fn new(pair: CirclePair, precision: u32) -> Self {
        TangentSolver {
            pair,
            precision: precision.min(Self::MAX_PRECISION),
        }
    }

    /// The geometry this solver works on.
    #[inline]
    pub fn pair(&self) -> &CirclePair {
        &self.pair
    }

    /// Number of decimal digits results are rounded to.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Candidate next points from `p`, rounded to the solver's precision.
    ///
    /// The result is empty when no chord through `p` can touch the small
    /// circle at its midpoint, which for valid geometry only happens when `p`
    /// is far off the big circle.
    ///
    /// # Examples
    ///
    /// ```
    /// use tangent_walk::{CirclePair, Point, TangentSolver};
    ///
    /// let pair = CirclePair::new((250.0, 250.0), 200.0, 150.0).unwrap();
    /// let solver = TangentSolver::new(pair, 2);
    /// let next = solver.solve(pair.start_point());
    /// assert_eq!(next.as_slice(), &[Point::new(225.0, 448.43), Point::new(225.0, 51.57)]);
    /// ```
    pub fn solve(&self, p: Point) -> Candidates {
        self.solve_exact(p)
            .into_iter()
            .map(|q| q.round_to(self.precision))
            .collect()
    }

    /// Candidate next points from `p`, without rounding.
    pub fn solve_exact(&self, p: Point) -> Candidates {
        let mut result = Candidates::new();
        let center = self.pair.center();
        let big = self.pair.big_radius();
        let small = self.pair.small_radius();

        let u = p - center;
        let rho2 = u.hypot2();
        let rho = rho2.sqrt();
        // Also rejects NaN.
        if !(rho > 0.0 && rho.is_finite()) {
            return result;
        }
        let along = 0.5 * (4.0 * small * small - rho2 - big * big) / rho;
        let unit = u / rho;
        let across = unit.turn_90();
        for t in solve_quadratic(along * along - big * big, 0.0, 1.0) {
            result.push(center + unit * along + across * t);
        }
        result
    }
}

/// Candidate next points from `p` on `pair`, rounded to `precision` decimals.
///
/// Shorthand for `TangentSolver::new(*pair, precision).solve(p)`.
pub fn tangent_candidates(p: Point, pair: &CirclePair, precision: u32) -> Candidates {
    TangentSolver::new(*pair, precision).solve(p)
}
