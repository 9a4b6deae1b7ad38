// Copyright 2026 the Tangent Walk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use arrayvec::ArrayVec;

/// Adds convenience methods to `f64`.
pub trait FloatExt {
    /// Rounds to `digits` decimal places, half away from zero.
    ///
    /// Negative zero is normalized to positive zero so that rounded values
    /// print and compare consistently.
    ///
    /// # Examples
    ///
    /// ```
    /// use tangent_walk::common::FloatExt;
    ///
    /// assert_eq!(448.431348_f64.round_to(2), 448.43);
    /// assert_eq!(51.568652_f64.round_to(2), 51.57);
    /// assert_eq!((-0.001_f64).round_to(2).to_string(), "0");
    /// ```
    fn round_to(self, digits: u32) -> Self;
}

impl FloatExt for f64 {
    #[inline]
    fn round_to(self, digits: u32) -> f64 {
        let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
        let scaled = self * scale;
        if !scaled.is_finite() {
            // Too many digits to represent; there is nothing left to round.
            return self + 0.0;
        }
        // -0.0 + 0.0 == +0.0
        scaled.round() / scale + 0.0
    }
}

/// The tolerance used to decide whether two points rounded to `digits`
/// decimals are the same point.
///
/// This is two units in the last retained digit: a rounded input feeds the
/// next solve, so a point reached twice along different paths may disagree
/// by a little more than one unit.
#[inline]
pub fn match_tolerance(digits: u32) -> f64 {
    2.0 * 10f64.powi(-i32::try_from(digits).unwrap_or(i32::MAX))
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0.
///
/// This function tries to be quite numerically robust. If the equation
/// is nearly linear, it will return the root ignoring the quadratic term;
/// the other root might be out of representable range. In the degenerate
/// case where all coefficients are zero, so that all values of x satisfy
/// the equation, a single `0.0` is returned.
///
/// Roots are returned in ascending order.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        } else if c0 == 0.0 && c1 == 0.0 {
            // Degenerate case
            result.push(0.0);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    let root1 = if !arg.is_finite() {
        // Likely, calculation of sc1 * sc1 overflowed. Find one root
        // using sc1 x + x² = 0, other root as sc0 / root1.
        -sc1
    } else {
        if arg < 0.0 {
            return result;
        } else if arg == 0.0 {
            result.push(-0.5 * sc1);
            return result;
        }
        // See https://math.stackexchange.com/questions/866331
        -0.5 * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() {
        // Sort to make results deterministic.
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}
