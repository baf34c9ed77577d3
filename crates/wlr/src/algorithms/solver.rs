//! Closed-form weighted least-squares solver.
//!
//! ## Purpose
//!
//! This module turns weighted moments into slope, intercept, their standard
//! errors and their covariance for the model `y = slope·x + intercept` with
//! inverse-variance weights.
//!
//! ## Design notes
//!
//! * **Sentinels, not errors**: Degenerate inputs never fail. They are reported
//!   through `+inf`/`NaN` in fixed fields so that they can propagate through
//!   downstream aggregation.
//! * **Total decision table**:
//!
//! | condition     | slope  | intercept | slope_err | intercept_err | covar |
//! |---------------|--------|-----------|-----------|---------------|-------|
//! | `W <= 0`      | (next) | (next)    | +inf      | NaN           | NaN   |
//! | `dx2m <= 0`   | +inf   | NaN       | +inf      | NaN           | NaN   |
//! | otherwise     | finite | finite    | finite    | finite        | finite|
//!
//! With `W <= 0` every moment is zero, so `dx2m` is zero as well and the
//! vertical-fit row applies to slope and intercept too.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::moments::WeightedMoments;
use crate::engine::output::RegressionResult;

/// Solve for the line and its uncertainties from weighted moments.
pub fn solve<T: Float>(m: &WeightedMoments<T>) -> RegressionResult<T> {
    let w = m.total_weight;
    let dx2m = m.x_variance();
    let dxym = m.xy_covariance();

    // A NaN variance is treated like a vanishing one
    let (slope, intercept) = if !(dx2m > T::zero()) {
        log::debug!("x has no positive weighted variance; reporting a vertical fit");
        (T::infinity(), T::nan())
    } else {
        let slope = dxym / dx2m;
        (slope, m.y_mean - m.x_mean * slope)
    };

    let (slope_err, intercept_err, slope_intercept_covar) = if dx2m <= T::zero() || w == T::zero()
    {
        (T::infinity(), T::nan(), T::nan())
    } else {
        let w_dx2m = w * dx2m;
        (
            (T::one() / w_dx2m).sqrt(),
            ((T::one() + m.x_mean * m.x_mean / dx2m) / w).sqrt(),
            -m.x_mean / w_dx2m,
        )
    };

    RegressionResult {
        slope,
        intercept,
        slope_err,
        intercept_err,
        slope_intercept_covar,
    }
}
