//! Output record for weighted regression.
//!
//! ## Purpose
//!
//! This module defines `RegressionResult`, the immutable five-field record
//! returned by every regression entry point, together with small queries that
//! make the sentinel encoding of degenerate fits easy to check.
//!
//! ## Design notes
//!
//! * **Always populated**: Every field holds a value; degeneracy is encoded as
//!   `+inf` (slope, slope error) or `NaN` (intercept, intercept error, covariance).
//! * **Value semantics**: The record is `Copy` and has no identity beyond its values.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * On the vertical-fit branch `slope == +inf` and `intercept` is NaN. Outside
//!   it, overflow in the weighted products can still yield non-finite values.
//! * If `slope_err` is finite, so are `intercept_err` and `slope_intercept_covar`.
//!
//! ## Non-goals
//!
//! * This module does not perform the regression; it only stores and reads results.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Best-fit line `y = slope·x + intercept` and its uncertainties.
///
/// Degenerate fits are signalled through the fields themselves:
///
/// * no positive total weight, or no spread in x: `slope_err == +inf` and
///   `intercept_err`, `slope_intercept_covar` are NaN;
/// * no spread in x: additionally `slope == +inf` and `intercept` is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Standard error of the slope.
    pub slope_err: T,

    /// Standard error of the intercept.
    pub intercept_err: T,

    /// Covariance between slope and intercept.
    pub slope_intercept_covar: T,
}

impl<T: Float> RegressionResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Whether the fit is a vertical line (x has no weighted spread).
    pub fn is_vertical(&self) -> bool {
        self.slope == T::infinity() && self.intercept.is_nan()
    }

    /// Whether all three uncertainty fields are finite.
    pub fn has_finite_errors(&self) -> bool {
        self.slope_err.is_finite()
            && self.intercept_err.is_finite()
            && self.slope_intercept_covar.is_finite()
    }

    /// Whether any field carries a degeneracy sentinel.
    pub fn is_degenerate(&self) -> bool {
        self.is_vertical() || !self.has_finite_errors()
    }

    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Standard error of the fitted line at `x`, including the slope/intercept covariance.
    pub fn prediction_err(&self, x: T) -> T {
        let two = T::one() + T::one();
        (self.slope_err * self.slope_err * x * x
            + two * x * self.slope_intercept_covar
            + self.intercept_err * self.intercept_err)
            .sqrt()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for RegressionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        if self.is_vertical() {
            writeln!(f, "  Fit: vertical (no spread in x)")?;
        } else if !self.has_finite_errors() {
            writeln!(f, "  Fit: uncertainties undefined")?;
        }
        writeln!(f)?;

        writeln!(f, "{:>10} {:>16} {:>16}", "Parameter", "Value", "Std_Err")?;
        writeln!(f, "{:-<44}", "")?;
        writeln!(
            f,
            "{:>10} {:>16.8} {:>16.8}",
            "slope", self.slope, self.slope_err
        )?;
        writeln!(
            f,
            "{:>10} {:>16.8} {:>16.8}",
            "intercept", self.intercept, self.intercept_err
        )?;
        writeln!(f)?;
        write!(f, "  Covariance(slope, intercept): {}", self.slope_intercept_covar)
    }
}
