//! Batch adapter for weighted regression.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: a complete sample set
//! held in memory is validated and regressed in a single call.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire sample set in one pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built processor can fit any number of sample sets.
//!
//! ## Invariants
//!
//! * `x`, `y` and `y_err` must have the same length.
//! * Output is a pure function of the inputs.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming data (use streaming adapter).
//! * This adapter does not handle incremental updates (use online adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::moments::MomentAccumulator;
use crate::engine::executor::{MomentPassFn, RegressionConfig, RegressionExecutor};
use crate::engine::output::RegressionResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::WlrError;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch regression processor.
#[derive(Debug, Clone)]
pub struct BatchWlrBuilder<T: Float> {
    /// Deferred error from adapter conversion
    pub deferred_error: Option<WlrError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom moment pass function.
    #[doc(hidden)]
    pub custom_moment_pass: Option<MomentPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchWlrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchWlrBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            deferred_error: None,
            custom_moment_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom moment pass function.
    #[doc(hidden)]
    pub fn custom_moment_pass(mut self, pass: MomentPassFn<T>) -> Self {
        self.custom_moment_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchWlr<T>, WlrError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchWlr { config: self })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Batch weighted regression processor.
#[derive(Debug, Clone)]
pub struct BatchWlr<T: Float> {
    config: BatchWlrBuilder<T>,
}

impl<T: Float + MomentAccumulator> BatchWlr<T> {
    /// Fit the line `y = slope·x + intercept` with errors `y_err` on `y`.
    pub fn fit(&self, x: &[T], y: &[T], y_err: &[T]) -> Result<RegressionResult<T>, WlrError> {
        Validator::validate_inputs(x, y, y_err)?;

        let config = RegressionConfig {
            custom_moment_pass: self.config.custom_moment_pass,
        };

        let output = RegressionExecutor::run_with_config(x, y, y_err, config);
        log::trace!("batch fit over {} sample(s)", output.points);

        Ok(output.result)
    }
}
