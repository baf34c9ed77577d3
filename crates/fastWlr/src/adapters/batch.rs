//! Batch adapter for weighted regression with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for `fastWlr`. It fits a
//! complete in-memory dataset, reducing the sample moments on all CPU cores.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and solving are delegated to `wlr`.
//! * **Parallelism**: The `rayon` moment pass is injected through the base
//!   builder's moment pass hook.
//! * **Inputs**: Accepts any [`WlrInput`], including ndarray arrays.
//!
//! ## Invariants
//!
//! * `x`, `y` and `y_err` must have the same length.
//! * Parallel and serial execution agree up to floating-point rounding.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming data (use streaming adapter).
//! * This adapter does not handle incremental updates (use online adapter).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::moment_pass_parallel;

// External dependencies
use num_traits::Float;
use std::result::Result;

// Export dependencies from wlr crate
use wlr::internals::adapters::batch::BatchWlrBuilder;
use wlr::internals::algorithms::moments::MomentAccumulator;
use wlr::internals::engine::output::RegressionResult;
use wlr::internals::primitives::errors::WlrError;

// Internal dependencies
use crate::input::WlrInput;

// ============================================================================
// Extended Batch Builder
// ============================================================================

/// Builder for the batch regression processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchWlrBuilder<T: Float> {
    /// Base builder from the wlr crate
    pub base: BatchWlrBuilder<T>,
}

impl<T: Float> Default for ParallelBatchWlrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchWlrBuilder<T> {
    /// Create a new batch builder; parallel execution is on by default.
    fn new() -> Self {
        let base = BatchWlrBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchWlr<T>, WlrError> {
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Reuse the validation centralized in the wlr crate
        let _ = self.base.clone().build()?;

        Ok(ParallelBatchWlr { config: self })
    }
}

// ============================================================================
// Extended Batch Processor
// ============================================================================

/// Batch regression processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchWlr<T: Float> {
    config: ParallelBatchWlrBuilder<T>,
}

impl<T: Float + MomentAccumulator + Send + Sync + 'static> ParallelBatchWlr<T> {
    /// Fit the line `y = slope·x + intercept` with errors `y_err` on `y`.
    pub fn fit<I1, I2, I3>(
        &self,
        x: &I1,
        y: &I2,
        y_err: &I3,
    ) -> Result<RegressionResult<T>, WlrError>
    where
        I1: WlrInput<T> + ?Sized,
        I2: WlrInput<T> + ?Sized,
        I3: WlrInput<T> + ?Sized,
    {
        let x_slice = x.as_wlr_slice()?;
        let y_slice = y.as_wlr_slice()?;
        let err_slice = y_err.as_wlr_slice()?;

        let mut builder = self.config.base.clone();

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_moment_pass(moment_pass_parallel);
            } else {
                builder.custom_moment_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            builder.custom_moment_pass = None;
        }

        builder.build()?.fit(x_slice, y_slice, err_slice)
    }
}
