//! Online adapter for sample-by-sample weighted regression.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter. Samples
//! are added one at a time and the current fit is returned after each update.
//!
//! ## Design notes
//!
//! * **Cumulative mode** (no window capacity): every sample is folded into the
//!   running sums in O(1); nothing is stored.
//! * **Windowed mode**: a bounded FIFO keeps the most recent samples. Until the
//!   window is full the sums are updated in O(1); once a sample is evicted the
//!   sums are rebuilt from the window, since subtracting NaN-tolerant sums
//!   is not exact.
//! * **Activation**: No fit is reported until `min_points` samples are held.
//!
//! ## Invariants
//!
//! * Window size never exceeds capacity.
//! * Window maintains insertion order (oldest to newest).
//!
//! ## Non-goals
//!
//! * This adapter does not reorder or deduplicate samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::moments::{MomentAccumulator, MomentSums};
use crate::engine::executor::{MomentPassFn, RegressionConfig, RegressionExecutor};
use crate::engine::output::RegressionResult;
use crate::engine::validator::Validator;
use crate::math::weights::inverse_variance_weight;
use crate::primitives::buffer::{OnlineBuffer, SampleWindow};
use crate::primitives::errors::WlrError;

// ============================================================================
// Online Builder
// ============================================================================

/// Builder for the online regression processor.
#[derive(Debug, Clone)]
pub struct OnlineWlrBuilder<T: Float> {
    /// Maximum number of samples retained (None = cumulative)
    pub window_capacity: Option<usize>,

    /// Minimum samples before a fit is reported
    pub min_points: usize,

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

impl<T: Float> Default for OnlineWlrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> OnlineWlrBuilder<T> {
    /// Create a new online builder with default parameters.
    fn new() -> Self {
        Self {
            window_capacity: None,
            min_points: 2,
            deferred_error: None,
            custom_moment_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Online-Specific Setters
    // ========================================================================

    /// Keep only the `capacity` most recent samples.
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        self.window_capacity = Some(capacity);
        self
    }

    /// Set the number of samples required before a fit is reported.
    pub fn min_points(mut self, min: usize) -> Self {
        self.min_points = min;
        self
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

    /// Build the online processor.
    pub fn build(self) -> Result<OnlineWlr<T>, WlrError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(cap) = self.window_capacity {
            Validator::validate_window_capacity(cap, 2)?;
        }
        Validator::validate_min_points(self.min_points, self.window_capacity)?;

        let executor = RegressionExecutor::from_config(&RegressionConfig {
            custom_moment_pass: self.custom_moment_pass,
        })
        .with_capacity(self.window_capacity.unwrap_or(0));
        let window = self.window_capacity.map(SampleWindow::new);
        let buffer = OnlineBuffer::with_capacity(self.window_capacity.unwrap_or(0));

        Ok(OnlineWlr {
            config: self,
            executor,
            window,
            buffer,
            sums: MomentSums::zero(),
        })
    }
}

// ============================================================================
// Online Processor
// ============================================================================

/// Output of a single online update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnlineOutput<T> {
    /// Fit over the samples currently held.
    pub result: RegressionResult<T>,

    /// Number of samples the fit is based on.
    pub points: usize,
}

/// Online weighted regression processor.
#[derive(Debug, Clone)]
pub struct OnlineWlr<T: Float> {
    config: OnlineWlrBuilder<T>,
    executor: RegressionExecutor<T>,
    window: Option<SampleWindow<T>>,
    buffer: OnlineBuffer<T>,
    sums: MomentSums<T>,
}

impl<T: Float + MomentAccumulator> OnlineWlr<T> {
    /// Add one sample and return the updated fit, once enough samples are held.
    pub fn add_point(&mut self, x: T, y: T, y_err: T) -> Option<OnlineOutput<T>> {
        let evicted = match self.window.as_mut() {
            Some(window) => window.push(x, y, y_err),
            None => None,
        };

        match (&self.window, evicted) {
            (Some(window), Some(_)) => {
                window.copy_into(&mut self.buffer);
                self.sums = self.executor.accumulate(
                    &self.buffer.scratch_x,
                    &self.buffer.scratch_y,
                    &self.buffer.scratch_y_err,
                );
                log::trace!(
                    "window of {} full; sums rebuilt over {} sample(s)",
                    window.capacity(),
                    window.len()
                );
            }
            _ => self.sums.push(x, y, inverse_variance_weight(y_err)),
        }

        if self.sums.points < self.config.min_points {
            return None;
        }

        Some(OnlineOutput {
            result: RegressionExecutor::solve_sums(&self.sums).result,
            points: self.sums.points,
        })
    }

    /// Add a batch of samples in order, returning one output per sample.
    pub fn add_points(
        &mut self,
        x: &[T],
        y: &[T],
        y_err: &[T],
    ) -> Result<Vec<Option<OnlineOutput<T>>>, WlrError> {
        Validator::validate_inputs(x, y, y_err)?;

        Ok(x.iter()
            .zip(y)
            .zip(y_err)
            .map(|((&xi, &yi), &ei)| self.add_point(xi, yi, ei))
            .collect())
    }

    /// Number of samples the current sums are based on.
    pub fn window_size(&self) -> usize {
        self.sums.points
    }

    /// Drop all samples and sums.
    pub fn reset(&mut self) {
        if let Some(window) = self.window.as_mut().filter(|w| !w.is_empty()) {
            window.clear();
        }
        self.buffer.clear();
        self.sums = MomentSums::zero();
    }
}
