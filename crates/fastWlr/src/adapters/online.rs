//! Online adapter for weighted regression.
//!
//! ## Purpose
//!
//! This module wraps the `wlr` online processor so that batches of samples
//! can be fed from any [`WlrInput`]. Window rebuilds may optionally use the
//! parallel moment pass, although windows are usually too small to benefit.
//!
//! ## Design notes
//!
//! * **Delegation**: All sample handling is delegated to `wlr`.
//! * **Serial by default**: Parallel rebuilds are opt-in.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::moment_pass_parallel;

// External dependencies
use num_traits::Float;
use std::result::Result;

// Export dependencies from wlr crate
use wlr::internals::adapters::online::{OnlineOutput, OnlineWlr, OnlineWlrBuilder};
use wlr::internals::algorithms::moments::MomentAccumulator;
use wlr::internals::primitives::errors::WlrError;

// Internal dependencies
use crate::input::WlrInput;

// ============================================================================
// Extended Online Builder
// ============================================================================

/// Builder for the online regression processor.
#[derive(Debug, Clone)]
pub struct ParallelOnlineWlrBuilder<T: Float> {
    /// Base builder from the wlr crate
    pub base: OnlineWlrBuilder<T>,
}

impl<T: Float> Default for ParallelOnlineWlrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelOnlineWlrBuilder<T> {
    fn new() -> Self {
        let base = OnlineWlrBuilder::default().parallel(false);
        Self { base }
    }

    /// Set parallel execution mode for window rebuilds.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Bound the number of samples held (sliding window).
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        self.base = self.base.window_capacity(capacity);
        self
    }

    /// Set the number of samples required before a fit is emitted.
    pub fn min_points(mut self, min_points: usize) -> Self {
        self.base = self.base.min_points(min_points);
        self
    }

    /// Build the online processor.
    pub fn build(self) -> Result<ParallelOnlineWlr<T>, WlrError>
    where
        T: MomentAccumulator + Send + Sync + 'static,
    {
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(false) {
                builder = builder.custom_moment_pass(moment_pass_parallel);
            } else {
                builder.custom_moment_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            builder.custom_moment_pass = None;
        }

        Ok(ParallelOnlineWlr {
            processor: builder.build()?,
        })
    }
}

// ============================================================================
// Extended Online Processor
// ============================================================================

/// Online regression processor.
#[derive(Debug, Clone)]
pub struct ParallelOnlineWlr<T: Float> {
    processor: OnlineWlr<T>,
}

impl<T: Float + MomentAccumulator> ParallelOnlineWlr<T> {
    /// Add one sample and return the updated fit, once enough samples are held.
    pub fn add_point(&mut self, x: T, y: T, y_err: T) -> Option<OnlineOutput<T>> {
        self.processor.add_point(x, y, y_err)
    }

    /// Add a batch of samples in order, returning one output per sample.
    pub fn add_points<I1, I2, I3>(
        &mut self,
        x: &I1,
        y: &I2,
        y_err: &I3,
    ) -> Result<Vec<Option<OnlineOutput<T>>>, WlrError>
    where
        I1: WlrInput<T> + ?Sized,
        I2: WlrInput<T> + ?Sized,
        I3: WlrInput<T> + ?Sized,
    {
        self.processor
            .add_points(x.as_wlr_slice()?, y.as_wlr_slice()?, y_err.as_wlr_slice()?)
    }

    /// Number of samples the current fit is based on.
    pub fn window_size(&self) -> usize {
        self.processor.window_size()
    }

    /// Drop all samples and sums.
    pub fn reset(&mut self) {
        self.processor.reset();
    }
}
