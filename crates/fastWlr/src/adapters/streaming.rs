//! Streaming adapter for weighted regression with parallel execution.
//!
//! ## Purpose
//!
//! This module wraps the `wlr` streaming processor so that each chunk is
//! reduced on all CPU cores. Partial moment sums still merge across chunks.
//!
//! ## Design notes
//!
//! * **Delegation**: Chunking, merging and solving are delegated to `wlr`.
//! * **Parallelism**: Large chunks benefit most; chunks below the parallel
//!   threshold fall back to the serial pass automatically.
//!
//! ## Invariants
//!
//! * Splitting a dataset into chunks does not change the final fit beyond
//!   floating-point rounding.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::moment_pass_parallel;

// External dependencies
use num_traits::Float;
use std::result::Result;

// Export dependencies from wlr crate
use wlr::internals::adapters::streaming::{StreamingWlr, StreamingWlrBuilder};
use wlr::internals::algorithms::moments::MomentAccumulator;
use wlr::internals::engine::output::RegressionResult;
use wlr::internals::primitives::errors::WlrError;

// Internal dependencies
use crate::input::WlrInput;

// ============================================================================
// Extended Streaming Builder
// ============================================================================

/// Builder for the streaming regression processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelStreamingWlrBuilder<T: Float> {
    /// Base builder from the wlr crate
    pub base: StreamingWlrBuilder<T>,
}

impl<T: Float> Default for ParallelStreamingWlrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelStreamingWlrBuilder<T> {
    fn new() -> Self {
        let base = StreamingWlrBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the number of samples reduced per chunk.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.base = self.base.chunk_size(size);
        self
    }

    /// Build the streaming processor.
    pub fn build(self) -> Result<ParallelStreamingWlr<T>, WlrError>
    where
        T: MomentAccumulator + Send + Sync + 'static,
    {
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        let mut builder = self.base;

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

        Ok(ParallelStreamingWlr {
            processor: builder.build()?,
        })
    }
}

// ============================================================================
// Extended Streaming Processor
// ============================================================================

/// Streaming regression processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelStreamingWlr<T: Float> {
    processor: StreamingWlr<T>,
}

impl<T: Float + MomentAccumulator> ParallelStreamingWlr<T> {
    /// Fold one chunk of samples into the running sums.
    pub fn process_chunk<I1, I2, I3>(&mut self, x: &I1, y: &I2, y_err: &I3) -> Result<(), WlrError>
    where
        I1: WlrInput<T> + ?Sized,
        I2: WlrInput<T> + ?Sized,
        I3: WlrInput<T> + ?Sized,
    {
        self.processor
            .process_chunk(x.as_wlr_slice()?, y.as_wlr_slice()?, y_err.as_wlr_slice()?)
    }

    /// Fit over every sample seen so far, without resetting.
    pub fn current(&self) -> RegressionResult<T> {
        self.processor.current()
    }

    /// Fit over every sample seen so far, then reset.
    pub fn finalize(&mut self) -> RegressionResult<T> {
        self.processor.finalize()
    }

    /// Number of samples folded in so far.
    pub fn points(&self) -> usize {
        self.processor.points()
    }

    /// Reset the processor state.
    pub fn reset(&mut self) {
        self.processor.reset();
    }
}
