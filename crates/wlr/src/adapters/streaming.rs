//! Streaming adapter for chunked weighted regression.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter for sample sets that
//! do not fit in memory or arrive in pieces. Each chunk is reduced to moment
//! sums which are merged into a running total; the line can be read at any
//! time and is finalized once the stream ends.
//!
//! ## Design notes
//!
//! * **Memory**: Only the five running sums (plus zero-error sums) are kept,
//!   never the samples themselves. Large chunks are reduced `chunk_size`
//!   samples at a time so the weight scratch buffer stays bounded.
//! * **Equivalence**: The final fit equals the batch fit over the concatenated
//!   chunks up to floating-point rounding, independent of chunk boundaries.
//!
//! ## Key concepts
//!
//! * **Process chunk**: Validates, weights and accumulates one chunk.
//! * **Current**: Solves the running sums without consuming them.
//! * **Finalize**: Solves the running sums and resets the stream.
//!
//! ## Invariants
//!
//! * Each chunk's `x`, `y` and `y_err` have the same length.
//!
//! ## Non-goals
//!
//! * This adapter does not retain or reorder samples.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::moments::{MomentAccumulator, MomentSums};
use crate::engine::executor::{MomentPassFn, RegressionConfig, RegressionExecutor};
use crate::engine::output::RegressionResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::WlrError;

// ============================================================================
// Streaming Builder
// ============================================================================

/// Builder for the streaming regression processor.
#[derive(Debug, Clone)]
pub struct StreamingWlrBuilder<T: Float> {
    /// Number of samples reduced per internal pass
    pub chunk_size: usize,

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

impl<T: Float> Default for StreamingWlrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> StreamingWlrBuilder<T> {
    /// Create a new streaming builder with default parameters.
    fn new() -> Self {
        Self {
            chunk_size: 5000,
            deferred_error: None,
            custom_moment_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Streaming-Specific Setters
    // ========================================================================

    /// Set the number of samples reduced per internal pass.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
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

    /// Build the streaming processor.
    pub fn build(self) -> Result<StreamingWlr<T>, WlrError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_chunk_size(self.chunk_size, 1)?;

        let executor = RegressionExecutor::from_config(&RegressionConfig {
            custom_moment_pass: self.custom_moment_pass,
        })
        .with_capacity(self.chunk_size);

        Ok(StreamingWlr {
            config: self,
            executor,
            sums: MomentSums::zero(),
            chunks_processed: 0,
        })
    }
}

// ============================================================================
// Streaming Processor
// ============================================================================

/// Streaming weighted regression processor.
#[derive(Debug, Clone)]
pub struct StreamingWlr<T: Float> {
    config: StreamingWlrBuilder<T>,
    executor: RegressionExecutor<T>,
    sums: MomentSums<T>,
    chunks_processed: usize,
}

impl<T: Float + MomentAccumulator> StreamingWlr<T> {
    /// Fold a chunk of samples into the running sums.
    pub fn process_chunk(&mut self, x: &[T], y: &[T], y_err: &[T]) -> Result<(), WlrError> {
        Validator::validate_inputs(x, y, y_err)?;

        let step = self.config.chunk_size;
        for ((cx, cy), ce) in x
            .chunks(step)
            .zip(y.chunks(step))
            .zip(y_err.chunks(step))
        {
            let partial = self.executor.accumulate(cx, cy, ce);
            self.sums.merge(&partial);
        }

        self.chunks_processed += 1;
        log::trace!(
            "chunk {} folded, {} sample(s) so far",
            self.chunks_processed,
            self.sums.points
        );

        Ok(())
    }

    /// Fit over all samples processed so far.
    pub fn current(&self) -> RegressionResult<T> {
        RegressionExecutor::solve_sums(&self.sums).result
    }

    /// Fit over all samples processed so far and reset the stream.
    pub fn finalize(&mut self) -> RegressionResult<T> {
        let result = self.current();
        self.reset();
        result
    }

    /// Number of samples processed since the last reset.
    pub fn points(&self) -> usize {
        self.sums.points
    }

    /// Number of chunks processed since the last reset.
    pub fn chunks_processed(&self) -> usize {
        self.chunks_processed
    }

    /// Discard all accumulated sums.
    pub fn reset(&mut self) {
        self.sums = MomentSums::zero();
        self.chunks_processed = 0;
    }
}
