//! Execution engine for weighted regression.
//!
//! ## Purpose
//!
//! This module provides the engine that runs the regression pipeline:
//! errors are turned into weights, weights and samples are reduced to moment
//! sums, and the sums are solved for the line.
//!
//! ## Design notes
//!
//! * Reuses one weight buffer across calls to avoid reallocation.
//! * The moment pass is pluggable (`MomentPassFn`) so extension crates can
//!   substitute a parallel reduction without touching the solver.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Input slices are assumed to have equal lengths (checked by `validator`).
//! * The weight buffer has the same length as the input after `prepare`.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.
//! * This module does not spawn threads itself (handled by extension crates).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::moments::{MomentAccumulator, MomentSums, WeightedMoments};
use crate::algorithms::solver::solve;
use crate::engine::output::RegressionResult;
use crate::math::weights::fill_weights;
use crate::primitives::buffer::RegressionBuffer;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom moment pass.
#[doc(hidden)]
pub type MomentPassFn<T> = fn(
    &[T], // x
    &[T], // y
    &[T], // weights
) -> MomentSums<T>;

/// Output from regression execution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Fitted line and uncertainties.
    pub result: RegressionResult<T>,

    /// Moments the line was solved from.
    pub moments: WeightedMoments<T>,

    /// Number of samples reduced.
    pub points: usize,
}

/// Configuration for the executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegressionConfig<T> {
    /// Replacement for the built-in moment pass.
    #[doc(hidden)]
    pub custom_moment_pass: Option<MomentPassFn<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the weights -> moments -> solve pipeline.
#[derive(Debug, Clone)]
pub struct RegressionExecutor<T: Float> {
    custom_moment_pass: Option<MomentPassFn<T>>,
    buffer: RegressionBuffer<T>,
}

impl<T: Float> Default for RegressionExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RegressionExecutor<T> {
    /// Create an executor using the built-in moment pass.
    pub fn new() -> Self {
        Self {
            custom_moment_pass: None,
            buffer: RegressionBuffer::default(),
        }
    }

    /// Create an executor from a configuration.
    pub fn from_config(config: &RegressionConfig<T>) -> Self {
        Self::new().custom_moment_pass(config.custom_moment_pass)
    }

    /// Pre-allocate the weight buffer for `n` samples.
    pub fn with_capacity(mut self, n: usize) -> Self {
        self.buffer = RegressionBuffer::with_capacity(n);
        self
    }

    /// Set a custom moment pass.
    #[doc(hidden)]
    pub fn custom_moment_pass(mut self, pass: Option<MomentPassFn<T>>) -> Self {
        self.custom_moment_pass = pass;
        self
    }
}

impl<T: Float + MomentAccumulator> RegressionExecutor<T> {
    /// Reduce samples to raw moment sums.
    pub fn accumulate(&mut self, x: &[T], y: &[T], y_err: &[T]) -> MomentSums<T> {
        let n = x.len();
        self.buffer.prepare(n);
        fill_weights(y_err, &mut self.buffer.weights);

        let weights = &self.buffer.weights[..];
        match self.custom_moment_pass {
            Some(pass) => pass(x, y, weights),
            None => T::accumulate_moments(x, y, weights),
        }
    }

    /// Solve already accumulated sums.
    pub fn solve_sums(sums: &MomentSums<T>) -> ExecutorOutput<T> {
        let moments = sums.finalize();
        ExecutorOutput {
            result: solve(&moments),
            moments,
            points: sums.points,
        }
    }

    /// Run the full pipeline on one sample set.
    pub fn run(&mut self, x: &[T], y: &[T], y_err: &[T]) -> ExecutorOutput<T> {
        let sums = self.accumulate(x, y, y_err);
        Self::solve_sums(&sums)
    }

    /// Run the full pipeline with a one-off executor.
    pub fn run_with_config(
        x: &[T],
        y: &[T],
        y_err: &[T],
        config: RegressionConfig<T>,
    ) -> ExecutorOutput<T> {
        Self::from_config(&config).run(x, y, y_err)
    }
}
