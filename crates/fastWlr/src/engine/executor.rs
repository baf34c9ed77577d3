//! Parallel execution engine for weighted regression.
//!
//! ## Purpose
//!
//! This module provides the parallel moment pass that is injected into the
//! `wlr` execution engine, and a helper that fits many independent sample
//! sets at once.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential moment pass.
//! * **Parallelism**: Uses `rayon` to reduce contiguous chunks on separate
//!   cores; each chunk still runs the SIMD pass of the base crate.
//! * **Merge**: Partial sums are combined with `MomentSums::merge`, so the
//!   result equals the serial pass up to floating-point rounding.
//! * **Small inputs**: Below `PARALLEL_THRESHOLD` samples the serial pass is used.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not solve the regression (handled by `wlr::solver`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from wlr crate
use wlr::internals::algorithms::moments::{MomentAccumulator, MomentSums};
use wlr::internals::api::regress;
use wlr::internals::engine::output::RegressionResult;
use wlr::internals::primitives::errors::WlrError;

/// Inputs shorter than this are reduced serially.
pub const PARALLEL_THRESHOLD: usize = 8192;

/// Smallest chunk handed to a worker.
#[cfg(feature = "cpu")]
const MIN_CHUNK: usize = 2048;

// ============================================================================
// Parallel Moment Pass
// ============================================================================

/// Reduce `x`, `y`, `w` to moment sums across all CPU cores.
#[cfg(feature = "cpu")]
pub fn moment_pass_parallel<T>(x: &[T], y: &[T], w: &[T]) -> MomentSums<T>
where
    T: Float + MomentAccumulator + Send + Sync,
{
    let n = x.len();
    if n < PARALLEL_THRESHOLD {
        return T::accumulate_moments(x, y, w);
    }

    let chunk = (n / rayon::current_num_threads().max(1)).max(MIN_CHUNK);
    log::debug!("parallel moment pass: {} samples in chunks of {}", n, chunk);

    x.par_chunks(chunk)
        .zip(y.par_chunks(chunk))
        .zip(w.par_chunks(chunk))
        .map(|((cx, cy), cw)| T::accumulate_moments(cx, cy, cw))
        .reduce(MomentSums::zero, |mut acc, part| {
            acc.merge(&part);
            acc
        })
}

// ============================================================================
// Independent Sample Sets
// ============================================================================

/// One sample set: `(x, y, y_err)`.
pub type SampleSet<'a, T> = (&'a [T], &'a [T], &'a [T]);

/// Fit each sample set independently, in parallel.
///
/// Fails with the first length mismatch encountered.
#[cfg(feature = "cpu")]
pub fn regress_many<T>(sets: &[SampleSet<'_, T>]) -> Result<Vec<RegressionResult<T>>, WlrError>
where
    T: Float + MomentAccumulator + Send + Sync,
{
    sets.par_iter()
        .map(|&(x, y, y_err)| regress(x, y, y_err))
        .collect()
}

/// Fit each sample set independently.
#[cfg(not(feature = "cpu"))]
pub fn regress_many<T>(sets: &[SampleSet<'_, T>]) -> Result<Vec<RegressionResult<T>>, WlrError>
where
    T: Float + MomentAccumulator,
{
    sets.iter()
        .map(|&(x, y, y_err)| regress(x, y, y_err))
        .collect()
}
