//! High-level API for weighted linear regression.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the one-call
//! [`regress`] function and a fluent builder for choosing an execution
//! adapter (Batch, Streaming, or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **One estimator**: Every adapter computes the same inverse-variance
//!   weighted fit with the same degeneracy sentinels; adapters differ only in
//!   how samples are fed.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WlrBuilder`] via `Wlr::new()`.
//! 2. Chain adapter parameters (`.chunk_size()`, `.window_capacity()`, ...).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchWlrBuilder;
use crate::adapters::online::OnlineWlrBuilder;
use crate::adapters::streaming::StreamingWlrBuilder;
use crate::algorithms::moments::MomentAccumulator;
use crate::engine::executor::MomentPassFn;

// Publicly re-exported types
pub use crate::adapters::batch::BatchWlr;
pub use crate::adapters::online::{OnlineOutput, OnlineWlr};
pub use crate::adapters::streaming::StreamingWlr;
pub use crate::engine::output::RegressionResult;
pub use crate::math::nansum::nan_sum;
pub use crate::math::weights::weights_from_errors;
pub use crate::primitives::errors::WlrError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online, Streaming};
}

// ============================================================================
// One-call Entry Point
// ============================================================================

/// Fit `y = slope·x + intercept` with inverse-variance weights `y_err^-2`.
///
/// NaN entries drop out of the weighted sums they appear in. Degenerate
/// inputs are not errors: they are reported through `+inf`/`NaN` fields of
/// the result (see [`RegressionResult`]). The only error is a length mismatch
/// between the three inputs.
pub fn regress<T: Float + MomentAccumulator>(
    x: &[T],
    y: &[T],
    y_err: &[T],
) -> Result<RegressionResult<T>, WlrError> {
    BatchWlrBuilder::default().build()?.fit(x, y, y_err)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring regression execution modes.
#[derive(Debug, Clone)]
pub struct WlrBuilder<T> {
    /// Samples reduced per internal pass (Streaming only).
    pub chunk_size: Option<usize>,

    /// Sliding window capacity (Online only).
    pub window_capacity: Option<usize>,

    /// Minimum samples before a fit is reported (Online only).
    pub min_points: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom moment pass function.
    #[doc(hidden)]
    pub custom_moment_pass: Option<MomentPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for WlrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WlrBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: WlrAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            chunk_size: None,
            window_capacity: None,
            min_points: None,
            custom_moment_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of samples reduced per internal pass (Streaming only).
    pub fn chunk_size(mut self, size: usize) -> Self {
        if self.chunk_size.is_some() {
            self.duplicate_param = Some("chunk_size");
        }
        self.chunk_size = Some(size);
        self
    }

    /// Set the window capacity for online processing (Online only).
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        if self.window_capacity.is_some() {
            self.duplicate_param = Some("window_capacity");
        }
        self.window_capacity = Some(capacity);
        self
    }

    /// Set the minimum samples required before a fit is reported (Online only).
    pub fn min_points(mut self, points: usize) -> Self {
        if self.min_points.is_some() {
            self.duplicate_param = Some("min_points");
        }
        self.min_points = Some(points);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom moment pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_moment_pass(mut self, pass: MomentPassFn<T>) -> Self {
        self.custom_moment_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Adapter Trait and Markers
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait WlrAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`WlrBuilder`] into a specialized execution builder.
    fn convert(builder: WlrBuilder<T>) -> Self::Output;
}

// First parameter in `set` that was configured for an adapter that ignores it.
fn unsupported(adapter: &'static str, set: &[(&'static str, bool)]) -> Option<WlrError> {
    set.iter()
        .find(|(_, is_set)| *is_set)
        .map(|&(parameter, _)| WlrError::UnsupportedParameter { adapter, parameter })
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> WlrAdapter<T> for Batch {
    type Output = BatchWlrBuilder<T>;

    fn convert(builder: WlrBuilder<T>) -> Self::Output {
        let mut result = BatchWlrBuilder::default();

        result.deferred_error = unsupported(
            "Batch",
            &[
                ("chunk_size", builder.chunk_size.is_some()),
                ("window_capacity", builder.window_capacity.is_some()),
                ("min_points", builder.min_points.is_some()),
            ],
        );

        if let Some(mp) = builder.custom_moment_pass {
            result.custom_moment_pass = Some(mp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> WlrAdapter<T> for Streaming {
    type Output = StreamingWlrBuilder<T>;

    fn convert(builder: WlrBuilder<T>) -> Self::Output {
        let mut result = StreamingWlrBuilder::default();

        result.deferred_error = unsupported(
            "Streaming",
            &[
                ("window_capacity", builder.window_capacity.is_some()),
                ("min_points", builder.min_points.is_some()),
            ],
        );

        if let Some(chunk_size) = builder.chunk_size {
            result.chunk_size = chunk_size;
        }

        // ======================================
        // DEV
        // ======================================

        if let Some(mp) = builder.custom_moment_pass {
            result.custom_moment_pass = Some(mp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> WlrAdapter<T> for Online {
    type Output = OnlineWlrBuilder<T>;

    fn convert(builder: WlrBuilder<T>) -> Self::Output {
        let mut result = OnlineWlrBuilder::default();

        result.deferred_error =
            unsupported("Online", &[("chunk_size", builder.chunk_size.is_some())]);

        if let Some(window_capacity) = builder.window_capacity {
            result.window_capacity = Some(window_capacity);
        }
        if let Some(min_points) = builder.min_points {
            result.min_points = min_points;
        }

        // ======================================
        // DEV
        // ======================================

        if let Some(mp) = builder.custom_moment_pass {
            result.custom_moment_pass = Some(mp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
