//! High-level API for weighted regression with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastWlr`. It extends
//! the `wlr` API with adapters that reduce sample moments on all CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `wlr` builder pattern.
//! * **Parallel-First**: Batch and Streaming default to parallel execution.
//! * **Transparent**: Marker types (Batch, Streaming, Online) select the parallel builders.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WlrBuilder`] via `Wlr::new()`.
//! 2. Chain configuration methods (`.chunk_size()`, `.window_capacity()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::ParallelBatchWlrBuilder;
use crate::adapters::online::ParallelOnlineWlrBuilder;
use crate::adapters::streaming::ParallelStreamingWlrBuilder;

// Import base marker types for delegation
use wlr::internals::api::Batch as BaseBatch;
use wlr::internals::api::Online as BaseOnline;
use wlr::internals::api::Streaming as BaseStreaming;

// Publicly re-exported types
pub use crate::engine::executor::regress_many;
pub use wlr::internals::adapters::online::OnlineOutput;
pub use wlr::internals::api::{WlrAdapter, WlrBuilder, regress};
pub use wlr::internals::engine::output::RegressionResult;
pub use wlr::internals::primitives::errors::WlrError;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online, Streaming};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> WlrAdapter<T> for Batch {
    type Output = ParallelBatchWlrBuilder<T>;

    fn convert(builder: WlrBuilder<T>) -> Self::Output {
        // User choice, otherwise parallel
        let parallel = builder.parallel.unwrap_or(true);

        let base = <BaseBatch as WlrAdapter<T>>::convert(builder).parallel(parallel);

        ParallelBatchWlrBuilder { base }
    }
}

/// Marker for parallel chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: Float> WlrAdapter<T> for Streaming {
    type Output = ParallelStreamingWlrBuilder<T>;

    fn convert(builder: WlrBuilder<T>) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(true);

        let base = <BaseStreaming as WlrAdapter<T>>::convert(builder).parallel(parallel);

        ParallelStreamingWlrBuilder { base }
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl<T: Float> WlrAdapter<T> for Online {
    type Output = ParallelOnlineWlrBuilder<T>;

    fn convert(builder: WlrBuilder<T>) -> Self::Output {
        // Windows are small; serial unless asked otherwise
        let parallel = builder.parallel.unwrap_or(false);

        let base = <BaseOnline as WlrAdapter<T>>::convert(builder).parallel(parallel);

        ParallelOnlineWlrBuilder { base }
    }
}
