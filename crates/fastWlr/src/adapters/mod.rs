//! Layer 6: Adapters (parallel extension)
//!
//! Execution adapters that wrap the `wlr` builders and inject the parallel
//! moment pass.

/// Parallel in-memory batch adapter.
pub mod batch;

/// Parallel chunked streaming adapter.
pub mod streaming;

/// Online sliding-window adapter.
pub mod online;
