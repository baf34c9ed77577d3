//! Layer 5: Engine (parallel extension)
//!
//! Parallel replacements for the passes of the `wlr` execution engine.

/// Parallel moment pass and multi-set regression.
pub mod executor;
