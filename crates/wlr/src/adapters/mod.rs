//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different ways of feeding samples:
//!
//! - **Batch**: All samples in memory at once
//! - **Streaming**: Samples arrive in chunks; moments are merged across chunks
//! - **Online**: Samples arrive one at a time, optionally over a sliding window
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for in-memory sample sets.
pub mod batch;

/// Streaming adapter for chunked sample sets.
pub mod streaming;

/// Online adapter for sample-by-sample updates.
pub mod online;
