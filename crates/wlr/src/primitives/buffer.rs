//! Buffer management for regression operations.
//!
//! ## Purpose
//!
//! This module provides reusable workspaces that keep the executor and the
//! incremental adapters from reallocating on every call: the weight scratch
//! vector of the executor and the bounded sample window of the online adapter.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: Buffer structs hold all scratch space for their
//!   execution context (batch, online).
//! * **Lazy Expansion**: Buffers grow on demand but are never shrunk.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector wrapper with automatic capacity management.
//! * **RegressionBuffer**: Working memory for the executor (per-point weights).
//! * **OnlineBuffer**: Contiguous scratch copies of the online window.
//! * **SampleWindow**: Bounded FIFO window of `(x, y, y_err)` samples for the online adapter.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared between calls, never deallocated.
//! * A `SampleWindow` never holds more than its capacity.
//! * The three columns of a `SampleWindow` always have the same length.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::VecDeque;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Zero;

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Helper trait to simplify resizing and filling vectors.
pub trait VecExt<T> {
    /// Resize the vector to `n` and fill with `val`.
    fn assign(&mut self, n: usize, val: T);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign(&mut self, n: usize, val: T) {
        if self.len() != n {
            self.clear();
            self.resize(n, val);
        } else {
            self.fill(val);
        }
    }
}

// ============================================================================
// RegressionBuffer - Working Memory for the Executor
// ============================================================================

/// Working memory for the regression executor.
#[derive(Debug, Clone)]
pub struct RegressionBuffer<T> {
    /// Inverse-variance weights, one per sample.
    pub weights: Slot<T>,
}

impl<T> Default for RegressionBuffer<T> {
    fn default() -> Self {
        Self {
            weights: Slot::default(),
        }
    }
}

impl<T: Clone + Zero> RegressionBuffer<T> {
    /// Create a buffer pre-allocated for `n` samples.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            weights: Slot::new(n),
        }
    }

    /// Size the weight slot for a dataset of `n` samples.
    pub fn prepare(&mut self, n: usize) {
        self.weights.as_vec_mut().assign(n, T::zero());
    }
}

// ============================================================================
// OnlineBuffer - Scratch Space for the Online Adapter
// ============================================================================

/// Contiguous copies of the online window, rebuilt after an eviction.
#[derive(Debug, Clone)]
pub struct OnlineBuffer<T> {
    /// Scratch x-values.
    pub scratch_x: Slot<T>,

    /// Scratch y-values.
    pub scratch_y: Slot<T>,

    /// Scratch y-errors.
    pub scratch_y_err: Slot<T>,
}

impl<T> Default for OnlineBuffer<T> {
    fn default() -> Self {
        Self {
            scratch_x: Slot::default(),
            scratch_y: Slot::default(),
            scratch_y_err: Slot::default(),
        }
    }
}

impl<T> OnlineBuffer<T> {
    /// Create a buffer pre-allocated for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch_x: Slot::new(capacity),
            scratch_y: Slot::new(capacity),
            scratch_y_err: Slot::new(capacity),
        }
    }

    /// Clear all slots (preserves capacity).
    pub fn clear(&mut self) {
        self.scratch_x.clear();
        self.scratch_y.clear();
        self.scratch_y_err.clear();
    }
}

// ============================================================================
// SampleWindow - FIFO Storage for the Online Adapter
// ============================================================================

/// Bounded FIFO window of samples used by the online adapter.
#[derive(Debug, Clone)]
pub struct SampleWindow<T> {
    x: VecDeque<T>,
    y: VecDeque<T>,
    y_err: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> SampleWindow<T> {
    /// Create a window holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            x: VecDeque::with_capacity(capacity),
            y: VecDeque::with_capacity(capacity),
            y_err: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, returning the evicted oldest sample if the window was full.
    pub fn push(&mut self, x: T, y: T, y_err: T) -> Option<(T, T, T)> {
        let evicted = if self.x.len() >= self.capacity {
            match (self.x.pop_front(), self.y.pop_front(), self.y_err.pop_front()) {
                (Some(ox), Some(oy), Some(oe)) => Some((ox, oy, oe)),
                _ => None,
            }
        } else {
            None
        };

        self.x.push_back(x);
        self.y.push_back(y);
        self.y_err.push_back(y_err);

        evicted
    }

    /// Number of samples currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the window holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Maximum number of samples held.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy the window contents into the contiguous scratch slots of `buf`.
    pub fn copy_into(&self, buf: &mut OnlineBuffer<T>) {
        buf.clear();
        buf.scratch_x.extend(self.x.iter().copied());
        buf.scratch_y.extend(self.y.iter().copied());
        buf.scratch_y_err.extend(self.y_err.iter().copied());
    }

    /// Drop all samples (preserves capacity).
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.y_err.clear();
    }
}
