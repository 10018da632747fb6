// crates/strata-config/src/limit.rs
// ============================================================================
// Module: Resettable Limits
// Description: Snapshot of a resolved threshold resettable by a push.
// Purpose: Allow a controller to cap an already-constructed node's limit.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Most reads re-run resolution, but a handful of numeric thresholds (e.g.
//! "max samples stored") are snapshotted into a node at construction and
//! later *reset* when the controller pushes a harvest cap. The reset is an
//! explicit single-writer operation — concurrent writers must be serialized
//! by the caller — while readers observe the current value atomically.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

// ============================================================================
// SECTION: Limit
// ============================================================================

/// Numeric threshold snapshotted at construction and resettable by a push.
#[derive(Debug)]
pub struct ResettableLimit {
    /// Current threshold value.
    value: AtomicI64,
}

impl ResettableLimit {
    /// Creates a limit holding the resolved initial value.
    #[must_use]
    pub const fn new(initial: i64) -> Self {
        Self {
            value: AtomicI64::new(initial),
        }
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }

    /// Resets the threshold from a controller push. Single-writer.
    pub fn reset(&self, value: i64) {
        self.value.store(value, Ordering::Release);
    }
}
