// crates/strata-config/src/snapshot.rs
// ============================================================================
// Module: Snapshot Store
// Description: Copy-on-write publication of local and remote trees.
// Purpose: Let in-flight reads see whole snapshots, never partial updates.
// Dependencies: strata-core, arc-swap
// ============================================================================

//! ## Overview
//! The local and remote trees are immutable snapshots behind
//! [`arc_swap::ArcSwap`]. A reload or a controller push replaces the whole
//! tree reference atomically, so a concurrent reader observes either the
//! old or the new snapshot in full. The store is shared by every settings
//! view over the same configuration: views built before a push observe it
//! on their next read without being reconstructed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use arc_swap::ArcSwap;
use strata_core::ConfigValue;

// ============================================================================
// SECTION: Store
// ============================================================================

/// Shared holder of the local and remote configuration snapshots.
#[derive(Debug)]
pub struct SettingsStore {
    /// Locally supplied tree, already deobscured at publication.
    local: ArcSwap<ConfigValue>,
    /// Tree most recently pushed by the remote controller.
    remote: ArcSwap<ConfigValue>,
}

impl SettingsStore {
    /// Creates a store with the given local tree and an empty remote tree.
    #[must_use]
    pub fn new(local: ConfigValue) -> Self {
        Self {
            local: ArcSwap::from_pointee(local),
            remote: ArcSwap::from_pointee(ConfigValue::empty_map()),
        }
    }

    /// Atomically replaces the local tree.
    ///
    /// Callers deobscure before publishing; the store never holds a tree
    /// with decodable ciphertext while a key is known.
    pub fn publish_local(&self, tree: ConfigValue) {
        self.local.store(Arc::new(tree));
    }

    /// Atomically replaces the remote tree with a controller push.
    pub fn publish_remote(&self, tree: ConfigValue) {
        self.remote.store(Arc::new(tree));
    }

    /// Returns the current local snapshot.
    #[must_use]
    pub fn local(&self) -> Arc<ConfigValue> {
        self.local.load_full()
    }

    /// Returns the current remote snapshot.
    #[must_use]
    pub fn remote(&self) -> Arc<ConfigValue> {
        self.remote.load_full()
    }
}
