// crates/strata-core/src/interfaces/mod.rs
// ============================================================================
// Module: Host Environment Interfaces
// Description: Injectable read-only access to process environment state.
// Purpose: Keep mutable host state behind a swappable provider interface.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment variables and system properties are process-wide mutable
//! state. The engine never touches them through hidden globals: every read
//! goes through [`HostEnvironment`], with [`ProcessEnvironment`] as the
//! process-lifetime default and [`StaticEnvironment`] as the swappable
//! implementation used by tests and embedders. Lookups are live — values
//! are never snapshotted at construction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;

// ============================================================================
// SECTION: Provider Interface
// ============================================================================

/// Read-only provider of environment variables and system properties.
pub trait HostEnvironment: Send + Sync {
    /// Returns the environment variable named `name`, if present.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Returns the system property named `name`, if present.
    fn system_property(&self, name: &str) -> Option<String>;
}

// ============================================================================
// SECTION: Process Provider
// ============================================================================

/// Live process environment with an injected system-property table.
///
/// Rust processes have no JVM-style property registry, so the host supplies
/// the property table at construction (typically from launcher arguments);
/// environment variables are read from the OS on every call.
#[derive(Debug, Default, Clone)]
pub struct ProcessEnvironment {
    /// System properties supplied by the host process.
    properties: BTreeMap<String, String>,
}

impl ProcessEnvironment {
    /// Creates a provider with no system properties.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: BTreeMap::new(),
        }
    }

    /// Creates a provider backed by the given system-property table.
    #[must_use]
    pub const fn with_properties(properties: BTreeMap<String, String>) -> Self {
        Self {
            properties,
        }
    }
}

impl HostEnvironment for ProcessEnvironment {
    fn env_var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn system_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

// ============================================================================
// SECTION: Static Provider
// ============================================================================

/// Fixed in-memory provider for tests and hermetic embedders.
#[derive(Debug, Default, Clone)]
pub struct StaticEnvironment {
    /// Environment variables visible through this provider.
    env_vars: BTreeMap<String, String>,
    /// System properties visible through this provider.
    properties: BTreeMap<String, String>,
}

impl StaticEnvironment {
    /// Creates an empty provider.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            env_vars: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Adds an environment variable.
    #[must_use]
    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(name.into(), value.into());
        self
    }

    /// Adds a system property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl HostEnvironment for StaticEnvironment {
    fn env_var(&self, name: &str) -> Option<String> {
        self.env_vars.get(name).cloned()
    }

    fn system_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}
