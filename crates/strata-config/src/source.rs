// crates/strata-config/src/source.rs
// ============================================================================
// Module: Property Sources
// Description: Source kinds and per-layer raw lookup semantics.
// Purpose: Make precedence a pure match over an explicit source tag.
// Dependencies: strata-core, serde
// ============================================================================

//! ## Overview
//! Every resolved value is attributed to the layer that supplied it. The
//! remote layer is distinguished by its [`SourceKind`] tag, never by
//! inspecting the value's runtime shape: a value pushed by the controller
//! and an identically shaped value in the local map are told apart solely by
//! which tree they were read from.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use strata_core::ConfigValue;
use strata_core::HostEnvironment;
use strata_core::KeyPath;
use strata_core::NamespaceRoot;

// ============================================================================
// SECTION: Source Kind
// ============================================================================

/// Layer that supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Process environment variable.
    Environment,
    /// System property supplied by the host.
    SystemProperty,
    /// Locally supplied configuration tree.
    Local,
    /// Value pushed by the remote controller.
    RemotePush,
    /// Safe value forced by the security policy gate.
    SecurityPolicy,
    /// Built-in default.
    Default,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Environment => "environment",
            Self::SystemProperty => "system_property",
            Self::Local => "local",
            Self::RemotePush => "remote_push",
            Self::SecurityPolicy => "security_policy",
            Self::Default => "default",
        };
        f.write_str(label)
    }
}

// ============================================================================
// SECTION: Live Layer Lookups
// ============================================================================

/// Reads the environment-variable layer for `path` under `root`.
///
/// The spelling comes from the namespace root; the text is parsed JSON-first
/// so operators can express booleans, numbers, and lists.
#[must_use]
pub fn env_layer(
    host: &dyn HostEnvironment,
    root: &NamespaceRoot,
    path: &KeyPath,
) -> Option<ConfigValue> {
    host.env_var(&root.env_var_name(path))
        .map(|text| ConfigValue::parse_scalar(&text))
}

/// Reads the system-property layer for `path` under `root`.
#[must_use]
pub fn property_layer(
    host: &dyn HostEnvironment,
    root: &NamespaceRoot,
    path: &KeyPath,
) -> Option<ConfigValue> {
    host.system_property(&root.property_name(path))
        .map(|text| ConfigValue::parse_scalar(&text))
}
