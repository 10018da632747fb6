// crates/strata-config/src/lib.rs
// ============================================================================
// Module: Strata Config Library
// Description: Public API surface for layered configuration resolution.
// Purpose: Expose sources, precedence, typed getters, and the policy gate.
// Dependencies: crate::{error, identity, limit, policy, resolver, snapshot, source}
// ============================================================================

//! ## Overview
//! `strata-config` resolves typed settings across four competing sources —
//! environment variables, system properties, a local configuration tree,
//! and values pushed by a remote controller — with per-setting control over
//! remote overridability and a security gate that can lock settings against
//! remote modification entirely.
//!
//! Resolution order, first well-typed hit wins: environment, system
//! property, local tree, remote push (only when the setting allows it and
//! the local tree has no value at the path), built-in default. Environment
//! and system properties are deployment-time operator overrides and outrank
//! everything; local configuration is the owner's explicit intent and is
//! never silently overridden by the controller; remote pushes exist to fill
//! in values the owner did not specify.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod identity;
pub mod limit;
pub mod policy;
pub mod resolver;
pub mod snapshot;
pub mod source;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ConfigError;
pub use identity::ControllerIdentity;
pub use identity::DELIVERY_LOCATION;
pub use identity::FLEET_ID;
pub use limit::ResettableLimit;
pub use policy::SecurityGate;
pub use resolver::HIGH_SECURITY;
pub use resolver::OBSCURING_KEY;
pub use resolver::Resolved;
pub use resolver::SECURITY_POLICIES_TOKEN;
pub use resolver::Setting;
pub use resolver::Settings;
pub use snapshot::SettingsStore;
pub use source::SourceKind;
