// crates/strata-core/src/lib.rs
// ============================================================================
// Module: Strata Core Library
// Description: Public API surface for the Strata configuration core.
// Purpose: Expose value model, key addressing, coercion, and host interfaces.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Strata core provides the leaf algorithms of the layered configuration
//! engine: the closed set of raw value shapes, nested key-path addressing,
//! name translation between configuration layers, type coercion, and
//! obscured-value decoding. It performs no I/O beyond what a caller injects
//! through [`HostEnvironment`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::coerce;
pub use crate::core::coerce::FromConfigValue;
pub use crate::core::naming::NamespaceRoot;
pub use crate::core::naming::NamingError;
pub use crate::core::obscure::deobscure;
pub use crate::core::obscure::obscure;
pub use crate::core::path::KeyPath;
pub use crate::core::value::ConfigValue;
pub use interfaces::HostEnvironment;
pub use interfaces::ProcessEnvironment;
pub use interfaces::StaticEnvironment;
