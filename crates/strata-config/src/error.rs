// crates/strata-config/src/error.rs
// ============================================================================
// Module: Configuration Errors
// Description: Error taxonomy for the resolution engine.
// Purpose: Keep the single fatal class explicit; everything else is absorbed.
// Dependencies: strata-core, thiserror
// ============================================================================

//! ## Overview
//! Almost every failure inside the engine is a *miss* that silently advances
//! resolution to the next source, or an unavailable value that falls back to
//! a default. The exceptions carried here are terminal: a security policy
//! contradiction must abort startup, and an invalid namespace prefix can
//! never produce usable lookups.

// ============================================================================
// SECTION: Imports
// ============================================================================

use strata_core::NamingError;
use thiserror::Error;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Terminal configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// High security mode was enabled together with a remote security
    /// policies token. The combination is contradictory and is never
    /// retried or auto-corrected.
    #[error(
        "high security mode is enabled together with a security policies token; \
         remove one of the two settings"
    )]
    PolicyContradiction,

    /// Namespace root construction failed.
    #[error(transparent)]
    Naming(#[from] NamingError),
}
