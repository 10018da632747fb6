// crates/strata-config/src/policy.rs
// ============================================================================
// Module: Security Policy Gate
// Description: One-time evaluation of the high-security precondition.
// Purpose: Force safe values and reject contradictory policy combinations.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! The gate is evaluated once at bootstrap, never per read. When the
//! high-security flag is active, settings registered as security-sensitive
//! short-circuit to their safe value before source walking begins, and no
//! setting accepts remote pushes. Enabling high security together with a
//! remote security-policies token is contradictory and fails bootstrap with
//! a terminal error — the combination is never downgraded or retried.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ConfigError;

// ============================================================================
// SECTION: Gate
// ============================================================================

/// Evaluated security posture for a settings tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityGate {
    /// True when the process-wide high-security flag is active.
    high_security: bool,
}

impl SecurityGate {
    /// Gate used before policy settings have been resolved; forces nothing.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            high_security: false,
        }
    }

    /// Evaluates the gate from the resolved policy settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PolicyContradiction`] when high security is
    /// enabled together with a non-empty security-policies token.
    pub fn evaluate(
        high_security: bool,
        policies_token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let token_present = policies_token.is_some_and(|token| !token.trim().is_empty());
        if high_security && token_present {
            return Err(ConfigError::PolicyContradiction);
        }
        Ok(Self {
            high_security,
        })
    }

    /// Returns true when high security is active.
    #[must_use]
    pub const fn high_security(self) -> bool {
        self.high_security
    }

    /// Returns true when remote pushes may participate in resolution.
    #[must_use]
    pub const fn allows_remote(self) -> bool {
        !self.high_security
    }
}
