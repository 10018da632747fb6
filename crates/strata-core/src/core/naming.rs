// crates/strata-core/src/core/naming.rs
// ============================================================================
// Module: Layer Name Translation
// Description: Key-path spellings for environment and property layers.
// Purpose: Compose namespace prefixes so nested subtrees never double-prefix.
// Dependencies: crate::core::path, thiserror
// ============================================================================

//! ## Overview
//! Each configuration subtree is scoped by a [`NamespaceRoot`]: a dotted
//! prefix for system-property lookups (e.g. `agent.config.`) and an
//! uppercase prefix for environment variables (e.g. `STRATA_`). A child root
//! composes both spellings from its parent, so a deeply nested subtree such
//! as span events under infinite tracing resolves
//! `agent.config.infinite_tracing.span_events.queue_size` and
//! `STRATA_INFINITE_TRACING_SPAN_EVENTS_QUEUE_SIZE` without the caller
//! re-deriving either form.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::path::KeyPath;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Namespace construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    /// A prefix was empty, which would expose arbitrary host keys as
    /// configuration overrides.
    #[error("namespace prefix must be non-empty")]
    EmptyPrefix,
}

// ============================================================================
// SECTION: Namespace Root
// ============================================================================

/// Prefix pair scoping one configuration subtree.
///
/// # Invariants
/// - The property prefix always ends with `.`; the environment prefix is
///   uppercase and always ends with `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRoot {
    /// Dotted prefix for system-property spellings.
    property_prefix: String,
    /// Uppercase underscore prefix for environment-variable spellings.
    env_prefix: String,
}

impl NamespaceRoot {
    /// Creates a root from a property prefix and an environment prefix.
    ///
    /// Trailing separators are added when missing and the environment
    /// prefix is uppercased, so `("agent.config", "strata")` and
    /// `("agent.config.", "STRATA_")` describe the same root.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::EmptyPrefix`] when either prefix is empty.
    pub fn new(
        property_prefix: impl Into<String>,
        env_prefix: impl Into<String>,
    ) -> Result<Self, NamingError> {
        let property_prefix = property_prefix.into();
        let env_prefix = env_prefix.into();
        if property_prefix.is_empty() || env_prefix.is_empty() {
            return Err(NamingError::EmptyPrefix);
        }
        let mut property_prefix = property_prefix;
        if !property_prefix.ends_with('.') {
            property_prefix.push('.');
        }
        let mut env_prefix = env_prefix.to_uppercase();
        if !env_prefix.ends_with('_') {
            env_prefix.push('_');
        }
        Ok(Self {
            property_prefix,
            env_prefix,
        })
    }

    /// Returns the system-property spelling for `path` under this root.
    ///
    /// Case is preserved: `application_logging.forwarding.enabled` under
    /// `agent.config.` spells `agent.config.application_logging.forwarding.enabled`.
    #[must_use]
    pub fn property_name(&self, path: &KeyPath) -> String {
        format!("{}{}", self.property_prefix, path.join("."))
    }

    /// Returns the environment-variable spelling for `path` under this root.
    ///
    /// Segments are joined with `_` and uppercased; empty segments never
    /// appear, so no spelling contains `__` from a stray separator.
    #[must_use]
    pub fn env_var_name(&self, path: &KeyPath) -> String {
        format!("{}{}", self.env_prefix, path.join("_").to_uppercase())
    }

    /// Returns the composed root for a nested subtree at `path`.
    ///
    /// The child's environment spelling extends this root's own prefix, not
    /// the process-wide default, so nested configs compose without
    /// double-prefixing. An empty path returns this root unchanged.
    #[must_use]
    pub fn child(&self, path: &KeyPath) -> Self {
        if path.is_empty() {
            return self.clone();
        }
        Self {
            property_prefix: format!("{}{}.", self.property_prefix, path.join(".")),
            env_prefix: format!("{}{}_", self.env_prefix, path.join("_").to_uppercase()),
        }
    }

    /// Returns the dotted property prefix.
    #[must_use]
    pub fn property_prefix(&self) -> &str {
        &self.property_prefix
    }

    /// Returns the uppercase environment prefix.
    #[must_use]
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}
