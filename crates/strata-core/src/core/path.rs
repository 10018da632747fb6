// crates/strata-core/src/core/path.rs
// ============================================================================
// Module: Key Path Addressing
// Description: Ordered segment sequences addressing nested configuration.
// Purpose: Provide the canonical key-path type shared by every layer.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A [`KeyPath`] is an ordered sequence of string segments addressing a leaf
//! inside a nested configuration tree, e.g.
//! `["application_logging", "forwarding", "max_samples_stored"]`. Segments
//! are case-sensitive; empty segments produced by stray or trailing
//! separators are dropped at construction and never reappear in any
//! translated spelling.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Key Path
// ============================================================================

/// Separator used by the dotted spelling of a key path.
pub const PATH_SEPARATOR: char = '.';

/// Ordered, case-sensitive key path into a nested configuration tree.
///
/// # Invariants
/// - Contains no empty segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Parses a dotted path such as `"transaction_tracer.record_sql"`.
    ///
    /// Empty segments from duplicate or trailing separators are dropped, so
    /// `"a..b."` parses identically to `"a.b"`.
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        Self::from_segments(dotted.split(PATH_SEPARATOR))
    }

    /// Builds a path from individual segments, dropping empty ones.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            segments
                .into_iter()
                .map(Into::into)
                .map(|segment| segment.trim().to_string())
                .filter(|segment| !segment.is_empty())
                .collect(),
        )
    }

    /// Returns the path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns true when the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Joins the segments with the given separator.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    /// Appends a segment, ignoring empty input.
    pub fn push(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        let trimmed = segment.trim();
        if !trimmed.is_empty() {
            self.0.push(trimmed.to_string());
        }
    }

    /// Returns a new path with `tail` appended after this path.
    #[must_use]
    pub fn extended(&self, tail: &Self) -> Self {
        let mut combined = self.0.clone();
        combined.extend(tail.0.iter().cloned());
        Self(combined)
    }

    /// Returns a copy with every `-` in every segment replaced by `_`.
    ///
    /// Flattened lookups accept hyphenated spellings for keys that are
    /// canonically underscore-separated.
    #[must_use]
    pub fn normalize_hyphens(&self) -> Self {
        Self(self.0.iter().map(|segment| segment.replace('-', "_")).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}
