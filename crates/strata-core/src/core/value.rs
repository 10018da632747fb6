// crates/strata-core/src/core/value.rs
// ============================================================================
// Module: Raw Configuration Values
// Description: Closed shape set for values arriving from any source.
// Purpose: Dispatch coercion by shape tag instead of runtime reflection.
// Dependencies: crate::core::path, serde_json
// ============================================================================

//! ## Overview
//! The same logical setting may arrive as a string, a number, or a nested
//! collection depending on which layer supplied it. [`ConfigValue`] closes
//! that ambiguity into a small set of shape variants so downstream coercion
//! is a pure match. Absence is modeled as `Option<&ConfigValue>` at lookup
//! sites, never as a variant.
//!
//! Obscured leaves only ever appear in locally supplied trees; conversions
//! from `serde_json::Value` cannot produce them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::core::path::KeyPath;

// ============================================================================
// SECTION: Value Shapes
// ============================================================================

/// Raw configuration value as supplied by a source layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar, widened to 64 bits regardless of source width.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    Str(String),
    /// Ordered list of values.
    List(Vec<ConfigValue>),
    /// String-keyed nested tree.
    Map(BTreeMap<String, ConfigValue>),
    /// Ciphertext leaf awaiting decoding with the obscuring key.
    Obscured(String),
}

impl ConfigValue {
    /// Converts an already-parsed JSON tree into a configuration tree.
    ///
    /// JSON `null` maps to `None` (absence); `null` entries inside objects
    /// and arrays are dropped. Numbers become [`ConfigValue::Int`] when they
    /// fit `i64` and [`ConfigValue::Float`] otherwise.
    #[must_use]
    pub fn from_json(json: JsonValue) -> Option<Self> {
        match json {
            JsonValue::Null => None,
            JsonValue::Bool(value) => Some(Self::Bool(value)),
            JsonValue::Number(number) => Some(number.as_i64().map_or_else(
                || Self::Float(number.as_f64().unwrap_or(0.0)),
                Self::Int,
            )),
            JsonValue::String(value) => Some(Self::Str(value)),
            JsonValue::Array(items) => Some(Self::List(
                items.into_iter().filter_map(Self::from_json).collect(),
            )),
            JsonValue::Object(entries) => Some(Self::Map(
                entries
                    .into_iter()
                    .filter_map(|(key, value)| Self::from_json(value).map(|value| (key, value)))
                    .collect(),
            )),
        }
    }

    /// Parses text read from an environment variable or system property.
    ///
    /// The text is tried as JSON first so operators can supply booleans,
    /// numbers, and even lists through the environment; anything that does
    /// not parse as JSON is kept as the trimmed raw string.
    #[must_use]
    pub fn parse_scalar(text: &str) -> Self {
        let trimmed = text.trim();
        match serde_json::from_str::<JsonValue>(trimmed) {
            Ok(json) => Self::from_json(json).unwrap_or_else(|| Self::Str(trimmed.to_string())),
            Err(_) => Self::Str(trimmed.to_string()),
        }
    }

    /// Returns the nested tree when this value is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a direct child by segment name.
    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&Self> {
        self.as_map().and_then(|entries| entries.get(segment))
    }

    /// Walks the tree along `path`, returning the value at the leaf.
    ///
    /// An empty path returns the value itself. Traversal stops with `None`
    /// as soon as a non-map is reached with segments remaining.
    #[must_use]
    pub fn at(&self, path: &KeyPath) -> Option<&Self> {
        let mut current = self;
        for segment in path.segments() {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// Returns true when this value is an undecoded obscured leaf.
    #[must_use]
    pub const fn is_obscured(&self) -> bool {
        matches!(self, Self::Obscured(_))
    }

    /// Builds an empty map, the shape of a source with no settings.
    #[must_use]
    pub const fn empty_map() -> Self {
        Self::Map(BTreeMap::new())
    }
}

impl From<JsonValue> for ConfigValue {
    /// Total conversion for callers that cannot represent absence; JSON
    /// `null` becomes an empty map.
    fn from(json: JsonValue) -> Self {
        Self::from_json(json).unwrap_or_else(Self::empty_map)
    }
}
