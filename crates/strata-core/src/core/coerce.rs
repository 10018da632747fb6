// crates/strata-core/src/core/coerce.rs
// ============================================================================
// Module: Value Coercion
// Description: Shape-dispatched conversion of raw values to target types.
// Purpose: Define the single set of parsing rules shared by every layer.
// Dependencies: crate::core::value, std
// ============================================================================

//! ## Overview
//! Coercions convert a raw [`ConfigValue`] into a requested target type.
//! Every function is total over its input and returns `None` for a shape it
//! cannot convert; a `None` here is a *miss*, which callers treat as "advance
//! to the next source", never as an error. Delimited-string parsing trims
//! tokens, drops empties, and skips unparsable tokens rather than failing
//! the whole collection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::time::Duration;

use crate::core::value::ConfigValue;

// ============================================================================
// SECTION: Scalar Coercions
// ============================================================================

/// Comma separator used by delimited integer sets.
pub const COMMA_SEPARATOR: &str = ",";

/// Semicolon separator used by delimited name lists.
pub const SEMICOLON_SEPARATOR: &str = ";";

/// Coerces to a boolean.
///
/// Accepts a boolean literal or a string compared case-insensitively to
/// `"true"`; any other string, including the empty string, coerces to
/// `false`. Non-boolean, non-string shapes miss.
#[must_use]
pub fn as_bool(value: &ConfigValue) -> Option<bool> {
    match value {
        ConfigValue::Bool(flag) => Some(*flag),
        ConfigValue::Str(text) => Some(text.trim().eq_ignore_ascii_case("true")),
        _ => None,
    }
}

/// Coerces to a 64-bit integer.
///
/// Numeric literals of any width convert, with fractional values truncated
/// toward zero; numeric strings parse as integers. Anything else misses.
#[must_use]
pub fn as_i64(value: &ConfigValue) -> Option<i64> {
    match value {
        ConfigValue::Int(number) => Some(*number),
        ConfigValue::Float(number) => f64_to_i64(*number),
        ConfigValue::Str(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerces to a 64-bit float.
#[must_use]
pub fn as_f64(value: &ConfigValue) -> Option<f64> {
    match value {
        ConfigValue::Int(number) => precise_i64_to_f64(*number),
        ConfigValue::Float(number) => Some(*number),
        ConfigValue::Str(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerces a scalar to its string form, trimming string input.
///
/// Collections and obscured leaves miss; an undecoded ciphertext must never
/// leak out as a plain string.
#[must_use]
pub fn as_string(value: &ConfigValue) -> Option<String> {
    match value {
        ConfigValue::Str(text) => Some(text.trim().to_string()),
        ConfigValue::Bool(flag) => Some(flag.to_string()),
        ConfigValue::Int(number) => Some(number.to_string()),
        ConfigValue::Float(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Coerces to a duration expressed as a second count.
///
/// Integral and fractional second counts are accepted, as are numeric
/// strings. Negative, non-finite, and non-numeric input misses.
#[must_use]
pub fn as_duration(value: &ConfigValue) -> Option<Duration> {
    let seconds = as_f64(value)?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(seconds).ok()
}

// ============================================================================
// SECTION: Collection Coercions
// ============================================================================

/// Coerces to a set of 64-bit integers.
///
/// A list normalizes every numeric element to 64 bits, skipping non-numeric
/// elements; a delimited string splits on commas, trims, drops empty
/// tokens, and skips unparsable tokens; a lone numeric scalar becomes a
/// singleton set.
#[must_use]
pub fn as_int_set(value: &ConfigValue) -> Option<BTreeSet<i64>> {
    match value {
        ConfigValue::Int(_) | ConfigValue::Float(_) => as_i64(value).map(|n| BTreeSet::from([n])),
        ConfigValue::Str(text) => Some(
            text.split(COMMA_SEPARATOR)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .filter_map(|token| token.parse::<i64>().ok())
                .collect(),
        ),
        ConfigValue::List(items) => Some(items.iter().filter_map(as_i64).collect()),
        _ => None,
    }
}

/// Coerces to a de-duplicated string list with first-seen ordering.
///
/// A string splits on `separator`; each token is trimmed, empty tokens are
/// dropped, and duplicates collapse to their first occurrence. A list of
/// scalars normalizes each element under the same rules.
#[must_use]
pub fn as_unique_strings(value: &ConfigValue, separator: &str) -> Option<Vec<String>> {
    match value {
        ConfigValue::Str(text) => Some(collect_unique(
            text.split(separator).map(str::to_string),
        )),
        ConfigValue::List(items) => Some(collect_unique(
            items.iter().filter_map(as_string),
        )),
        _ => None,
    }
}

// ============================================================================
// SECTION: Typed Targets
// ============================================================================

/// Target types a raw value can be coerced into.
///
/// Implementations delegate to the free functions in this module so the
/// parsing rules stay in one place; a `None` is a miss, never an error.
pub trait FromConfigValue: Sized {
    /// Coerces a raw value into this type, or misses.
    fn from_config(raw: &ConfigValue) -> Option<Self>;
}

impl FromConfigValue for bool {
    fn from_config(raw: &ConfigValue) -> Option<Self> {
        as_bool(raw)
    }
}

impl FromConfigValue for i64 {
    fn from_config(raw: &ConfigValue) -> Option<Self> {
        as_i64(raw)
    }
}

impl FromConfigValue for f64 {
    fn from_config(raw: &ConfigValue) -> Option<Self> {
        as_f64(raw)
    }
}

impl FromConfigValue for String {
    fn from_config(raw: &ConfigValue) -> Option<Self> {
        as_string(raw)
    }
}

impl FromConfigValue for Duration {
    fn from_config(raw: &ConfigValue) -> Option<Self> {
        as_duration(raw)
    }
}

impl FromConfigValue for BTreeSet<i64> {
    fn from_config(raw: &ConfigValue) -> Option<Self> {
        as_int_set(raw)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Trims, drops empties, and de-duplicates preserving first-seen order.
fn collect_unique(tokens: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut unique = Vec::new();
    for token in tokens {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            unique.push(trimmed.to_string());
        }
    }
    unique
}

/// Truncates a finite float toward zero when it fits a 64-bit integer.
fn f64_to_i64(number: f64) -> Option<i64> {
    if !number.is_finite() {
        return None;
    }
    let truncated = number.trunc();
    if truncated < -9_223_372_036_854_775_808.0 || truncated >= 9_223_372_036_854_775_808.0 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "range checked above; truncation toward zero is the documented narrowing rule"
    )]
    Some(truncated as i64)
}

/// Widens an integer to a float.
fn precise_i64_to_f64(number: i64) -> Option<f64> {
    #[allow(
        clippy::cast_precision_loss,
        reason = "configuration thresholds are far below the 2^53 precision boundary"
    )]
    Some(number as f64)
}
