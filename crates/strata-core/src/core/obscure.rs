// crates/strata-core/src/core/obscure.rs
// ============================================================================
// Module: Obscured Value Codec
// Description: Recursive decoding of obscured configuration leaves.
// Purpose: Recover plaintext from ciphertext leaves keyed by an obscuring key.
// Dependencies: crate::core::value, base64
// ============================================================================

//! ## Overview
//! Locally supplied trees may wrap sensitive leaves (license keys, proxy
//! passwords) as obscured ciphertext: base64 text whose decoded bytes are
//! XOR-ed with the obscuring key's bytes, cycled. Decoding walks the tree
//! bottom-up so obscured leaves nested inside lists and maps are replaced
//! individually while non-obscured siblings pass through untouched.
//!
//! Decoding never fails: with a missing or empty key, undecodable base64,
//! or non-UTF-8 plaintext the wrapper stays in place and downstream lookups
//! treat it as unavailable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::core::value::ConfigValue;

// ============================================================================
// SECTION: Codec
// ============================================================================

/// Replaces every decodable obscured leaf in `value` with its plaintext.
#[must_use]
pub fn deobscure(value: ConfigValue, key: &str) -> ConfigValue {
    match value {
        ConfigValue::Obscured(ciphertext) => match decode(&ciphertext, key) {
            Some(plaintext) => ConfigValue::Str(plaintext),
            None => ConfigValue::Obscured(ciphertext),
        },
        ConfigValue::List(items) => ConfigValue::List(
            items.into_iter().map(|item| deobscure(item, key)).collect(),
        ),
        ConfigValue::Map(entries) => ConfigValue::Map(
            entries
                .into_iter()
                .map(|(name, item)| (name, deobscure(item, key)))
                .collect(),
        ),
        scalar => scalar,
    }
}

/// Produces the ciphertext form of `plaintext` under `key`.
///
/// The inverse of [`deobscure`] for a single leaf; returns `None` for an
/// empty key, for which no reversible encoding exists.
#[must_use]
pub fn obscure(plaintext: &str, key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    Some(BASE64.encode(xor_with_key(plaintext.as_bytes(), key)))
}

/// Decodes one ciphertext leaf; `None` leaves the wrapper in place.
fn decode(ciphertext: &str, key: &str) -> Option<String> {
    if key.is_empty() {
        return None;
    }
    let bytes = BASE64.decode(ciphertext).ok()?;
    String::from_utf8(xor_with_key(&bytes, key)).ok()
}

/// XORs `bytes` with the key's bytes, cycling the key.
fn xor_with_key(bytes: &[u8], key: &str) -> Vec<u8> {
    bytes
        .iter()
        .zip(key.as_bytes().iter().cycle())
        .map(|(byte, key_byte)| byte ^ key_byte)
        .collect()
}
