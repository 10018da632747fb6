// crates/strata-core/tests/coercion.rs
// =============================================================================
// Module: Coercion Tests
// Description: Shape-dispatched conversion rules for raw values.
// Purpose: Pin the miss-never-error contract across every target type.
// =============================================================================

//! Coercion tests for scalar and collection targets.

use std::collections::BTreeSet;
use std::time::Duration;

use strata_core::ConfigValue;
use strata_core::coerce;

type TestResult = Result<(), String>;

#[test]
fn bool_accepts_literals_and_true_insensitive_strings() -> TestResult {
    if coerce::as_bool(&ConfigValue::Bool(true)) != Some(true) {
        return Err("expected a boolean literal to pass through".to_string());
    }
    if coerce::as_bool(&ConfigValue::Str("TRUE".to_string())) != Some(true) {
        return Err("expected case-insensitive true to coerce".to_string());
    }
    if coerce::as_bool(&ConfigValue::Str(" true ".to_string())) != Some(true) {
        return Err("expected surrounding whitespace to be ignored".to_string());
    }
    Ok(())
}

#[test]
fn bool_maps_every_other_string_to_false() -> TestResult {
    for text in ["", "yes", "1", "false", "TRUEish"] {
        if coerce::as_bool(&ConfigValue::Str(text.to_string())) != Some(false) {
            return Err(format!("expected '{text}' to coerce to false"));
        }
    }
    Ok(())
}

#[test]
fn bool_misses_on_non_boolean_non_string_shapes() -> TestResult {
    if coerce::as_bool(&ConfigValue::Int(1)).is_some() {
        return Err("expected an integer to miss for a boolean target".to_string());
    }
    if coerce::as_bool(&ConfigValue::List(Vec::new())).is_some() {
        return Err("expected a list to miss for a boolean target".to_string());
    }
    Ok(())
}

#[test]
fn integer_truncates_fractional_input_toward_zero() -> TestResult {
    if coerce::as_i64(&ConfigValue::Float(3.9)) != Some(3) {
        return Err("expected 3.9 to truncate to 3".to_string());
    }
    if coerce::as_i64(&ConfigValue::Float(-3.9)) != Some(-3) {
        return Err("expected -3.9 to truncate to -3".to_string());
    }
    if coerce::as_i64(&ConfigValue::Str(" 42 ".to_string())) != Some(42) {
        return Err("expected a trimmed numeric string to parse".to_string());
    }
    if coerce::as_i64(&ConfigValue::Str("forty-two".to_string())).is_some() {
        return Err("expected a non-numeric string to miss".to_string());
    }
    Ok(())
}

#[test]
fn integer_rejects_out_of_range_and_non_finite_floats() -> TestResult {
    if coerce::as_i64(&ConfigValue::Float(f64::NAN)).is_some() {
        return Err("expected NaN to miss".to_string());
    }
    if coerce::as_i64(&ConfigValue::Float(f64::INFINITY)).is_some() {
        return Err("expected infinity to miss".to_string());
    }
    if coerce::as_i64(&ConfigValue::Float(1.0e30)).is_some() {
        return Err("expected an out-of-range float to miss".to_string());
    }
    Ok(())
}

#[test]
fn string_trims_and_stringifies_scalars_only() -> TestResult {
    if coerce::as_string(&ConfigValue::Str("  padded  ".to_string())).as_deref() != Some("padded")
    {
        return Err("expected string input to be trimmed".to_string());
    }
    if coerce::as_string(&ConfigValue::Int(7)).as_deref() != Some("7") {
        return Err("expected an integer to stringify".to_string());
    }
    if coerce::as_string(&ConfigValue::Obscured("bm9wZQ==".to_string())).is_some() {
        return Err("expected an undecoded leaf to miss".to_string());
    }
    if coerce::as_string(&ConfigValue::List(Vec::new())).is_some() {
        return Err("expected a list to miss for a string target".to_string());
    }
    Ok(())
}

#[test]
fn duration_accepts_non_negative_second_counts() -> TestResult {
    if coerce::as_duration(&ConfigValue::Int(30)) != Some(Duration::from_secs(30)) {
        return Err("expected an integral second count".to_string());
    }
    if coerce::as_duration(&ConfigValue::Float(1.5)) != Some(Duration::from_millis(1_500)) {
        return Err("expected a fractional second count".to_string());
    }
    if coerce::as_duration(&ConfigValue::Str("2.5".to_string()))
        != Some(Duration::from_millis(2_500))
    {
        return Err("expected a numeric string second count".to_string());
    }
    if coerce::as_duration(&ConfigValue::Float(-1.0)).is_some() {
        return Err("expected a negative count to miss".to_string());
    }
    Ok(())
}

#[test]
fn int_set_normalizes_mixed_width_list_elements() -> TestResult {
    let raw = ConfigValue::List(vec![
        ConfigValue::Int(403),
        ConfigValue::Float(404.0),
        ConfigValue::Str("405".to_string()),
        ConfigValue::Str("not-a-code".to_string()),
    ]);
    let expected: BTreeSet<i64> = BTreeSet::from([403, 404, 405]);
    if coerce::as_int_set(&raw) != Some(expected) {
        return Err("expected mixed-width elements to normalize to one set".to_string());
    }
    Ok(())
}

#[test]
fn int_set_splits_delimited_strings_and_skips_junk() -> TestResult {
    let raw = ConfigValue::Str("403,404, 405,,406".to_string());
    let expected: BTreeSet<i64> = BTreeSet::from([403, 404, 405, 406]);
    if coerce::as_int_set(&raw) != Some(expected) {
        return Err("expected trimmed tokens with empties dropped".to_string());
    }

    let junk = ConfigValue::Str("a,7,b".to_string());
    if coerce::as_int_set(&junk) != Some(BTreeSet::from([7])) {
        return Err("expected unparsable tokens to be skipped, not fail".to_string());
    }
    Ok(())
}

#[test]
fn int_set_treats_a_lone_number_as_a_singleton() -> TestResult {
    if coerce::as_int_set(&ConfigValue::Int(503)) != Some(BTreeSet::from([503])) {
        return Err("expected a lone integer to become a singleton set".to_string());
    }
    Ok(())
}

#[test]
fn unique_strings_dedupe_preserving_first_seen_order() -> TestResult {
    let raw = ConfigValue::Str("z;z;a;b".to_string());
    let names = coerce::as_unique_strings(&raw, coerce::SEMICOLON_SEPARATOR)
        .ok_or_else(|| "expected a delimited string to split".to_string())?;
    if names != ["z", "a", "b"] {
        return Err(format!("expected first-seen order, got {}", names.join(";")));
    }
    Ok(())
}

#[test]
fn unique_strings_trim_and_drop_empty_tokens() -> TestResult {
    let raw = ConfigValue::Str(" a , ,b,a ".to_string());
    let names = coerce::as_unique_strings(&raw, coerce::COMMA_SEPARATOR)
        .ok_or_else(|| "expected a delimited string to split".to_string())?;
    if names != ["a", "b"] {
        return Err(format!("expected trimmed unique tokens, got {}", names.join(",")));
    }
    Ok(())
}

#[test]
fn unique_strings_accept_lists_and_miss_on_maps() -> TestResult {
    let raw = ConfigValue::List(vec![
        ConfigValue::Str("alpha".to_string()),
        ConfigValue::Int(2),
        ConfigValue::Str("alpha".to_string()),
    ]);
    let names = coerce::as_unique_strings(&raw, coerce::COMMA_SEPARATOR)
        .ok_or_else(|| "expected a scalar list to normalize".to_string())?;
    if names != ["alpha", "2"] {
        return Err(format!("expected normalized elements, got {}", names.join(",")));
    }
    if coerce::as_unique_strings(&ConfigValue::empty_map(), coerce::COMMA_SEPARATOR).is_some() {
        return Err("expected a map to miss for a string-list target".to_string());
    }
    Ok(())
}
