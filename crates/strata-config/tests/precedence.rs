// crates/strata-config/tests/precedence.rs
// =============================================================================
// Module: Precedence Tests
// Description: Source ordering across environment, property, local, remote.
// Purpose: Pin the first-hit-wins walk and the local-shadows-remote rule.
// =============================================================================

//! Precedence tests for the layered source walk.

use serde_json::json;
use strata_config::Setting;
use strata_config::SourceKind;
use strata_core::ConfigValue;
use strata_core::StaticEnvironment;

mod common;

type TestResult = Result<(), String>;

#[test]
fn env_var_beats_property_local_remote_and_default() -> TestResult {
    let host = StaticEnvironment::new()
        .with_env_var("STRATA_SAMPLER_TARGET", "10")
        .with_property("agent.config.sampler.target", "20");
    let settings =
        common::settings_with_host(json!({ "sampler": { "target": 30 } }), host)?;
    settings.publish_remote(ConfigValue::from(json!({ "sampler": { "target": 40 } })));

    let resolved = settings.resolve(&Setting::new("sampler.target", 50_i64));
    if resolved.value != 10 {
        return Err(format!("expected env value 10, got {}", resolved.value));
    }
    if resolved.source != SourceKind::Environment {
        return Err(format!("expected environment source, got {}", resolved.source));
    }
    Ok(())
}

#[test]
fn property_beats_local_remote_and_default() -> TestResult {
    let host = StaticEnvironment::new().with_property("agent.config.sampler.target", "20");
    let settings =
        common::settings_with_host(json!({ "sampler": { "target": 30 } }), host)?;
    settings.publish_remote(ConfigValue::from(json!({ "sampler": { "target": 40 } })));

    let resolved = settings.resolve(&Setting::new("sampler.target", 50_i64));
    if resolved.value != 20 || resolved.source != SourceKind::SystemProperty {
        return Err(format!(
            "expected property value 20, got {} from {}",
            resolved.value, resolved.source
        ));
    }
    Ok(())
}

#[test]
fn local_beats_remote_regardless_of_push_ordering() -> TestResult {
    let settings = common::settings_from_json(json!({ "sampler": { "target": 30 } }))?;
    settings.publish_remote(ConfigValue::from(json!({ "sampler": { "target": 40 } })));

    let resolved = settings.resolve(&Setting::new("sampler.target", 50_i64));
    if resolved.value != 30 || resolved.source != SourceKind::Local {
        return Err(format!(
            "expected local value 30, got {} from {}",
            resolved.value, resolved.source
        ));
    }
    Ok(())
}

#[test]
fn remote_fills_in_when_local_is_silent() -> TestResult {
    let settings = common::settings_from_json(json!({}))?;
    settings.publish_remote(ConfigValue::from(json!({ "sampler": { "target": 40 } })));

    let resolved = settings.resolve(&Setting::new("sampler.target", 50_i64));
    if resolved.value != 40 || resolved.source != SourceKind::RemotePush {
        return Err(format!(
            "expected remote value 40, got {} from {}",
            resolved.value, resolved.source
        ));
    }
    Ok(())
}

#[test]
fn local_only_setting_never_observes_a_push() -> TestResult {
    let settings = common::settings_from_json(json!({}))?;
    settings.publish_remote(ConfigValue::from(json!({ "sampler": { "target": 40 } })));

    let resolved = settings.resolve(&Setting::new("sampler.target", 50_i64).local_only());
    if resolved.value != 50 || resolved.source != SourceKind::Default {
        return Err(format!(
            "expected default 50, got {} from {}",
            resolved.value, resolved.source
        ));
    }
    Ok(())
}

#[test]
fn default_wins_when_every_source_misses() -> TestResult {
    let settings = common::settings_from_json(json!({}))?;
    let resolved = settings.resolve(&Setting::new("sampler.target", 50_i64));
    if resolved.value != 50 || resolved.source != SourceKind::Default {
        return Err(format!(
            "expected default 50, got {} from {}",
            resolved.value, resolved.source
        ));
    }
    Ok(())
}

#[test]
fn uncoercible_env_text_falls_through_to_local() -> TestResult {
    let host = StaticEnvironment::new().with_env_var("STRATA_SAMPLER_TARGET", "not-a-number");
    let settings =
        common::settings_with_host(json!({ "sampler": { "target": 30 } }), host)?;

    let resolved = settings.resolve(&Setting::new("sampler.target", 50_i64));
    if resolved.value != 30 || resolved.source != SourceKind::Local {
        return Err(format!(
            "expected local fallback 30, got {} from {}",
            resolved.value, resolved.source
        ));
    }
    Ok(())
}

#[test]
fn nested_view_composes_env_spelling_without_double_prefix() -> TestResult {
    let host = StaticEnvironment::new()
        .with_env_var("STRATA_INFINITE_TRACING_SPAN_EVENTS_QUEUE_SIZE", "9");
    let settings = common::settings_with_host(json!({}), host)?;
    let span_events = settings.nested("infinite_tracing").nested("span_events");

    let resolved = span_events.resolve(&Setting::new("queue_size", 5_i64));
    if resolved.value != 9 || resolved.source != SourceKind::Environment {
        return Err(format!(
            "expected env value 9, got {} from {}",
            resolved.value, resolved.source
        ));
    }
    Ok(())
}

#[test]
fn nested_view_reads_local_subtree() -> TestResult {
    let settings = common::settings_from_json(json!({
        "aws": { "fargate_metadata_proxy_bypass_enabled": true }
    }))?;
    let aws = settings.nested("aws");
    if !aws.get_bool("fargate_metadata_proxy_bypass_enabled", false) {
        return Err("expected nested local boolean to resolve true".to_string());
    }

    let empty = common::settings_from_json(json!({}))?;
    if empty
        .nested("aws")
        .get_bool("fargate_metadata_proxy_bypass_enabled", false)
    {
        return Err("expected empty map to resolve the default false".to_string());
    }
    Ok(())
}

#[test]
fn empty_string_resolves_false_for_boolean_targets() -> TestResult {
    let settings = common::settings_from_json(json!({ "agent_enabled": "" }))?;
    if settings.get_bool("agent_enabled", true) {
        return Err("expected empty string to coerce to false, not error".to_string());
    }
    Ok(())
}

#[test]
fn value_at_accepts_hyphenated_spelling() -> TestResult {
    let settings = common::settings_from_json(json!({
        "transaction_tracer": { "record_sql": "obfuscated" }
    }))?;
    match settings.value_at("transaction-tracer.record-sql") {
        Some(ConfigValue::Str(text)) if text == "obfuscated" => Ok(()),
        Some(_) => Err("expected the raw string spelling to survive lookup".to_string()),
        None => Err("expected hyphenated lookup to hit".to_string()),
    }
}
