// crates/strata-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for resolution engine tests.
// Purpose: Reduce duplication across integration tests for strata-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::Arc;

use serde_json::Value as JsonValue;
use strata_config::Settings;
use strata_core::ConfigValue;
use strata_core::NamespaceRoot;
use strata_core::StaticEnvironment;

/// Property prefix used by every test fixture.
pub const PROPERTY_ROOT: &str = "agent.config.";

/// Environment-variable prefix used by every test fixture.
pub const ENV_PREFIX: &str = "STRATA_";

/// Builds the fixture namespace root.
pub fn root() -> Result<NamespaceRoot, String> {
    NamespaceRoot::new(PROPERTY_ROOT, ENV_PREFIX).map_err(|err| err.to_string())
}

/// Bootstraps a settings view from a JSON local tree and a host provider.
pub fn settings_with_host(
    local: JsonValue,
    host: StaticEnvironment,
) -> Result<Settings, String> {
    Settings::bootstrap(ConfigValue::from(local), Arc::new(host), root()?)
        .map_err(|err| err.to_string())
}

/// Bootstraps a settings view with an empty host environment.
pub fn settings_from_json(local: JsonValue) -> Result<Settings, String> {
    settings_with_host(local, StaticEnvironment::new())
}
