// crates/strata-config/src/resolver.rs
// ============================================================================
// Module: Layered Resolution
// Description: Setting descriptors, precedence walk, and typed getters.
// Purpose: Resolve one logical setting across the four competing sources.
// Dependencies: crate::{policy, snapshot, source}, strata-core
// ============================================================================

//! ## Overview
//! A [`Setting`] describes one logical configuration value: its key path,
//! its built-in default, whether the remote controller may supply it, and
//! the safe value forced under high security. A [`Settings`] view resolves
//! descriptors against the live environment, the system-property table, the
//! local snapshot, and the remote snapshot — in that order, first well-typed
//! hit wins. A present-but-uncoercible value at a layer is a miss and the
//! walk advances; a present local value always shadows the remote layer,
//! whatever its type.
//!
//! Views are cheap to clone and to nest. [`Settings::nested`] extends the
//! tree prefix and composes the namespace root; the underlying store stays
//! shared, so child views observe controller pushes made after they were
//! built. Every read re-runs resolution — nothing is cached across source
//! changes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use strata_core::ConfigValue;
use strata_core::FromConfigValue;
use strata_core::HostEnvironment;
use strata_core::KeyPath;
use strata_core::NamespaceRoot;
use strata_core::coerce;
use strata_core::deobscure;

use crate::error::ConfigError;
use crate::limit::ResettableLimit;
use crate::policy::SecurityGate;
use crate::snapshot::SettingsStore;
use crate::source;
use crate::source::SourceKind;

// ============================================================================
// SECTION: Well-Known Paths
// ============================================================================

/// Path of the process-wide high-security flag.
pub const HIGH_SECURITY: &str = "high_security";

/// Path of the remote security-policies token.
pub const SECURITY_POLICIES_TOKEN: &str = "security_policies_token";

/// Path of the obscuring key used to decode obscured local leaves.
pub const OBSCURING_KEY: &str = "obscuring.obscuring_key";

// ============================================================================
// SECTION: Setting Descriptor
// ============================================================================

/// Descriptor for one logical configuration value.
#[derive(Debug, Clone)]
pub struct Setting<T> {
    /// Key path relative to the view that resolves the setting.
    path: KeyPath,
    /// Value returned when every source misses.
    default: T,
    /// Whether a remote push may supply the value.
    remote_overridable: bool,
    /// Safe value forced when high security is active.
    safe_value: Option<T>,
}

impl<T> Setting<T> {
    /// Creates a remote-overridable setting with the given default.
    #[must_use]
    pub fn new(path: impl Into<KeyPath>, default: T) -> Self {
        Self {
            path: path.into(),
            default,
            remote_overridable: true,
            safe_value: None,
        }
    }

    /// Excludes the remote layer: pushes for this path are never observed.
    #[must_use]
    pub fn local_only(mut self) -> Self {
        self.remote_overridable = false;
        self
    }

    /// Marks the setting security-sensitive with the value forced under
    /// high security.
    #[must_use]
    pub fn secured(mut self, safe_value: T) -> Self {
        self.safe_value = Some(safe_value);
        self
    }

    /// Returns the relative key path.
    #[must_use]
    pub const fn path(&self) -> &KeyPath {
        &self.path
    }

    /// Returns the built-in default.
    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns true when the remote layer may supply the value.
    #[must_use]
    pub const fn remote_overridable(&self) -> bool {
        self.remote_overridable
    }

    /// Returns the safe value, when the setting is security-sensitive.
    #[must_use]
    pub const fn safe_value(&self) -> Option<&T> {
        self.safe_value.as_ref()
    }
}

// ============================================================================
// SECTION: Resolution Result
// ============================================================================

/// Immutable per-read resolution result.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    /// Resolved value.
    pub value: T,
    /// Layer that supplied the value.
    pub source: SourceKind,
    /// Absolute key path of the setting within the tree.
    pub path: KeyPath,
}

// ============================================================================
// SECTION: Settings View
// ============================================================================

/// Resolution view over a shared settings store.
#[derive(Clone)]
pub struct Settings {
    /// Shared local/remote snapshot holder.
    store: Arc<SettingsStore>,
    /// Live host environment provider.
    host: Arc<dyn HostEnvironment>,
    /// Namespace root for this view's layer spellings.
    root: NamespaceRoot,
    /// Absolute prefix of this view within the trees.
    prefix: KeyPath,
    /// Security posture evaluated at bootstrap.
    gate: SecurityGate,
}

impl Settings {
    /// Builds the root settings view from a locally supplied tree.
    ///
    /// Bootstrap resolves the obscuring key through the environment,
    /// property, and local layers, deobscures the local tree, and evaluates
    /// the security gate from the resolved high-security flag and
    /// security-policies token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PolicyContradiction`] when the resolved
    /// policy settings are contradictory; this is terminal and must abort
    /// startup.
    pub fn bootstrap(
        local: ConfigValue,
        host: Arc<dyn HostEnvironment>,
        root: NamespaceRoot,
    ) -> Result<Self, ConfigError> {
        let local = deobscure_with_resolved_key(host.as_ref(), &root, local);
        let high_security = layered_value(
            host.as_ref(),
            &root,
            &local,
            &KeyPath::parse(HIGH_SECURITY),
        )
        .and_then(|raw| coerce::as_bool(&raw))
        .unwrap_or(false);
        let token = layered_value(
            host.as_ref(),
            &root,
            &local,
            &KeyPath::parse(SECURITY_POLICIES_TOKEN),
        )
        .and_then(|raw| coerce::as_string(&raw));
        let gate = SecurityGate::evaluate(high_security, token.as_deref())?;
        Ok(Self {
            store: Arc::new(SettingsStore::new(local)),
            host,
            root,
            prefix: KeyPath::default(),
            gate,
        })
    }

    /// Returns a child view for the subtree at `segment`.
    ///
    /// The namespace root composes so the child's environment and property
    /// spellings extend this view's prefixes; the store stays shared.
    #[must_use]
    pub fn nested(&self, segment: &str) -> Self {
        let sub = KeyPath::parse(segment);
        Self {
            store: Arc::clone(&self.store),
            host: Arc::clone(&self.host),
            root: self.root.child(&sub),
            prefix: self.prefix.extended(&sub),
            gate: self.gate,
        }
    }

    /// Returns the shared snapshot store.
    #[must_use]
    pub fn store(&self) -> Arc<SettingsStore> {
        Arc::clone(&self.store)
    }

    /// Returns the evaluated security gate.
    #[must_use]
    pub const fn gate(&self) -> &SecurityGate {
        &self.gate
    }

    /// Atomically replaces the remote tree with a controller push.
    pub fn publish_remote(&self, tree: ConfigValue) {
        self.store.publish_remote(tree);
    }

    /// Atomically replaces the local tree after a configuration reload.
    ///
    /// The obscuring key is re-resolved against the incoming tree before
    /// publication. Intended for the root view; the tree is always
    /// addressed from the top regardless of this view's prefix.
    pub fn reload_local(&self, tree: ConfigValue) {
        let tree = deobscure_with_resolved_key(self.host.as_ref(), &self.root, tree);
        self.store.publish_local(tree);
    }

    // ========================================================================
    // SECTION: Resolution
    // ========================================================================

    /// Resolves a setting descriptor to a value with source attribution.
    pub fn resolve<T>(&self, setting: &Setting<T>) -> Resolved<T>
    where
        T: FromConfigValue + Clone,
    {
        let path = self.prefix.extended(setting.path());
        if self.gate.high_security()
            && let Some(safe) = setting.safe_value()
        {
            return Resolved {
                value: safe.clone(),
                source: SourceKind::SecurityPolicy,
                path,
            };
        }
        let remote_ok = setting.remote_overridable() && self.gate.allows_remote();
        self.walk(setting.path(), remote_ok, &T::from_config)
            .map_or_else(
                || Resolved {
                    value: setting.default_value().clone(),
                    source: SourceKind::Default,
                    path: path.clone(),
                },
                |(value, source)| Resolved {
                    value,
                    source,
                    path: path.clone(),
                },
            )
    }

    /// Resolves a setting descriptor to its value alone.
    pub fn get<T>(&self, setting: &Setting<T>) -> T
    where
        T: FromConfigValue + Clone,
    {
        self.resolve(setting).value
    }

    /// Resolves a de-duplicated string list split on `separator`.
    #[must_use]
    pub fn resolve_unique_strings(&self, path: &str, separator: &str) -> Resolved<Vec<String>> {
        let relative = KeyPath::parse(path);
        let absolute = self.prefix.extended(&relative);
        let split = |raw: &ConfigValue| coerce::as_unique_strings(raw, separator);
        self.walk(&relative, self.gate.allows_remote(), &split)
            .map_or_else(
                || Resolved {
                    value: Vec::new(),
                    source: SourceKind::Default,
                    path: absolute.clone(),
                },
                |(value, source)| Resolved {
                    value,
                    source,
                    path: absolute.clone(),
                },
            )
    }

    /// Returns the raw value at a flattened dotted path, from any layer.
    ///
    /// Hyphens normalize to underscores before the verbatim spelling is
    /// tried, matching the canonical underscore-separated key style.
    #[must_use]
    pub fn value_at(&self, dotted: &str) -> Option<ConfigValue> {
        let keep = |raw: &ConfigValue| Some(raw.clone());
        let normalized = KeyPath::parse(dotted).normalize_hyphens();
        let remote_ok = self.gate.allows_remote();
        self.walk(&normalized, remote_ok, &keep)
            .or_else(|| {
                let verbatim = KeyPath::parse(dotted);
                if verbatim == normalized {
                    None
                } else {
                    self.walk(&verbatim, remote_ok, &keep)
                }
            })
            .map(|(value, _)| value)
    }

    // ========================================================================
    // SECTION: Convenience Getters
    // ========================================================================

    /// Resolves a boolean setting.
    #[must_use]
    pub fn get_bool(&self, path: &str, default: bool) -> bool {
        self.get(&Setting::new(path, default))
    }

    /// Resolves an integer setting.
    #[must_use]
    pub fn get_i64(&self, path: &str, default: i64) -> i64 {
        self.get(&Setting::new(path, default))
    }

    /// Resolves a float setting.
    #[must_use]
    pub fn get_f64(&self, path: &str, default: f64) -> f64 {
        self.get(&Setting::new(path, default))
    }

    /// Resolves a string setting.
    #[must_use]
    pub fn get_str(&self, path: &str, default: &str) -> String {
        self.get(&Setting::new(path, default.to_string()))
    }

    /// Resolves an optional string setting; `None` when every source misses.
    #[must_use]
    pub fn get_opt_str(&self, path: &str) -> Option<String> {
        self.walk(
            &KeyPath::parse(path),
            self.gate.allows_remote(),
            &coerce::as_string,
        )
        .map(|(value, _)| value)
    }

    /// Resolves a duration setting expressed as a second count.
    #[must_use]
    pub fn get_duration(&self, path: &str, default: Duration) -> Duration {
        self.get(&Setting::new(path, default))
    }

    /// Resolves an integer-set setting.
    #[must_use]
    pub fn get_int_set(&self, path: &str, default: BTreeSet<i64>) -> BTreeSet<i64> {
        self.get(&Setting::new(path, default))
    }

    /// Resolves a de-duplicated string list split on `separator`.
    #[must_use]
    pub fn get_unique_strings(&self, path: &str, separator: &str) -> Vec<String> {
        self.resolve_unique_strings(path, separator).value
    }

    /// Snapshots an integer setting into a push-resettable limit.
    #[must_use]
    pub fn limit(&self, setting: &Setting<i64>) -> ResettableLimit {
        ResettableLimit::new(self.get(setting))
    }

    // ========================================================================
    // SECTION: Source Walk
    // ========================================================================

    /// Walks the ordered sources for `path`, returning the first well-typed
    /// hit with its source tag.
    ///
    /// A present-but-uncoercible value is a miss for that layer, except that
    /// a present local value — coercible or not — shadows the remote layer
    /// entirely.
    fn walk<T>(
        &self,
        path: &KeyPath,
        remote_ok: bool,
        coerce: &dyn Fn(&ConfigValue) -> Option<T>,
    ) -> Option<(T, SourceKind)> {
        if let Some(raw) = source::env_layer(self.host.as_ref(), &self.root, path)
            && let Some(value) = coerce(&raw)
        {
            return Some((value, SourceKind::Environment));
        }
        if let Some(raw) = source::property_layer(self.host.as_ref(), &self.root, path)
            && let Some(value) = coerce(&raw)
        {
            return Some((value, SourceKind::SystemProperty));
        }
        let tree_path = self.prefix.extended(path);
        let local = self.store.local();
        match local.at(&tree_path) {
            Some(raw) => {
                if let Some(value) = coerce(raw) {
                    return Some((value, SourceKind::Local));
                }
            }
            None => {
                if remote_ok {
                    let remote = self.store.remote();
                    if let Some(raw) = remote.at(&tree_path)
                        && let Some(value) = coerce(raw)
                    {
                        return Some((value, SourceKind::RemotePush));
                    }
                }
            }
        }
        None
    }
}

// ============================================================================
// SECTION: Bootstrap Helpers
// ============================================================================

/// Resolves a pre-gate value directly: environment, then property, then the
/// raw tree. Used before a store or gate exists.
fn layered_value(
    host: &dyn HostEnvironment,
    root: &NamespaceRoot,
    tree: &ConfigValue,
    path: &KeyPath,
) -> Option<ConfigValue> {
    source::env_layer(host, root, path)
        .or_else(|| source::property_layer(host, root, path))
        .or_else(|| tree.at(path).cloned())
}

/// Resolves the obscuring key and deobscures `tree` when one is present.
fn deobscure_with_resolved_key(
    host: &dyn HostEnvironment,
    root: &NamespaceRoot,
    tree: ConfigValue,
) -> ConfigValue {
    let key = layered_value(host, root, &tree, &KeyPath::parse(OBSCURING_KEY))
        .and_then(|raw| coerce::as_string(&raw));
    match key {
        Some(key) if !key.is_empty() => deobscure(tree, &key),
        _ => tree,
    }
}
