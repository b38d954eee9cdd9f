//! Raw configuration document
//!
//! The serializable shape of a Pharos configuration before validation:
//! top-level `settings`, `passes`, `audits`, `groups`, and `categories`
//! keys, loadable from TOML (`pharos.toml`) or JSON (`.pharosrc.json`).
//! Validation into a typed [`ConfigModel`](super::ConfigModel) happens in
//! [`config::model`](super::model); nothing here is trusted yet.

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Run-level settings, including the filters the resolver applies after
/// merging (narrowing a run to some categories or audits).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Maximum time to wait for the page to load, in milliseconds
    pub max_wait_for_load_ms: u64,
    /// Keep only these categories (and the audits they reference)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_categories: Option<Vec<String>>,
    /// Keep only these audits within the remaining categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_audits: Option<Vec<String>>,
    /// Drop these audits from every category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_audits: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_wait_for_load_ms: 45_000,
            only_categories: None,
            only_audits: None,
            skip_audits: None,
        }
    }
}

/// One collection pass: an ordered set of gatherers sharing execution
/// parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPass {
    pub pass_name: String,
    /// Marks the primary pass. At most one pass may set this; when no pass
    /// does, the first pass is primary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    pub record_trace: bool,
    pub use_throttling: bool,
    pub pause_after_load_ms: u64,
    pub network_quiet_threshold_ms: u64,
    pub cpu_quiet_threshold_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocked_url_patterns: Vec<String>,
    pub gatherers: Vec<String>,
}

/// Display-only clustering of audits within a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawGroup {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Weighted link from a category to an audit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawAuditRef {
    pub id: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A top-level scored rollup of weighted audit references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_description: Option<String>,
    /// Order is display-relevant (drives group render order), not
    /// scoring-relevant
    pub audit_refs: Vec<RawAuditRef>,
}

/// The whole unvalidated configuration document.
///
/// Categories keep their declaration order (`IndexMap`): the report
/// renders them in the order the document lists them. Groups sort by id
/// (`BTreeMap`); their render order comes from `auditRefs`, not the map.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConfig {
    pub settings: Settings,
    pub passes: Vec<RawPass>,
    /// Audit ids or `dir/`-prefixed paths; the ref id is the final segment
    pub audits: Vec<String>,
    pub groups: BTreeMap<String, RawGroup>,
    pub categories: IndexMap<String, RawCategory>,
}

impl RawConfig {
    /// Serialize as pretty JSON (the `pharos config` output)
    pub fn to_json_string(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load a raw configuration from a file, dispatching on extension.
///
/// `.toml` parses as TOML; anything else is treated as JSON.
pub fn load_config(path: &Path) -> anyhow::Result<RawConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let config = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&content)
            .with_context(|| format!("invalid TOML config in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON config in {}", path.display()))?
    };

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Extract the ref id from an audit or gatherer path
/// (`metrics/first-contentful-paint` -> `first-contentful-paint`).
pub fn id_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
