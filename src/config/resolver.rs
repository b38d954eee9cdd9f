//! Configuration extension and merge semantics
//!
//! A base configuration plus an ordered sequence of override fragments
//! resolve into one final [`ConfigModel`]. Later fragments win on
//! conflicting scalar fields; validation runs once on the merged result,
//! so an invalid merge fails before any audit executes.
//!
//! Per-collection strategies:
//! - `replace` - the fragment's list entirely supersedes the base's
//! - `append` - fragment entries are added; duplicate ids are rejected
//! - `merge-by-id` - (groups/categories) same-id entries deep-merge:
//!   scalar fields override when present, `auditRefs` concatenate with a
//!   later duplicate `(id, group)` pair replacing the earlier weight
//!   instead of duplicating the entry

use crate::config::model::{ConfigError, ConfigModel, EntityKind};
use crate::config::raw::{RawAuditRef, RawCategory, RawConfig, RawGroup, RawPass};
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// How one collection in a fragment combines with the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    Replace,
    Append,
    #[default]
    MergeById,
}

/// Per-collection strategy choices for one fragment.
///
/// Lists (passes, audits) default to `append`; keyed collections (groups,
/// categories) default to `merge-by-id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeRules {
    pub passes: MergeStrategy,
    pub audits: MergeStrategy,
    pub groups: MergeStrategy,
    pub categories: MergeStrategy,
}

impl Default for MergeRules {
    fn default() -> Self {
        Self {
            passes: MergeStrategy::Append,
            audits: MergeStrategy::Append,
            groups: MergeStrategy::MergeById,
            categories: MergeStrategy::MergeById,
        }
    }
}

/// Settings overrides; only present fields replace the base values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub max_wait_for_load_ms: Option<u64>,
    pub only_categories: Option<Vec<String>>,
    pub only_audits: Option<Vec<String>>,
    pub skip_audits: Option<Vec<String>>,
}

/// Group override; absent fields keep the base values under `merge-by-id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Category override. `audit_refs` concatenate onto the base refs under
/// `merge-by-id`; under `replace`/`append` they are the full entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub manual_description: Option<String>,
    pub audit_refs: Vec<RawAuditRef>,
}

/// One override fragment. Absent collections leave the base untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFragment {
    pub merge: MergeRules,
    pub settings: Option<SettingsPatch>,
    pub passes: Option<Vec<RawPass>>,
    pub audits: Option<Vec<String>>,
    pub groups: Option<BTreeMap<String, GroupPatch>>,
    /// Declaration-ordered: new categories append in fragment order
    pub categories: Option<IndexMap<String, CategoryPatch>>,
}

/// Merge `overrides` onto `base` in sequence order, apply the settings
/// filters, and validate the result.
pub fn resolve(base: RawConfig, overrides: &[ConfigFragment]) -> Result<ConfigModel, ConfigError> {
    ConfigModel::validate(resolve_raw(base, overrides)?)
}

/// Merge and filter without validating, keeping the document form.
/// Used to inspect the resolved configuration (`pharos config`).
pub fn resolve_raw(
    base: RawConfig,
    overrides: &[ConfigFragment],
) -> Result<RawConfig, ConfigError> {
    let mut merged = base;
    for (i, fragment) in overrides.iter().enumerate() {
        debug!("Applying config fragment {}", i + 1);
        apply_fragment(&mut merged, fragment)?;
    }
    apply_settings_filters(&mut merged);
    Ok(merged)
}

/// Resolve the built-in default configuration with the given overrides.
pub fn resolve_default(overrides: &[ConfigFragment]) -> Result<ConfigModel, ConfigError> {
    resolve(crate::config::default_config(), overrides)
}

/// Load an override fragment from a file. `.toml` parses as TOML;
/// anything else is treated as JSON.
pub fn load_fragment(path: &Path) -> anyhow::Result<ConfigFragment> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let fragment = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&content)
            .with_context(|| format!("invalid TOML config in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON config in {}", path.display()))?
    };

    debug!("Loaded config fragment from {}", path.display());
    Ok(fragment)
}

fn apply_fragment(base: &mut RawConfig, fragment: &ConfigFragment) -> Result<(), ConfigError> {
    if let Some(patch) = &fragment.settings {
        if let Some(v) = patch.max_wait_for_load_ms {
            base.settings.max_wait_for_load_ms = v;
        }
        if let Some(v) = &patch.only_categories {
            base.settings.only_categories = Some(v.clone());
        }
        if let Some(v) = &patch.only_audits {
            base.settings.only_audits = Some(v.clone());
        }
        if let Some(v) = &patch.skip_audits {
            base.settings.skip_audits = Some(v.clone());
        }
    }

    if let Some(passes) = &fragment.passes {
        match fragment.merge.passes {
            MergeStrategy::Replace => base.passes = passes.clone(),
            // Passes have no deep-merge shape; merge-by-id appends too,
            // with name collisions rejected either way
            MergeStrategy::Append | MergeStrategy::MergeById => {
                for pass in passes {
                    if base.passes.iter().any(|p| p.pass_name == pass.pass_name) {
                        return Err(ConfigError::DuplicateId {
                            kind: EntityKind::Pass,
                            id: pass.pass_name.clone(),
                        });
                    }
                    base.passes.push(pass.clone());
                }
            }
        }
    }

    if let Some(audits) = &fragment.audits {
        match fragment.merge.audits {
            MergeStrategy::Replace => base.audits = audits.clone(),
            MergeStrategy::Append | MergeStrategy::MergeById => {
                for audit in audits {
                    if base.audits.contains(audit) {
                        return Err(ConfigError::DuplicateId {
                            kind: EntityKind::Audit,
                            id: audit.clone(),
                        });
                    }
                    base.audits.push(audit.clone());
                }
            }
        }
    }

    if let Some(groups) = &fragment.groups {
        if fragment.merge.groups == MergeStrategy::Replace {
            base.groups.clear();
        }
        for (id, patch) in groups {
            match base.groups.get_mut(id) {
                Some(existing) if fragment.merge.groups == MergeStrategy::MergeById => {
                    if let Some(title) = &patch.title {
                        existing.title = title.clone();
                    }
                    if let Some(description) = &patch.description {
                        existing.description = Some(description.clone());
                    }
                }
                Some(_) => {
                    return Err(ConfigError::DuplicateId {
                        kind: EntityKind::Group,
                        id: id.clone(),
                    });
                }
                None => {
                    base.groups.insert(id.clone(), materialize_group(id, patch)?);
                }
            }
        }
    }

    if let Some(categories) = &fragment.categories {
        if fragment.merge.categories == MergeStrategy::Replace {
            base.categories.clear();
        }
        for (id, patch) in categories {
            match base.categories.get_mut(id) {
                Some(existing) if fragment.merge.categories == MergeStrategy::MergeById => {
                    if let Some(title) = &patch.title {
                        existing.title = title.clone();
                    }
                    if let Some(description) = &patch.description {
                        existing.description = Some(description.clone());
                    }
                    if let Some(manual) = &patch.manual_description {
                        existing.manual_description = Some(manual.clone());
                    }
                    for r in &patch.audit_refs {
                        merge_audit_ref(&mut existing.audit_refs, r);
                    }
                }
                Some(_) => {
                    return Err(ConfigError::DuplicateId {
                        kind: EntityKind::Category,
                        id: id.clone(),
                    });
                }
                None => {
                    base.categories
                        .insert(id.clone(), materialize_category(id, patch)?);
                }
            }
        }
    }

    Ok(())
}

/// Concatenate one override ref onto a category's refs. A duplicate
/// `(id, group)` pair replaces the earlier weight in place rather than
/// duplicating the entry; display position stays with the first occurrence.
fn merge_audit_ref(refs: &mut Vec<RawAuditRef>, new_ref: &RawAuditRef) {
    if let Some(existing) = refs
        .iter_mut()
        .find(|r| r.id == new_ref.id && r.group == new_ref.group)
    {
        existing.weight = new_ref.weight;
    } else {
        refs.push(new_ref.clone());
    }
}

/// A patch creating a brand-new group must carry a title.
fn materialize_group(id: &str, patch: &GroupPatch) -> Result<RawGroup, ConfigError> {
    let Some(title) = &patch.title else {
        return Err(ConfigError::IncompleteOverride {
            kind: EntityKind::Group,
            id: id.to_string(),
            missing: "title",
        });
    };
    Ok(RawGroup {
        title: title.clone(),
        description: patch.description.clone(),
    })
}

/// A patch creating a brand-new category must carry a title.
fn materialize_category(id: &str, patch: &CategoryPatch) -> Result<RawCategory, ConfigError> {
    let Some(title) = &patch.title else {
        return Err(ConfigError::IncompleteOverride {
            kind: EntityKind::Category,
            id: id.to_string(),
            missing: "title",
        });
    };
    Ok(RawCategory {
        title: title.clone(),
        description: patch.description.clone(),
        manual_description: patch.manual_description.clone(),
        audit_refs: patch.audit_refs.clone(),
    })
}

/// Narrow the merged document per its settings: `only_categories` drops
/// other categories, `only_audits`/`skip_audits` filter refs, and audits
/// no longer referenced anywhere are pruned from the audit list.
fn apply_settings_filters(config: &mut RawConfig) {
    let settings = config.settings.clone();

    if let Some(only) = &settings.only_categories {
        for unknown in only.iter().filter(|c| !config.categories.contains_key(*c)) {
            warn!("onlyCategories names unknown category '{}'", unknown);
        }
        config.categories.retain(|id, _| only.contains(id));
    }

    let filters_refs = settings.only_audits.is_some() || settings.skip_audits.is_some();
    if filters_refs {
        for category in config.categories.values_mut() {
            category.audit_refs.retain(|r| {
                let kept = settings
                    .only_audits
                    .as_ref()
                    .is_none_or(|only| only.contains(&r.id))
                    && !settings
                        .skip_audits
                        .as_ref()
                        .is_some_and(|skip| skip.contains(&r.id));
                if !kept {
                    debug!("Settings filter dropped audit ref '{}'", r.id);
                }
                kept
            });
        }
    }

    if settings.only_categories.is_some() || filters_refs {
        let referenced: std::collections::BTreeSet<&str> = config
            .categories
            .values()
            .flat_map(|c| c.audit_refs.iter().map(|r| r.id.as_str()))
            .collect();
        let before = config.audits.len();
        config
            .audits
            .retain(|path| referenced.contains(crate::config::raw::id_from_path(path)));
        debug!(
            "Pruned {} unreferenced audits after settings filters",
            before - config.audits.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;

    #[test]
    fn test_empty_overrides_resolve_to_default() {
        let model = resolve_default(&[]).unwrap();
        assert_eq!(model.categories.len(), 5);
    }

    #[test]
    fn test_merge_by_id_replaces_ref_weight() {
        let mut categories = IndexMap::new();
        categories.insert(
            "seo".to_string(),
            CategoryPatch {
                audit_refs: vec![RawAuditRef {
                    id: "viewport".into(),
                    weight: 5.0,
                    group: Some("seo-mobile".into()),
                }],
                ..Default::default()
            },
        );
        let fragment = ConfigFragment {
            categories: Some(categories),
            ..Default::default()
        };

        let model = resolve_default(&[fragment]).unwrap();
        let seo = model.category("seo").unwrap();
        let viewport_refs: Vec<_> = seo
            .audit_refs
            .iter()
            .filter(|r| r.audit_id == "viewport")
            .collect();
        // Replaced, not duplicated; position unchanged (still first)
        assert_eq!(viewport_refs.len(), 1);
        assert_eq!(viewport_refs[0].weight, 5.0);
        assert_eq!(seo.audit_refs[0].audit_id, "viewport");
    }

    #[test]
    fn test_merge_by_id_overrides_title_only_when_present() {
        let mut categories = IndexMap::new();
        categories.insert(
            "seo".to_string(),
            CategoryPatch {
                title: Some("Search".into()),
                ..Default::default()
            },
        );
        let fragment = ConfigFragment {
            categories: Some(categories),
            ..Default::default()
        };
        let model = resolve_default(&[fragment]).unwrap();
        let seo = model.category("seo").unwrap();
        assert_eq!(seo.title, "Search");
        // Untouched fields keep base values
        assert!(seo.description.is_some());
    }

    #[test]
    fn test_replace_categories() {
        let mut categories = IndexMap::new();
        categories.insert(
            "custom".to_string(),
            CategoryPatch {
                title: Some("Custom".into()),
                audit_refs: vec![RawAuditRef {
                    id: "viewport".into(),
                    weight: 1.0,
                    group: None,
                }],
                ..Default::default()
            },
        );
        let fragment = ConfigFragment {
            merge: MergeRules {
                categories: MergeStrategy::Replace,
                ..Default::default()
            },
            categories: Some(categories),
            ..Default::default()
        };
        let model = resolve_default(&[fragment]).unwrap();
        assert_eq!(model.categories.len(), 1);
        assert!(model.category("custom").is_some());
    }

    #[test]
    fn test_append_duplicate_audit_rejected() {
        let fragment = ConfigFragment {
            audits: Some(vec!["viewport".into()]),
            ..Default::default()
        };
        let err = resolve_default(&[fragment]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateId {
                kind: EntityKind::Audit,
                ..
            }
        ));
    }

    #[test]
    fn test_new_category_without_title_rejected() {
        let mut categories = IndexMap::new();
        categories.insert("custom".to_string(), CategoryPatch::default());
        let fragment = ConfigFragment {
            categories: Some(categories),
            ..Default::default()
        };
        assert!(matches!(
            resolve_default(&[fragment]).unwrap_err(),
            ConfigError::IncompleteOverride { .. }
        ));
    }

    #[test]
    fn test_only_categories_narrows_and_prunes() {
        let fragment = ConfigFragment {
            settings: Some(SettingsPatch {
                only_categories: Some(vec!["seo".into()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let model = resolve_default(&[fragment]).unwrap();
        assert_eq!(model.categories.len(), 1);
        // Only audits still referenced by seo survive the prune
        assert!(model.audits.iter().any(|a| a.id == "meta-description"));
        assert!(!model.audits.iter().any(|a| a.id == "speed-index"));
    }

    #[test]
    fn test_skip_audits_drops_refs_everywhere() {
        let fragment = ConfigFragment {
            settings: Some(SettingsPatch {
                skip_audits: Some(vec!["viewport".into()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let model = resolve_default(&[fragment]).unwrap();
        for category in model.categories.values() {
            assert!(category.audit_refs.iter().all(|r| r.audit_id != "viewport"));
        }
        assert!(!model.audits.iter().any(|a| a.id == "viewport"));
    }

    #[test]
    fn test_later_fragment_wins_on_scalars() {
        let patch_with_title = |title: &str| {
            let mut categories = IndexMap::new();
            categories.insert(
                "seo".to_string(),
                CategoryPatch {
                    title: Some(title.into()),
                    ..Default::default()
                },
            );
            ConfigFragment {
                categories: Some(categories),
                ..Default::default()
            }
        };
        let model =
            resolve_default(&[patch_with_title("First"), patch_with_title("Second")]).unwrap();
        assert_eq!(model.category("seo").unwrap().title, "Second");
    }

    #[test]
    fn test_dangling_ref_introduced_by_fragment_rejected() {
        let mut categories = IndexMap::new();
        categories.insert(
            "seo".to_string(),
            CategoryPatch {
                audit_refs: vec![RawAuditRef {
                    id: "not-an-audit".into(),
                    weight: 1.0,
                    group: None,
                }],
                ..Default::default()
            },
        );
        let fragment = ConfigFragment {
            categories: Some(categories),
            ..Default::default()
        };
        assert!(matches!(
            resolve_default(&[fragment]).unwrap_err(),
            ConfigError::DanglingReference { .. }
        ));
    }

    #[test]
    fn test_resolve_is_pure_over_its_input() {
        let base = default_config();
        let a = resolve(base.clone(), &[]).unwrap();
        let b = resolve(base, &[]).unwrap();
        assert_eq!(a, b);
    }
}
