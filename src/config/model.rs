//! Validated configuration model
//!
//! [`ConfigModel::validate`] turns a [`RawConfig`] into typed, immutable
//! entities, rejecting structurally invalid configurations before any audit
//! runs. Validation is a pure function: same input, same outcome, no I/O.

use crate::config::raw::{id_from_path, RawConfig, Settings};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Which kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Audit,
    Gatherer,
    Group,
    Category,
    Pass,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Audit => write!(f, "audit"),
            EntityKind::Gatherer => write!(f, "gatherer"),
            EntityKind::Group => write!(f, "group"),
            EntityKind::Category => write!(f, "category"),
            EntityKind::Pass => write!(f, "pass"),
        }
    }
}

/// Fatal configuration errors. A run must not start from a config that
/// fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two entities of the same kind share an id
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntityKind, id: String },

    /// A reference points at an entity that was never defined
    #[error("category '{referenced_from}' references undefined {kind} '{id}'")]
    DanglingReference {
        kind: EntityKind,
        id: String,
        referenced_from: String,
    },

    /// A weight was negative or non-finite
    #[error("invalid weight {weight} for audit '{audit_id}' in category '{category_id}'")]
    InvalidWeight {
        category_id: String,
        audit_id: String,
        weight: f64,
    },

    /// Zero or multiple passes were explicitly marked primary
    #[error("configuration must mark exactly one primary pass, found {count}")]
    PrimaryPass { count: usize },

    /// An override fragment created a new entity without a required field
    #[error("override for new {kind} '{id}' is missing required field '{missing}'")]
    IncompleteOverride {
        kind: EntityKind,
        id: String,
        missing: &'static str,
    },
}

/// A single automated check, defined once and referenced by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audit {
    /// Ref id (final path segment)
    pub id: String,
    /// Full id/path as listed in the configuration
    pub path: String,
}

/// A raw-signal collector feeding one or more audits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gatherer {
    pub id: String,
    pub path: String,
}

/// An execution grouping of gatherers sharing collection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Pass {
    pub name: String,
    pub primary: bool,
    pub record_trace: bool,
    pub use_throttling: bool,
    pub pause_after_load_ms: u64,
    pub network_quiet_threshold_ms: u64,
    pub cpu_quiet_threshold_ms: u64,
    pub blocked_url_patterns: Vec<String>,
    pub gatherers: Vec<Gatherer>,
}

/// Display-only clustering of audits. No weight, no scoring role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

/// Weighted link from a category to an audit. `weight == 0` marks the
/// audit informational: displayed, excluded from the numeric score.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRef {
    pub audit_id: String,
    pub weight: f64,
    pub group: Option<String>,
}

/// A top-level scored rollup (e.g. Performance).
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub manual_description: Option<String>,
    /// Order is display-relevant, not scoring-relevant
    pub audit_refs: Vec<AuditRef>,
}

/// Validated, immutable configuration. Constructed once at resolution time
/// and shared read-only by any number of runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigModel {
    pub settings: Settings,
    pub passes: Vec<Pass>,
    pub audits: Vec<Audit>,
    pub groups: BTreeMap<String, Group>,
    /// Keyed by id; iteration follows the document's declaration order
    pub categories: IndexMap<String, Category>,
}

impl ConfigModel {
    /// Validate a raw document into a typed model.
    ///
    /// Checks, in order: pass invariants (unique names, exactly one
    /// primary), audit id uniqueness, gatherer uniqueness per pass, and for
    /// every `auditRef` a non-negative finite weight plus resolvable audit
    /// and group ids.
    pub fn validate(raw: RawConfig) -> Result<Self, ConfigError> {
        let passes = validate_passes(&raw)?;

        let mut audits = Vec::with_capacity(raw.audits.len());
        let mut audit_ids = HashSet::new();
        for path in &raw.audits {
            let id = id_from_path(path).to_string();
            if !audit_ids.insert(id.clone()) {
                return Err(ConfigError::DuplicateId {
                    kind: EntityKind::Audit,
                    id,
                });
            }
            audits.push(Audit {
                id,
                path: path.clone(),
            });
        }

        let groups: BTreeMap<String, Group> = raw
            .groups
            .iter()
            .map(|(id, g)| {
                (
                    id.clone(),
                    Group {
                        id: id.clone(),
                        title: g.title.clone(),
                        description: g.description.clone(),
                    },
                )
            })
            .collect();

        let mut categories = IndexMap::new();
        for (id, raw_cat) in &raw.categories {
            let mut audit_refs = Vec::with_capacity(raw_cat.audit_refs.len());
            for r in &raw_cat.audit_refs {
                if !r.weight.is_finite() || r.weight < 0.0 {
                    return Err(ConfigError::InvalidWeight {
                        category_id: id.clone(),
                        audit_id: r.id.clone(),
                        weight: r.weight,
                    });
                }
                if !audit_ids.contains(&r.id) {
                    return Err(ConfigError::DanglingReference {
                        kind: EntityKind::Audit,
                        id: r.id.clone(),
                        referenced_from: id.clone(),
                    });
                }
                if let Some(group) = &r.group {
                    if !groups.contains_key(group) {
                        return Err(ConfigError::DanglingReference {
                            kind: EntityKind::Group,
                            id: group.clone(),
                            referenced_from: id.clone(),
                        });
                    }
                }
                audit_refs.push(AuditRef {
                    audit_id: r.id.clone(),
                    weight: r.weight,
                    group: r.group.clone(),
                });
            }
            categories.insert(
                id.clone(),
                Category {
                    id: id.clone(),
                    title: raw_cat.title.clone(),
                    description: raw_cat.description.clone(),
                    manual_description: raw_cat.manual_description.clone(),
                    audit_refs,
                },
            );
        }

        Ok(ConfigModel {
            settings: raw.settings,
            passes,
            audits,
            groups,
            categories,
        })
    }

    /// Look up a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// The primary pass, if any passes are configured
    pub fn primary_pass(&self) -> Option<&Pass> {
        self.passes.iter().find(|p| p.primary)
    }
}

/// Validate pass invariants: unique names, unique gatherer ids within a
/// pass, and exactly one primary pass (the first, when none is explicit).
fn validate_passes(raw: &RawConfig) -> Result<Vec<Pass>, ConfigError> {
    let mut names = HashSet::new();
    for p in &raw.passes {
        if !names.insert(p.pass_name.as_str()) {
            return Err(ConfigError::DuplicateId {
                kind: EntityKind::Pass,
                id: p.pass_name.clone(),
            });
        }
    }

    let explicit_primaries = raw
        .passes
        .iter()
        .filter(|p| p.primary == Some(true))
        .count();
    if explicit_primaries > 1 {
        return Err(ConfigError::PrimaryPass {
            count: explicit_primaries,
        });
    }

    let mut passes = Vec::with_capacity(raw.passes.len());
    for (i, p) in raw.passes.iter().enumerate() {
        let mut gatherer_ids = HashSet::new();
        let mut gatherers = Vec::with_capacity(p.gatherers.len());
        for path in &p.gatherers {
            let id = id_from_path(path).to_string();
            if !gatherer_ids.insert(id.clone()) {
                return Err(ConfigError::DuplicateId {
                    kind: EntityKind::Gatherer,
                    id,
                });
            }
            gatherers.push(Gatherer {
                id,
                path: path.clone(),
            });
        }

        let primary = if explicit_primaries == 1 {
            p.primary == Some(true)
        } else {
            i == 0
        };

        passes.push(Pass {
            name: p.pass_name.clone(),
            primary,
            record_trace: p.record_trace,
            use_throttling: p.use_throttling,
            pause_after_load_ms: p.pause_after_load_ms,
            network_quiet_threshold_ms: p.network_quiet_threshold_ms,
            cpu_quiet_threshold_ms: p.cpu_quiet_threshold_ms,
            blocked_url_patterns: p.blocked_url_patterns.clone(),
            gatherers,
        });
    }

    Ok(passes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::raw::{RawAuditRef, RawCategory, RawGroup, RawPass};

    fn minimal_raw() -> RawConfig {
        let mut raw = RawConfig {
            audits: vec!["viewport".into(), "metrics/speed-index".into()],
            ..Default::default()
        };
        raw.groups.insert(
            "metrics".into(),
            RawGroup {
                title: "Metrics".into(),
                description: None,
            },
        );
        raw.categories.insert(
            "performance".into(),
            RawCategory {
                title: "Performance".into(),
                description: None,
                manual_description: None,
                audit_refs: vec![
                    RawAuditRef {
                        id: "speed-index".into(),
                        weight: 4.0,
                        group: Some("metrics".into()),
                    },
                    RawAuditRef {
                        id: "viewport".into(),
                        weight: 1.0,
                        group: None,
                    },
                ],
            },
        );
        raw
    }

    #[test]
    fn test_validate_minimal_config() {
        let model = ConfigModel::validate(minimal_raw()).unwrap();
        assert_eq!(model.audits.len(), 2);
        assert_eq!(model.audits[1].id, "speed-index");
        assert_eq!(model.audits[1].path, "metrics/speed-index");
        let perf = model.category("performance").unwrap();
        assert_eq!(perf.audit_refs[0].group.as_deref(), Some("metrics"));
    }

    #[test]
    fn test_duplicate_audit_id_rejected() {
        let mut raw = minimal_raw();
        // Same ref id under a different path still collides
        raw.audits.push("seo/viewport".into());
        let err = ConfigModel::validate(raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateId {
                kind: EntityKind::Audit,
                ..
            }
        ));
    }

    #[test]
    fn test_dangling_audit_ref_rejected() {
        let mut raw = minimal_raw();
        raw.categories
            .get_mut("performance")
            .unwrap()
            .audit_refs
            .push(RawAuditRef {
                id: "no-such-audit".into(),
                weight: 1.0,
                group: None,
            });
        let err = ConfigModel::validate(raw).unwrap_err();
        match err {
            ConfigError::DanglingReference { kind, id, .. } => {
                assert_eq!(kind, EntityKind::Audit);
                assert_eq!(id, "no-such-audit");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_group_ref_rejected() {
        let mut raw = minimal_raw();
        raw.categories
            .get_mut("performance")
            .unwrap()
            .audit_refs[1]
            .group = Some("no-such-group".into());
        let err = ConfigModel::validate(raw).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DanglingReference {
                kind: EntityKind::Group,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_and_non_finite_weights_rejected() {
        let mut raw = minimal_raw();
        raw.categories
            .get_mut("performance")
            .unwrap()
            .audit_refs[0]
            .weight = -1.0;
        assert!(matches!(
            ConfigModel::validate(raw).unwrap_err(),
            ConfigError::InvalidWeight { .. }
        ));

        let mut raw = minimal_raw();
        raw.categories
            .get_mut("performance")
            .unwrap()
            .audit_refs[0]
            .weight = f64::INFINITY;
        assert!(matches!(
            ConfigModel::validate(raw).unwrap_err(),
            ConfigError::InvalidWeight { .. }
        ));
    }

    #[test]
    fn test_zero_weight_is_valid() {
        let mut raw = minimal_raw();
        raw.categories
            .get_mut("performance")
            .unwrap()
            .audit_refs[0]
            .weight = 0.0;
        assert!(ConfigModel::validate(raw).is_ok());
    }

    #[test]
    fn test_duplicate_pass_name_rejected() {
        let mut raw = minimal_raw();
        raw.passes = vec![
            RawPass {
                pass_name: "defaultPass".into(),
                ..Default::default()
            },
            RawPass {
                pass_name: "defaultPass".into(),
                ..Default::default()
            },
        ];
        assert!(matches!(
            ConfigModel::validate(raw).unwrap_err(),
            ConfigError::DuplicateId {
                kind: EntityKind::Pass,
                ..
            }
        ));
    }

    #[test]
    fn test_first_pass_is_primary_by_default() {
        let mut raw = minimal_raw();
        raw.passes = vec![
            RawPass {
                pass_name: "defaultPass".into(),
                gatherers: vec!["meta-elements".into()],
                ..Default::default()
            },
            RawPass {
                pass_name: "offlinePass".into(),
                gatherers: vec!["service-worker".into()],
                ..Default::default()
            },
        ];
        let model = ConfigModel::validate(raw).unwrap();
        assert_eq!(model.primary_pass().unwrap().name, "defaultPass");
        assert!(!model.passes[1].primary);
    }

    #[test]
    fn test_multiple_explicit_primaries_rejected() {
        let mut raw = minimal_raw();
        raw.passes = vec![
            RawPass {
                pass_name: "a".into(),
                primary: Some(true),
                ..Default::default()
            },
            RawPass {
                pass_name: "b".into(),
                primary: Some(true),
                ..Default::default()
            },
        ];
        assert!(matches!(
            ConfigModel::validate(raw).unwrap_err(),
            ConfigError::PrimaryPass { count: 2 }
        ));
    }

    #[test]
    fn test_duplicate_gatherer_in_pass_rejected() {
        let mut raw = minimal_raw();
        raw.passes = vec![RawPass {
            pass_name: "defaultPass".into(),
            gatherers: vec!["seo/robots-txt".into(), "robots-txt".into()],
            ..Default::default()
        }];
        assert!(matches!(
            ConfigModel::validate(raw).unwrap_err(),
            ConfigError::DuplicateId {
                kind: EntityKind::Gatherer,
                ..
            }
        ));
    }
}
