//! Core data models for Pharos
//!
//! These models are used throughout the codebase for representing
//! audit results, the per-run result store, and computed category scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// How an audit's result should be interpreted and displayed.
///
/// `Manual`, `NotApplicable`, and `Error` results never carry a numeric
/// score and are excluded from category scoring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreDisplayMode {
    /// Pass/fail audit; score is 0.0 or 1.0
    Binary,
    /// Continuous score in [0, 1]
    #[default]
    Numeric,
    /// Requires human verification; displayed but never scored
    Manual,
    /// Audit did not apply to this page
    NotApplicable,
    /// Audit execution failed
    Error,
}

impl std::fmt::Display for ScoreDisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreDisplayMode::Binary => write!(f, "binary"),
            ScoreDisplayMode::Numeric => write!(f, "numeric"),
            ScoreDisplayMode::Manual => write!(f, "manual"),
            ScoreDisplayMode::NotApplicable => write!(f, "not-applicable"),
            ScoreDisplayMode::Error => write!(f, "error"),
        }
    }
}

/// Result of a single audit run against a page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Id of the audit that produced this result
    pub audit_id: String,
    /// Normalized score in [0, 1], or `None` for manual/not-applicable/error
    #[serde(default)]
    pub score: Option<f64>,
    /// How to interpret and display this result
    #[serde(default)]
    pub score_display_mode: ScoreDisplayMode,
    /// Failure detail when `score_display_mode` is `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AuditResult {
    /// A numeric result with a score in [0, 1]
    pub fn numeric(audit_id: impl Into<String>, score: f64) -> Self {
        Self {
            audit_id: audit_id.into(),
            score: Some(score),
            score_display_mode: ScoreDisplayMode::Numeric,
            error_message: None,
        }
    }

    /// A pass/fail result
    pub fn binary(audit_id: impl Into<String>, passed: bool) -> Self {
        Self {
            audit_id: audit_id.into(),
            score: Some(if passed { 1.0 } else { 0.0 }),
            score_display_mode: ScoreDisplayMode::Binary,
            error_message: None,
        }
    }

    /// A manual audit result (displayed, never scored)
    pub fn manual(audit_id: impl Into<String>) -> Self {
        Self {
            audit_id: audit_id.into(),
            score: None,
            score_display_mode: ScoreDisplayMode::Manual,
            error_message: None,
        }
    }

    /// An audit that did not apply to the page
    pub fn not_applicable(audit_id: impl Into<String>) -> Self {
        Self {
            audit_id: audit_id.into(),
            score: None,
            score_display_mode: ScoreDisplayMode::NotApplicable,
            error_message: None,
        }
    }

    /// A failed audit execution
    pub fn error(audit_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            audit_id: audit_id.into(),
            score: None,
            score_display_mode: ScoreDisplayMode::Error,
            error_message: Some(message.into()),
        }
    }

    /// Whether this result can contribute to a weighted category score
    pub fn is_scorable(&self) -> bool {
        self.score.is_some()
            && matches!(
                self.score_display_mode,
                ScoreDisplayMode::Binary | ScoreDisplayMode::Numeric
            )
    }
}

/// Errors raised when building an [`AuditResultStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Two results share the same audit id; the store is keyed by id
    #[error("duplicate result for audit '{audit_id}'")]
    DuplicateResult { audit_id: String },

    /// A non-null score fell outside [0, 1] or was not finite
    #[error("score {score} for audit '{audit_id}' is outside [0, 1]")]
    ScoreOutOfRange { audit_id: String, score: f64 },

    /// A scored display mode (`binary`/`numeric`) arrived without a score
    #[error("audit '{audit_id}' has display mode '{mode}' but no score")]
    MissingScore {
        audit_id: String,
        mode: ScoreDisplayMode,
    },
}

/// A single run's audit results, keyed by audit id.
///
/// Created fresh per run and owned by that run's aggregation; insertion
/// validates score range and rejects duplicate ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditResultStore {
    results: BTreeMap<String, AuditResult>,
}

impl AuditResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one result, rejecting duplicates and out-of-range scores.
    pub fn insert(&mut self, result: AuditResult) -> Result<(), StoreError> {
        if let Some(score) = result.score {
            if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                return Err(StoreError::ScoreOutOfRange {
                    audit_id: result.audit_id.clone(),
                    score,
                });
            }
        } else if matches!(
            result.score_display_mode,
            ScoreDisplayMode::Binary | ScoreDisplayMode::Numeric
        ) {
            return Err(StoreError::MissingScore {
                audit_id: result.audit_id.clone(),
                mode: result.score_display_mode,
            });
        }

        if self.results.contains_key(&result.audit_id) {
            return Err(StoreError::DuplicateResult {
                audit_id: result.audit_id,
            });
        }

        self.results.insert(result.audit_id.clone(), result);
        Ok(())
    }

    /// Build a store from a collection of results (order-insensitive).
    pub fn from_results(
        results: impl IntoIterator<Item = AuditResult>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for result in results {
            store.insert(result)?;
        }
        Ok(store)
    }

    /// Parse a store from a JSON array of result records.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let results: Vec<AuditResult> = serde_json::from_str(json)?;
        Ok(Self::from_results(results)?)
    }

    pub fn get(&self, audit_id: &str) -> Option<&AuditResult> {
        self.results.get(audit_id)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate results in audit-id order (deterministic)
    pub fn iter(&self) -> impl Iterator<Item = &AuditResult> {
        self.results.values()
    }
}

/// One audit's contribution to a category score, kept for UI breakdown.
///
/// Excluded entries (weight 0, manual, errored, missing) are retained for
/// transparency with their actual weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditContribution {
    pub audit_id: String,
    pub weight: f64,
    /// The underlying result score, even when the entry did not count
    /// toward the category mean
    pub score: Option<f64>,
    /// Display group this ref was tagged with, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Whether this entry participated in the weighted mean
    pub scored: bool,
}

/// Computed score for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScoreResult {
    pub category_id: String,
    /// Weighted arithmetic mean in [0, 1], or `None` when nothing was
    /// scorable ("not scored", never rendered as 0 or 100)
    pub score: Option<f64>,
    /// Per-audit breakdown in `auditRefs` order, excluded entries included
    pub contributions: Vec<AuditContribution>,
    /// At least one constituent audit errored; surface a warning, not a
    /// failed category
    pub has_errors: bool,
    /// Weighted refs with no result in the store (warned, not fatal).
    /// Weight-0 refs never land here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_audits: Vec<String>,
}

/// Display metadata for a group, resolved from the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One category's scored result plus its resolved display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_description: Option<String>,
    /// Stable render order for this category's groups (first-appearance
    /// order; ungrouped audits come after all groups)
    pub group_order: Vec<String>,
    pub result: CategoryScoreResult,
}

/// Full scoring output handed to the report layer: one entry per category
/// in configuration order, plus group metadata for rendering titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub categories: Vec<CategoryReport>,
    pub groups: BTreeMap<String, GroupMeta>,
}

impl ScoreReport {
    pub fn category(&self, id: &str) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.result.category_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_rejects_duplicates() {
        let mut store = AuditResultStore::new();
        store.insert(AuditResult::binary("viewport", true)).unwrap();
        let err = store
            .insert(AuditResult::binary("viewport", false))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateResult { .. }));
    }

    #[test]
    fn test_store_rejects_out_of_range_score() {
        let mut store = AuditResultStore::new();
        let err = store
            .insert(AuditResult::numeric("speed-index", 1.5))
            .unwrap_err();
        assert!(matches!(err, StoreError::ScoreOutOfRange { .. }));

        let err = store
            .insert(AuditResult::numeric("speed-index", f64::NAN))
            .unwrap_err();
        assert!(matches!(err, StoreError::ScoreOutOfRange { .. }));
    }

    #[test]
    fn test_store_rejects_scored_mode_without_score() {
        let mut store = AuditResultStore::new();
        let result = AuditResult {
            audit_id: "interactive".into(),
            score: None,
            score_display_mode: ScoreDisplayMode::Numeric,
            error_message: None,
        };
        let err = store.insert(result).unwrap_err();
        assert!(matches!(err, StoreError::MissingScore { .. }));
    }

    #[test]
    fn test_manual_and_error_results_are_not_scorable() {
        assert!(!AuditResult::manual("pwa-cross-browser").is_scorable());
        assert!(!AuditResult::not_applicable("canonical").is_scorable());
        assert!(!AuditResult::error("speed-index", "trace missing").is_scorable());
        assert!(AuditResult::binary("viewport", false).is_scorable());
        assert!(AuditResult::numeric("interactive", 0.4).is_scorable());
    }

    #[test]
    fn test_results_parse_from_camel_case_wire_format() {
        let json = r#"[
            {"auditId": "viewport", "score": 1.0, "scoreDisplayMode": "binary"},
            {"auditId": "speed-index", "score": 0.73, "scoreDisplayMode": "numeric"},
            {"auditId": "mobile-friendly", "scoreDisplayMode": "manual"},
            {"auditId": "canonical", "scoreDisplayMode": "not-applicable"},
            {"auditId": "bootup-time", "scoreDisplayMode": "error", "errorMessage": "timeout"}
        ]"#;
        let store = AuditResultStore::from_json_str(json).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.get("speed-index").unwrap().score, Some(0.73));
        assert_eq!(
            store.get("bootup-time").unwrap().score_display_mode,
            ScoreDisplayMode::Error
        );
        assert_eq!(
            store.get("bootup-time").unwrap().error_message.as_deref(),
            Some("timeout")
        );
    }

    #[test]
    fn test_score_result_serializes_camel_case() {
        let result = CategoryScoreResult {
            category_id: "performance".into(),
            score: None,
            contributions: vec![AuditContribution {
                audit_id: "speed-index".into(),
                weight: 4.0,
                score: None,
                group: Some("metrics".into()),
                scored: false,
            }],
            has_errors: true,
            missing_audits: vec!["speed-index".into()],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["categoryId"], "performance");
        assert_eq!(value["hasErrors"], true);
        assert_eq!(value["missingAudits"][0], "speed-index");
        assert_eq!(value["contributions"][0]["auditId"], "speed-index");
        // Same casing convention as the config document side
        assert!(value.get("category_id").is_none());
    }
}
