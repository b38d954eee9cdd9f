//! Weighted category score aggregation
//!
//! Combines a validated [`ConfigModel`] with a run's [`AuditResultStore`]
//! into one [`CategoryScoreResult`] per category. Pure and synchronous:
//! no clock, no randomness, no I/O, so output is byte-for-byte
//! reproducible for a fixed config/store pair.

use crate::config::{Category, ConfigModel};
use crate::models::{
    AuditContribution, AuditResultStore, CategoryReport, CategoryScoreResult, GroupMeta,
    ScoreDisplayMode, ScoreReport,
};
use crate::scoring::order::group_render_order;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Computes category scores from already-materialized audit results.
///
/// The config is shared read-only across runs; the store belongs to this
/// run alone. Aggregation is a join point over the audit set: every audit
/// a category references must have completed (or explicitly failed) before
/// its score is computed here.
pub struct ScoreAggregator<'a> {
    config: &'a ConfigModel,
    results: &'a AuditResultStore,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(config: &'a ConfigModel, results: &'a AuditResultStore) -> Self {
        Self { config, results }
    }

    /// Score every category and assemble the full report, including the
    /// resolved group/category metadata the report layer renders from.
    pub fn score_all(&self) -> ScoreReport {
        let categories: Vec<CategoryReport> = self
            .config
            .categories
            .values()
            .map(|category| CategoryReport {
                title: category.title.clone(),
                description: category.description.clone(),
                manual_description: category.manual_description.clone(),
                group_order: group_render_order(category),
                result: self.score_category(category),
            })
            .collect();

        let scored = categories
            .iter()
            .filter(|c| c.result.score.is_some())
            .count();
        info!(
            "Scored {}/{} categories ({} results in store)",
            scored,
            categories.len(),
            self.results.len()
        );

        let groups: BTreeMap<String, GroupMeta> = self
            .config
            .groups
            .values()
            .map(|g| {
                (
                    g.id.clone(),
                    GroupMeta {
                        title: g.title.clone(),
                        description: g.description.clone(),
                    },
                )
            })
            .collect();

        ScoreReport { categories, groups }
    }

    /// Score one category: the weighted arithmetic mean
    /// `sum(weight * score) / sum(weight)` over refs that are scorable
    /// (weight > 0 and a non-null binary/numeric result).
    ///
    /// Weight-0, manual, not-applicable, errored, and missing refs are
    /// excluded from the mean but kept in the contributions list with
    /// their actual weight. Missing refs surface in `missing_audits`
    /// only when their weight is positive; a weight-0 ref could not have
    /// moved the score anyway. A category with nothing scorable gets a
    /// `None` score, never 0 or 100.
    pub fn score_category(&self, category: &Category) -> CategoryScoreResult {
        let mut contributions = Vec::with_capacity(category.audit_refs.len());
        let mut missing_audits = Vec::new();
        let mut has_errors = false;
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for audit_ref in &category.audit_refs {
            let result = self.results.get(&audit_ref.audit_id);

            let Some(result) = result else {
                // Recoverable: the audit never reported. Degrade to
                // unscored rather than aborting the category. Only refs
                // that would have moved the score are worth a warning.
                if audit_ref.weight > 0.0 {
                    warn!(
                        "No result for audit '{}' referenced by category '{}'",
                        audit_ref.audit_id, category.id
                    );
                    missing_audits.push(audit_ref.audit_id.clone());
                } else {
                    debug!(
                        "No result for weight-0 audit '{}' in category '{}'",
                        audit_ref.audit_id, category.id
                    );
                }
                contributions.push(AuditContribution {
                    audit_id: audit_ref.audit_id.clone(),
                    weight: audit_ref.weight,
                    score: None,
                    group: audit_ref.group.clone(),
                    scored: false,
                });
                continue;
            };

            if result.score_display_mode == ScoreDisplayMode::Error {
                has_errors = true;
            }

            let scored = audit_ref.weight > 0.0 && result.is_scorable();
            if scored {
                // is_scorable guarantees the score is present
                let score = result.score.unwrap_or_default();
                weighted_sum += audit_ref.weight * score;
                weight_total += audit_ref.weight;
            }

            contributions.push(AuditContribution {
                audit_id: audit_ref.audit_id.clone(),
                weight: audit_ref.weight,
                score: result.score,
                group: audit_ref.group.clone(),
                scored,
            });
        }

        let score = if weight_total > 0.0 {
            // Clamp is defensive; unreachable when store validation holds
            Some((weighted_sum / weight_total).clamp(0.0, 1.0))
        } else {
            None
        };

        debug!(
            "Category '{}': score={:?}, {} refs, {} scored, {} missing, errors={}",
            category.id,
            score,
            category.audit_refs.len(),
            contributions.iter().filter(|c| c.scored).count(),
            missing_audits.len(),
            has_errors
        );

        CategoryScoreResult {
            category_id: category.id.clone(),
            score,
            contributions,
            has_errors,
            missing_audits,
        }
    }
}
