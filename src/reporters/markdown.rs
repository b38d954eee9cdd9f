//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - README files
//! - Pull request comments
//! - Documentation

use crate::models::{AuditContribution, CategoryReport, ScoreReport};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &ScoreReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_summary(report));
    md.push('\n');

    for category in &report.categories {
        md.push_str(&render_category(report, category));
        md.push('\n');
    }

    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(report: &ScoreReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let scored = report
        .categories
        .iter()
        .filter(|c| c.result.score.is_some())
        .count();

    format!(
        r#"# Pharos Score Report

**{} of {} categories scored**

Generated: {}
"#,
        scored,
        report.categories.len(),
        timestamp
    )
}

fn render_summary(report: &ScoreReport) -> String {
    let mut md = String::from(
        r#"## Summary

| Category | Score | Status |
|----------|-------|--------|
"#,
    );
    for category in &report.categories {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            category.title,
            format_score(category.result.score),
            score_indicator(category.result.score)
        ));
    }
    md
}

fn render_category(report: &ScoreReport, category: &CategoryReport) -> String {
    let mut md = format!(
        "## {} ({})\n\n",
        category.title,
        format_score(category.result.score)
    );

    if let Some(description) = &category.description {
        md.push_str(&format!("{}\n\n", description));
    }

    let result = &category.result;
    if result.has_errors {
        md.push_str("> ⚠️ Some audits errored and were excluded from the score.\n\n");
    }
    if !result.missing_audits.is_empty() {
        md.push_str(&format!(
            "> ⚠️ No result for: {}\n\n",
            result.missing_audits.join(", ")
        ));
    }

    for group_id in &category.group_order {
        let title = report
            .groups
            .get(group_id)
            .map(|g| g.title.as_str())
            .unwrap_or(group_id.as_str());
        md.push_str(&format!("### {}\n\n", title));
        if let Some(description) = report.groups.get(group_id).and_then(|g| g.description.as_ref())
        {
            md.push_str(&format!("{}\n\n", description));
        }
        md.push_str(&render_contribution_table(
            result
                .contributions
                .iter()
                .filter(|c| c.group.as_deref() == Some(group_id)),
        ));
        md.push('\n');
    }

    let ungrouped: Vec<&AuditContribution> = result
        .contributions
        .iter()
        .filter(|c| c.group.is_none())
        .collect();
    if !ungrouped.is_empty() {
        if !category.group_order.is_empty() {
            md.push_str("### Other\n\n");
        }
        md.push_str(&render_contribution_table(ungrouped.into_iter()));
        md.push('\n');
    }

    if let Some(manual) = &category.manual_description {
        md.push_str(&format!("*{}*\n", manual));
    }

    md
}

fn render_contribution_table<'a>(
    contributions: impl Iterator<Item = &'a AuditContribution>,
) -> String {
    let mut md = String::from("| Audit | Weight | Score |\n|-------|--------|-------|\n");
    for c in contributions {
        let score = match c.score {
            Some(s) => format!("{:.0}", s * 100.0),
            None => "—".to_string(),
        };
        let note = if c.scored { "" } else { " *(not scored)*" };
        md.push_str(&format!(
            "| `{}` | {} | {}{} |\n",
            c.audit_id, c.weight, score, note
        ));
    }
    md
}

fn render_footer() -> String {
    "---\n\n*Generated by Pharos*\n".to_string()
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.0}/100", s * 100.0),
        None => "not scored".to_string(),
    }
}

fn score_indicator(score: Option<f64>) -> &'static str {
    match score {
        Some(s) if s >= 0.9 => "✅ Good",
        Some(s) if s >= 0.5 => "⚠️ Needs work",
        Some(_) => "❌ Poor",
        None => "➖",
    }
}
