//! Output reporters for Pharos score reports
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

pub mod json;
pub mod markdown;
pub mod text;

use crate::models::ScoreReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a score report in the specified format
pub fn report(report: &ScoreReport, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt)
}

/// Render a score report using an OutputFormat enum
pub fn report_with_format(report: &ScoreReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Create a small two-category ScoreReport for reporter tests
    pub(crate) fn test_report() -> ScoreReport {
        use crate::models::{
            AuditContribution, CategoryReport, CategoryScoreResult, GroupMeta,
        };
        use std::collections::BTreeMap;

        let perf = CategoryReport {
            title: "Performance".into(),
            description: Some("How fast the page loads".into()),
            manual_description: None,
            group_order: vec!["metrics".into()],
            result: CategoryScoreResult {
                category_id: "performance".into(),
                score: Some(0.75),
                contributions: vec![
                    AuditContribution {
                        audit_id: "speed-index".into(),
                        weight: 3.0,
                        score: Some(1.0),
                        group: Some("metrics".into()),
                        scored: true,
                    },
                    AuditContribution {
                        audit_id: "interactive".into(),
                        weight: 1.0,
                        score: Some(0.0),
                        group: Some("metrics".into()),
                        scored: true,
                    },
                    AuditContribution {
                        audit_id: "screenshot-thumbnails".into(),
                        weight: 0.0,
                        score: None,
                        group: None,
                        scored: false,
                    },
                ],
                has_errors: false,
                missing_audits: vec![],
            },
        };

        let a11y = CategoryReport {
            title: "Accessibility".into(),
            description: None,
            manual_description: Some("Additional items to check manually".into()),
            group_order: vec![],
            result: CategoryScoreResult {
                category_id: "accessibility".into(),
                score: None,
                contributions: vec![AuditContribution {
                    audit_id: "logical-tab-order".into(),
                    weight: 0.0,
                    score: None,
                    group: None,
                    scored: false,
                }],
                has_errors: true,
                missing_audits: vec!["color-contrast".into()],
            },
        };

        let mut groups = BTreeMap::new();
        groups.insert(
            "metrics".to_string(),
            GroupMeta {
                title: "Metrics".into(),
                description: None,
            },
        );

        ScoreReport {
            categories: vec![a11y, perf],
            groups,
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_report_dispatch() {
        let r = test_report();
        for fmt in ["text", "json", "markdown"] {
            assert!(!report(&r, fmt).unwrap().is_empty());
        }
    }
}
