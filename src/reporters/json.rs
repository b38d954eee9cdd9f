//! JSON reporter
//!
//! Outputs the full ScoreReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.
//! Scores stay on the [0, 1] scale here; only human-facing formats
//! rescale to 0-100.

use crate::models::ScoreReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ScoreReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
pub fn render_compact(report: &ScoreReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let categories = parsed["categories"].as_array().expect("categories array");
        assert_eq!(categories.len(), 2);
        // Unscored category serializes as an explicit null, not 0
        assert!(categories[0]["result"]["score"].is_null());
        assert_eq!(categories[1]["result"]["score"], 0.75);
    }

    #[test]
    fn test_json_render_compact() {
        let report = test_report();
        let json_str = render_compact(&report).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_keeps_contribution_breakdown() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let contributions = parsed["categories"][1]["result"]["contributions"]
            .as_array()
            .expect("contributions array");
        assert_eq!(contributions.len(), 3);
        assert_eq!(contributions[0]["weight"], 3.0);
    }
}
