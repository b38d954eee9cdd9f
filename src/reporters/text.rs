//! Text (terminal) reporter with colors and formatting

use crate::models::{AuditContribution, CategoryReport, ScoreReport};
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Score colors on the 0-100 display scale
fn score_color(score: f64) -> &'static str {
    if score >= 90.0 {
        "\x1b[32m" // Green
    } else if score >= 50.0 {
        "\x1b[33m" // Yellow
    } else {
        "\x1b[31m" // Red
    }
}

/// Render report as formatted terminal output
pub fn render(report: &ScoreReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Pharos Score Report{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    for category in &report.categories {
        out.push_str(&render_category(report, category));
    }

    Ok(out)
}

fn render_category(report: &ScoreReport, category: &CategoryReport) -> String {
    let mut out = String::new();
    let result = &category.result;

    // Category header with score out of 100 ('--' when nothing scored)
    match result.score {
        Some(score) => {
            let display = score * 100.0;
            let color = score_color(display);
            out.push_str(&format!(
                "\n{BOLD}{}{RESET}  {color}{BOLD}{:.0}{RESET}{DIM}/100{RESET}\n",
                category.title, display
            ));
        }
        None => {
            out.push_str(&format!(
                "\n{BOLD}{}{RESET}  {DIM}--/100 (not scored){RESET}\n",
                category.title
            ));
        }
    }
    if let Some(description) = &category.description {
        out.push_str(&format!("{DIM}{}{RESET}\n", description));
    }

    if result.has_errors {
        out.push_str(&format!(
            "\x1b[33m  ! Some audits errored and were excluded from the score{RESET}\n"
        ));
    }
    if !result.missing_audits.is_empty() {
        out.push_str(&format!(
            "\x1b[33m  ! No result for: {}{RESET}\n",
            result.missing_audits.join(", ")
        ));
    }

    // Grouped audits first, in the category's render order
    for group_id in &category.group_order {
        let title = report
            .groups
            .get(group_id)
            .map(|g| g.title.as_str())
            .unwrap_or(group_id.as_str());
        out.push_str(&format!("  {BOLD}{}{RESET}\n", title));
        for contribution in result
            .contributions
            .iter()
            .filter(|c| c.group.as_deref() == Some(group_id))
        {
            out.push_str(&render_contribution(contribution));
        }
    }

    // Ungrouped audits last, under no heading
    let ungrouped: Vec<&AuditContribution> = result
        .contributions
        .iter()
        .filter(|c| c.group.is_none())
        .collect();
    if !ungrouped.is_empty() {
        if !category.group_order.is_empty() {
            out.push_str(&format!("  {DIM}Other{RESET}\n"));
        }
        for contribution in ungrouped {
            out.push_str(&render_contribution(contribution));
        }
    }

    if let Some(manual) = &category.manual_description {
        out.push_str(&format!("  {DIM}{}{RESET}\n", manual));
    }

    out
}

fn render_contribution(contribution: &AuditContribution) -> String {
    let score = match contribution.score {
        Some(s) => {
            let display = s * 100.0;
            format!("{}{:>3.0}{RESET}", score_color(display), display)
        }
        None => format!("{DIM}  -{RESET}"),
    };
    let note = if contribution.scored {
        String::new()
    } else {
        format!("  {DIM}(not scored){RESET}")
    };
    format!(
        "    {score}  {:<45} {DIM}w={}{RESET}{note}\n",
        contribution.audit_id, contribution.weight
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_shows_scores() {
        let report = test_report();
        let text = render(&report).unwrap();
        assert!(text.contains("Performance"));
        assert!(text.contains("75"));
        assert!(text.contains("Accessibility"));
        assert!(text.contains("not scored"));
    }

    #[test]
    fn test_text_render_warns_on_errors_and_missing() {
        let report = test_report();
        let text = render(&report).unwrap();
        assert!(text.contains("errored"));
        assert!(text.contains("color-contrast"));
    }

    #[test]
    fn test_text_render_uses_group_titles() {
        let report = test_report();
        let text = render(&report).unwrap();
        assert!(text.contains("Metrics"));
        // Ungrouped entries render after groups under a fallback heading
        assert!(text.contains("Other"));
        assert!(text.contains("screenshot-thumbnails"));
    }
}
