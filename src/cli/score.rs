//! Score command - aggregate audit results into category scores

use crate::models::AuditResultStore;
use crate::reporters;
use crate::scoring::ScoreAggregator;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn run(
    results_path: &Path,
    config_path: Option<&Path>,
    no_default: bool,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let model = super::resolve_model(config_path, no_default)?;

    let json = std::fs::read_to_string(results_path)
        .with_context(|| format!("failed to read results file {}", results_path.display()))?;
    let store = AuditResultStore::from_json_str(&json)
        .with_context(|| format!("invalid results in {}", results_path.display()))?;
    info!(
        "Loaded {} audit results from {}",
        store.len(),
        results_path.display()
    );

    let report = ScoreAggregator::new(&model, &store).score_all();
    let rendered = reporters::report(&report, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
