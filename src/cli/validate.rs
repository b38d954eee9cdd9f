//! Validate command - check a configuration without scoring

use anyhow::Result;
use std::path::Path;

pub fn run(config_path: Option<&Path>, no_default: bool) -> Result<()> {
    let model = super::resolve_model(config_path, no_default)?;

    let total_refs: usize = model
        .categories
        .values()
        .map(|c| c.audit_refs.len())
        .sum();

    println!("Configuration is valid.");
    println!(
        "  {} passes, {} audits, {} groups, {} categories ({} audit refs)",
        model.passes.len(),
        model.audits.len(),
        model.groups.len(),
        model.categories.len(),
        total_refs
    );
    if let Some(primary) = model.primary_pass() {
        println!("  primary pass: {}", primary.name);
    }

    Ok(())
}
