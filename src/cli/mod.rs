//! CLI command definitions and handlers

mod score;
mod validate;

use crate::config::{self, ConfigModel};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Pharos - Weighted audit scoring
///
/// Turns per-audit results into weighted category scores using a
/// declarative configuration of audits, groups, and categories.
#[derive(Parser, Debug)]
#[command(name = "pharos")]
#[command(
    version,
    about = "Weighted audit scoring and aggregation",
    long_about = "Pharos resolves a declarative configuration (audits, display groups, \
weighted categories, collection passes) and aggregates per-audit results into \
category scores on a 0-100 scale.\n\n\
Configuration files extend the built-in default config; results are a JSON \
array of per-audit records.",
    after_help = "\
Examples:
  pharos score --results results.json                  Score with the default config
  pharos score --results results.json --format json    JSON output for scripting
  pharos score --results results.json --config my.toml Extend the default config
  pharos validate --config my.toml                     Check a config without scoring
  pharos config                                        Print the resolved config as JSON"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score audit results against a resolved configuration
    #[command(after_help = "\
Examples:
  pharos score --results results.json                       Default config, terminal output
  pharos score --results results.json --format md -o report.md   Markdown report to a file
  pharos score --results results.json --config seo-only.json     Narrowed config
  pharos score --results results.json --config full.toml --no-default   Standalone config")]
    Score {
        /// JSON file with an array of per-audit result records
        #[arg(long, short = 'r')]
        results: PathBuf,

        /// Configuration file (TOML or JSON) extending the default config
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Treat --config as a complete standalone config instead of an
        /// extension of the default
        #[arg(long, requires = "config")]
        no_default: bool,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Validate a configuration without scoring anything
    Validate {
        /// Configuration file (TOML or JSON) extending the default config
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Treat --config as a complete standalone config
        #[arg(long, requires = "config")]
        no_default: bool,
    },

    /// Print the resolved configuration as JSON
    Config {
        /// Configuration file (TOML or JSON) extending the default config
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            results,
            config,
            no_default,
            format,
            output,
        } => score::run(
            &results,
            config.as_deref(),
            no_default,
            &format,
            output.as_deref(),
        ),

        Commands::Validate { config, no_default } => validate::run(config.as_deref(), no_default),

        Commands::Config { config } => {
            let overrides = match config.as_deref() {
                Some(path) => vec![config::load_fragment(path)?],
                None => vec![],
            };
            let merged = config::resolve_raw(config::default_config(), &overrides)?;
            // Validate too, so the printed document is known-good
            ConfigModel::validate(merged.clone())?;
            println!("{}", merged.to_json_string()?);
            Ok(())
        }
    }
}

/// Resolve the configuration a command should run with: the default config,
/// optionally extended (or replaced, with --no-default) by a user file.
fn resolve_model(config_path: Option<&Path>, no_default: bool) -> Result<ConfigModel> {
    match (config_path, no_default) {
        (Some(path), true) => {
            let raw = config::load_config(path)?;
            Ok(ConfigModel::validate(raw)?)
        }
        (Some(path), false) => {
            let fragment = config::load_fragment(path)?;
            Ok(config::resolve_default(&[fragment])?)
        }
        (None, true) => bail!("--no-default requires --config"),
        (None, false) => Ok(config::resolve_default(&[])?),
    }
}
