//! Pharos - weighted audit scoring and aggregation
//!
//! Pharos turns per-audit results into weighted category scores:
//! a declarative configuration defines audits, display groups, and
//! weighted categories; a run's results are validated into a store and
//! aggregated into a score report one of several reporters can render.
//!
//! The typical flow:
//! 1. Resolve a configuration: the built-in default, optionally extended
//!    by override fragments ([`config::resolve_default`])
//! 2. Collect results into an [`models::AuditResultStore`]
//! 3. Aggregate with [`scoring::ScoreAggregator`]
//! 4. Render with [`reporters::report`]

pub mod cli;
pub mod config;
pub mod models;
pub mod reporters;
pub mod scoring;
