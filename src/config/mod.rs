//! Configuration for Pharos
//!
//! This module handles:
//! - The raw serializable config document (TOML or JSON)
//! - Validation into a typed, immutable [`ConfigModel`]
//! - Extension/override resolution (base config + fragments)
//! - The built-in default audit/group/category data set

mod default;
pub mod model;
pub mod raw;
pub mod resolver;
mod strings;

pub use default::default_config;
pub use model::{
    Audit, AuditRef, Category, ConfigError, ConfigModel, EntityKind, Gatherer, Group, Pass,
};
pub use raw::{load_config, RawAuditRef, RawCategory, RawConfig, RawGroup, RawPass, Settings};
pub use resolver::{
    load_fragment, resolve, resolve_default, resolve_raw, ConfigFragment, MergeRules,
    MergeStrategy,
};
pub use strings::{ui_strings, UiStrings};
