pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::{CliConfig, RewriteConfig};
pub use crate::core::{engine::RewriteEngine, rules::ReplacementRule};
pub use crate::domain::model::RewriteReport;
pub use crate::utils::error::{Result, RewriteError};

use std::path::Path;

/// Rewrite `path` in place with the built-in rules.
pub fn rewrite(path: impl AsRef<Path>) -> Result<RewriteReport> {
    let engine = RewriteEngine::with_builtin_rules(LocalStorage::default())?;
    engine.run(path.as_ref())
}
