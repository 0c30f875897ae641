pub mod toml_config;

pub use toml_config::{RewriteConfig, RuleConfig, DEFAULT_TARGET};

use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mock-rewriter")]
#[command(about = "Collapse repeated mock-setup blocks in a test file into a shared helper call")]
pub struct CliConfig {
    #[arg(help = "Test file to rewrite (defaults to the built-in login use-case test)")]
    pub path: Option<PathBuf>,

    #[arg(long, help = "TOML file with the target path and replacement rules")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併 TOML 與命令列參數，命令列的路徑優先
    pub fn resolve(&self) -> Result<RewriteConfig> {
        let mut config = match &self.config {
            Some(file) => RewriteConfig::from_file(file)?,
            None => RewriteConfig::default(),
        };

        if let Some(path) = &self.path {
            config.target = path.to_string_lossy().into_owned();
        }

        config.validate()?;
        Ok(config)
    }
}
