use crate::core::rules::{builtin_rules, ReplacementRule};
use crate::utils::error::{Result, RewriteError};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_path, validate_single_line,
    Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 預設改寫的測試檔 (相對於工作目錄)
pub const DEFAULT_TARGET: &str = "apps/3balug/api/src/use-cases/auth/login/login.use-case.test.ts";

#[derive(Debug, Clone, Deserialize)]
pub struct RewriteConfig {
    #[serde(default = "default_target")]
    pub target: String,
    /// 未設定時使用內建規則
    pub rules: Option<Vec<RuleConfig>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub lines: Vec<String>,
    pub replacement: String,
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            rules: None,
        }
    }
}

impl RewriteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| RewriteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;

        // 只替換 target：規則內容是原始碼，可能含有 ${...} 樣板字串
        config.target = Self::substitute_env_vars(&config.target)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${REPO_ROOT})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn target_path(&self) -> PathBuf {
        PathBuf::from(&self.target)
    }

    /// 依設定順序建立規則
    pub fn build_rules(&self) -> Result<Vec<ReplacementRule>> {
        match &self.rules {
            Some(rules) => rules
                .iter()
                .map(|r| {
                    ReplacementRule::from_lines(&r.name, r.lines.as_slice(), &r.replacement)
                })
                .collect(),
            None => builtin_rules(),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("target", &self.target)?;

        if let Some(rules) = &self.rules {
            for (i, rule) in rules.iter().enumerate() {
                validate_non_empty_string(&format!("rules[{}].name", i), &rule.name)?;
                validate_non_empty_list(&format!("rules[{}].lines", i), &rule.lines)?;
                for (j, line) in rule.lines.iter().enumerate() {
                    validate_non_empty_string(&format!("rules[{}].lines[{}]", i, j), line)?;
                }
                validate_single_line(&format!("rules[{}].replacement", i), &rule.replacement)?;
            }
        }

        Ok(())
    }
}

impl Validate for RewriteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
