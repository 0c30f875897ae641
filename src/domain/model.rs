use crate::utils::error::Result;
use std::path::PathBuf;

/// 單一檔案的完整內容 (UTF-8)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText(String);

impl SourceText {
    /// 解碼失敗時回傳 DecodeError
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self(String::from_utf8(bytes)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: String,
    pub replacements: usize,
}

#[derive(Debug, Clone)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub outcomes: Vec<RuleOutcome>,
    pub changed: bool,
}

impl RewriteReport {
    pub fn total_replacements(&self) -> usize {
        self.outcomes.iter().map(|o| o.replacements).sum()
    }

    pub fn replacements_for(&self, rule: &str) -> Option<usize> {
        self.outcomes
            .iter()
            .find(|o| o.rule == rule)
            .map(|o| o.replacements)
    }
}
