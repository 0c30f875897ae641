use crate::core::rules::{builtin_rules, ReplacementRule};
use crate::domain::model::{RewriteReport, RuleOutcome, SourceText};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

pub struct RewriteEngine<S: Storage> {
    storage: S,
    rules: Vec<ReplacementRule>,
}

impl<S: Storage> RewriteEngine<S> {
    pub fn new(storage: S, rules: Vec<ReplacementRule>) -> Self {
        Self { storage, rules }
    }

    pub fn with_builtin_rules(storage: S) -> Result<Self> {
        Ok(Self::new(storage, builtin_rules()?))
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// 依序套用每條規則，後一條規則作用在前一條的結果上
    pub fn transform(&self, source: &str) -> (String, Vec<RuleOutcome>) {
        let mut text = source.to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (rewritten, replacements) = rule.apply(&text);
            tracing::debug!("Rule '{}' replaced {} block(s)", rule.name(), replacements);
            if replacements == 0 {
                tracing::warn!("⚠️ Rule '{}' matched nothing", rule.name());
            }
            text = rewritten;
            outcomes.push(RuleOutcome {
                rule: rule.name().to_string(),
                replacements,
            });
        }

        (text, outcomes)
    }

    /// Read, rewrite and write back `path`.
    ///
    /// The file is written even when no rule matched. Read and decode errors
    /// return before anything is written.
    pub fn run(&self, path: &Path) -> Result<RewriteReport> {
        // Extract
        tracing::info!("📖 Reading {}", path.display());
        let raw = self.storage.read_file(path)?;
        let source = SourceText::from_bytes(raw)?;

        // Transform
        tracing::info!("🔧 Applying {} rule(s)", self.rules.len());
        let (rewritten, outcomes) = self.transform(source.as_str());
        let changed = rewritten != source.as_str();

        // Load
        tracing::info!("💾 Writing {}", path.display());
        self.storage.write_file(path, rewritten.as_bytes())?;

        let report = RewriteReport {
            path: path.to_path_buf(),
            outcomes,
            changed,
        };
        tracing::info!(
            "Replaced {} block(s), content changed: {}",
            report.total_replacements(),
            report.changed
        );

        Ok(report)
    }
}
