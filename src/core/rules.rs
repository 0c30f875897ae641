use crate::utils::error::{Result, RewriteError};
use regex::{Captures, Regex};

/// 兩種 mock 區塊都收斂成這個共用 helper
pub const SETUP_CALL: &str = "setupPendingCustomFieldsMocks()";

pub const INLINE_MOCKS_RULE: &str = "inline-pending-fields-mocks";
pub const BOUND_MOCKS_RULE: &str = "bound-pending-fields-mocks";

const INLINE_MOCKS_LINES: &[&str] = &[
    "mockPlanFeatureRepository.planHasFeature = mock(() => Promise.resolve(true))",
    "mockCustomFieldRepository.hasUserPendingRequiredFields = mock(() => Promise.resolve(true))",
];

const BOUND_MOCKS_LINES: &[&str] = &[
    "const planHasFeature = mock(() => Promise.resolve(true))",
    "const hasUserPendingRequiredFields = mock(() => Promise.resolve(true))",
    "mockPlanFeatureRepository.planHasFeature = planHasFeature",
    "mockCustomFieldRepository.hasUserPendingRequiredFields = hasUserPendingRequiredFields",
];

/// A literal multi-line block and the single line that replaces it.
///
/// Lines are compared after trimming, so indentation and trailing blanks may
/// drift. The indentation of the first matched line is kept in front of the
/// replacement, and the line terminator after the block is left in place.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl ReplacementRule {
    pub fn from_lines<S: AsRef<str>>(name: &str, lines: &[S], replacement: &str) -> Result<Self> {
        if lines.is_empty() {
            return Err(RewriteError::InvalidRuleError {
                rule: name.to_string(),
                reason: "block must contain at least one line".to_string(),
            });
        }

        // 空白行會編譯成 ^[ \t]*$，等於匹配檔案中每一個空行
        if let Some(i) = lines.iter().position(|l| l.as_ref().trim().is_empty()) {
            return Err(RewriteError::InvalidRuleError {
                rule: name.to_string(),
                reason: format!("line {} of the block is blank", i + 1),
            });
        }

        let replacement = replacement.trim();
        if replacement.is_empty() || replacement.contains(['\n', '\r']) {
            return Err(RewriteError::InvalidRuleError {
                rule: name.to_string(),
                reason: "replacement must be a single non-empty line".to_string(),
            });
        }

        // (?mR): ^/$ 以行為單位，並把 \r\n 視為行尾
        let mut pattern = String::from(r"(?mR)^(?P<indent>[ \t]*)");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                pattern.push_str(r"[ \t]*\r?\n[ \t]*");
            }
            pattern.push_str(&regex::escape(line.as_ref().trim()));
        }
        pattern.push_str(r"[ \t]*$");

        Ok(Self {
            name: name.to_string(),
            pattern: Regex::new(&pattern)?,
            replacement: replacement.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// 取代所有不重疊的區塊，回傳新文字與取代次數
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut count = 0;
        let rewritten = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            format!("{}{}", &caps["indent"], self.replacement)
        });
        (rewritten.into_owned(), count)
    }
}

/// The two built-in rules, in application order.
pub fn builtin_rules() -> Result<Vec<ReplacementRule>> {
    Ok(vec![
        ReplacementRule::from_lines(INLINE_MOCKS_RULE, INLINE_MOCKS_LINES, SETUP_CALL)?,
        ReplacementRule::from_lines(BOUND_MOCKS_RULE, BOUND_MOCKS_LINES, SETUP_CALL)?,
    ])
}
