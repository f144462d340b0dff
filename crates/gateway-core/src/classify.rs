//! Classification of unstructured provider errors.
//!
//! Upstream error text is not a stable contract, so classification is a
//! best-effort substring search over the lowercased text. Rules are evaluated
//! in order and the first match wins; text that matches nothing is
//! `UNKNOWN_ERROR`.

use crate::error::ErrorCode;
use http::StatusCode;

/// One row of the classification table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Lowercase substrings, any of which selects this rule
    pub needles: Vec<&'static str>,
    /// Code assigned on match
    pub code: ErrorCode,
}

impl ClassificationRule {
    /// Create a rule
    #[must_use]
    pub fn new(needles: &[&'static str], code: ErrorCode) -> Self {
        Self {
            needles: needles.to_vec(),
            code,
        }
    }

    /// Whether the (already lowercased) text matches
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.needles.iter().any(|needle| lowered.contains(needle))
    }
}

/// Outcome of classifying an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Taxonomy code
    pub code: ErrorCode,
    /// HTTP status to answer with
    pub status: StatusCode,
    /// User-facing message
    pub message: &'static str,
}

impl From<ErrorCode> for Classification {
    fn from(code: ErrorCode) -> Self {
        Self {
            code,
            status: code.status_code(),
            message: code.user_message(),
        }
    }
}

/// Ordered, first-match-wins classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassifier {
    rules: Vec<ClassificationRule>,
    fallback: ErrorCode,
}

impl ErrorClassifier {
    /// Create a classifier from explicit rules
    #[must_use]
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self {
            rules,
            fallback: ErrorCode::UnknownError,
        }
    }

    /// The rules, in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Classify error text. Never fails.
    #[must_use]
    pub fn classify(&self, error_text: &str) -> Classification {
        let lowered = error_text.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(self.fallback, |rule| rule.code)
            .into()
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(vec![
            ClassificationRule::new(
                &["quota", "exhausted", "rate limit"],
                ErrorCode::QuotaExceeded,
            ),
            ClassificationRule::new(
                &["api key", "invalid", "unauthenticated"],
                ErrorCode::ApiKeyInvalid,
            ),
            ClassificationRule::new(&["blocked", "safety", "harmful"], ErrorCode::ContentBlocked),
            ClassificationRule::new(&["timeout", "deadline"], ErrorCode::Timeout),
            ClassificationRule::new(&["network", "connection"], ErrorCode::NetworkError),
            ClassificationRule::new(&["model", "not found"], ErrorCode::ModelNotFound),
        ])
    }
}
