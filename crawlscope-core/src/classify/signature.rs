use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named crawler pattern, matched case-insensitively anywhere in a UA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSignature {
    pub name: String,
    pub pattern: String,
}

impl BotSignature {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// True when `other` would never be reached if it came after `self`.
    pub(crate) fn shadows(&self, other: &BotSignature) -> bool {
        other
            .pattern
            .to_lowercase()
            .contains(&self.pattern.to_lowercase())
    }
}

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("signature at position {index} has an empty name or pattern")]
    Empty { index: usize },

    #[error("duplicate signature name '{name}'")]
    DuplicateName { name: String },

    #[error(
        "signature '{generic}' is listed before '{specific}' and matches every user agent \
         '{specific}' matches; move '{specific}' ahead of '{generic}'"
    )]
    Shadowed { generic: String, specific: String },

    #[error("failed to compile signature patterns: {0}")]
    Pattern(#[from] regex::Error),
}
