use crate::classify::signature::{BotSignature, SignatureError};
use ahash::RandomState;
use once_cell::sync::Lazy;
use regex::{RegexSet, RegexSetBuilder};
use std::collections::HashSet;

/// Built-in crawler signatures in precedence order.
///
/// Google's variant crawlers all carry "Googlebot" (or "Google") in their
/// user agents, so every variant sits ahead of the generic entry.
const BUILTIN: &[(&str, &str)] = &[
    ("Googlebot-Image", "Googlebot-Image"),
    ("Googlebot-News", "Googlebot-News"),
    ("Googlebot-Video", "Googlebot-Video"),
    ("Google-InspectionTool", "Google-InspectionTool"),
    ("Googlebot", "Googlebot"),
    ("GPTBot", "GPTBot"),
    ("ChatGPT-User", "ChatGPT-User"),
    ("Bingbot", "bingbot"),
    ("YandexBot", "YandexBot"),
    ("Baiduspider", "Baiduspider"),
    ("DuckDuckBot", "DuckDuckBot"),
    // Yahoo
    ("Slurp", "Slurp"),
    ("facebookexternalhit", "facebookexternalhit"),
    ("LinkedInBot", "LinkedInBot"),
    ("Twitterbot", "Twitterbot"),
    ("Applebot", "Applebot"),
    ("AhrefsBot", "AhrefsBot"),
    ("SemrushBot", "SemrushBot"),
    ("MJ12bot", "MJ12bot"),
    ("DotBot", "DotBot"),
    ("PetalBot", "PetalBot"),
    ("ClaudeBot", "ClaudeBot"),
];

pub const GOOGLEBOT_FAMILY: &[&str] = &[
    "Googlebot",
    "Googlebot-Image",
    "Googlebot-News",
    "Googlebot-Video",
    "Google-InspectionTool",
];

pub const LLM_BOTS: &[&str] = &["GPTBot", "ClaudeBot", "ChatGPT-User"];

pub const SEARCH_BOTS: &[&str] = &[
    "Googlebot",
    "Googlebot-Image",
    "Googlebot-News",
    "Googlebot-Video",
    "Google-InspectionTool",
    "Bingbot",
    "YandexBot",
    "Baiduspider",
    "DuckDuckBot",
    "Applebot",
];

static BUILTIN_REGISTRY: Lazy<SignatureRegistry> = Lazy::new(|| {
    SignatureRegistry::new(builtin_signatures()).expect("built-in signatures are correctly ordered")
});

pub fn builtin_signatures() -> Vec<BotSignature> {
    BUILTIN
        .iter()
        .map(|(name, pattern)| BotSignature::new(*name, *pattern))
        .collect()
}

/// Ordered crawler signatures compiled into a single case-insensitive set.
#[derive(Debug, Clone)]
pub struct SignatureRegistry {
    signatures: Vec<BotSignature>,
    matcher: RegexSet,
}

impl SignatureRegistry {
    pub fn new(signatures: Vec<BotSignature>) -> Result<Self, SignatureError> {
        validate_order(&signatures)?;

        let matcher = RegexSetBuilder::new(signatures.iter().map(|s| regex::escape(&s.pattern)))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            signatures,
            matcher,
        })
    }

    pub fn builtin() -> Self {
        BUILTIN_REGISTRY.clone()
    }

    /// Built-in signatures preceded by `extra`, which therefore win ties.
    pub fn with_extra(extra: Vec<BotSignature>) -> Result<Self, SignatureError> {
        if extra.is_empty() {
            return Ok(Self::builtin());
        }

        let mut signatures = extra;
        signatures.extend(builtin_signatures());
        Self::new(signatures)
    }

    /// Name of the first signature found in `user_agent`.
    ///
    /// Empty user agents and the `-` placeholder never match.
    pub fn classify(&self, user_agent: &str) -> Option<&str> {
        if user_agent.is_empty() || user_agent == "-" {
            return None;
        }

        // SetMatches yields indices in ascending order.
        let index = self.matcher.matches(user_agent).iter().next()?;
        Some(self.signatures[index].name.as_str())
    }

    /// Registration index of `name`, used to order ties in rankings.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.signatures.iter().position(|s| s.name == name)
    }

    pub fn signatures(&self) -> &[BotSignature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

fn validate_order(signatures: &[BotSignature]) -> Result<(), SignatureError> {
    let mut names = HashSet::with_hasher(RandomState::new());

    for (index, sig) in signatures.iter().enumerate() {
        if sig.name.trim().is_empty() || sig.pattern.trim().is_empty() {
            return Err(SignatureError::Empty { index });
        }
        if !names.insert(sig.name.as_str()) {
            return Err(SignatureError::DuplicateName {
                name: sig.name.clone(),
            });
        }
    }

    for (i, earlier) in signatures.iter().enumerate() {
        if let Some(later) = signatures[i + 1..].iter().find(|later| earlier.shadows(later)) {
            return Err(SignatureError::Shadowed {
                generic: earlier.name.clone(),
                specific: later.name.clone(),
            });
        }
    }

    Ok(())
}
