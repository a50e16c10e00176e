use crate::engine;
use crate::normalize::words;
use crate::result::{assemble, ScoringResult};

/// A swappable way of turning text into a verdict. Implementations are immutable once
/// built and are shared across request handlers.
pub trait ClassifierBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn classify(&self, text: &str) -> ScoringResult;
}

/// Weighted pattern ladder with phrase overrides, backed by the process-wide rule tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBackend;

impl ClassifierBackend for RuleBackend {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn classify(&self, text: &str) -> ScoringResult {
        engine::classify(text)
    }
}

const KEYWORDS: &[&str] = &[
    "win",
    "free",
    "money",
    "prize",
    "congratulations",
    "selected",
    "lottery",
    // listed twice on purpose: the detector has always weighted it double
    "selected",
    "claim",
    "urgent",
    "suspended",
    "gift card",
    "limited time",
    "buy now",
    "rich quick",
    "act now",
];

/// Lightweight fallback detector: plain substring hits divided by the raw word count.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordBackend;

impl KeywordBackend {
    const THRESHOLD: f64 = 0.2;
    const CEILING: f64 = 0.95;
}

impl ClassifierBackend for KeywordBackend {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn classify(&self, text: &str) -> ScoringResult {
        let lower = text.to_lowercase();
        let hits = KEYWORDS.iter().filter(|k| lower.contains(*k)).count();
        let word_count = words(text).count();
        let ratio = hits as f64 / word_count.max(1) as f64;
        assemble(ratio > Self::THRESHOLD, (ratio * 2.0).min(Self::CEILING))
    }
}
