use std::fmt;

use regex::Regex;
use serde::Serialize;

use crate::error::{ClassifierError, Result};
use crate::normalize::word_count;

/// Vocabulary cluster a pattern belongs to. Categories label hits for diagnostics only;
/// every match contributes the same weight to the spam score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Money,
    FreeOffers,
    Prizes,
    Deals,
    Urgency,
    CallToAction,
    SuspiciousClaims,
    Selection,
    AccountAlerts,
    Credentials,
    Links,
    EmotionalManipulation,
    Investment,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Money => "money",
            Category::FreeOffers => "free_offers",
            Category::Prizes => "prizes",
            Category::Deals => "deals",
            Category::Urgency => "urgency",
            Category::CallToAction => "call_to_action",
            Category::SuspiciousClaims => "suspicious_claims",
            Category::Selection => "selection",
            Category::AccountAlerts => "account_alerts",
            Category::Credentials => "credentials",
            Category::Links => "links",
            Category::EmotionalManipulation => "emotional_manipulation",
            Category::Investment => "investment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Patterns run against normalized text, so they only need lowercase letters and single
// spaces. Multi-word alternatives are listed before their single-word prefixes.
pub(crate) const SPAM_PATTERNS: &[(Category, &str)] = &[
    (
        Category::Money,
        r"\b(?:money|cash|dollars?|income|earnings?|earn|profits?|payments?|funds?|loans?|credit|debt|rich|wealth|wealthy|millionaire)\b",
    ),
    (
        Category::FreeOffers,
        r"\b(?:free|bonus|gift cards?|gifts?|giveaway|freebie|complimentary|no cost)\b",
    ),
    (
        Category::Prizes,
        r"\b(?:win|wins|won|winner|winners|winning|prizes?|lottery|jackpot|rewards?|claim)\b",
    ),
    (
        Category::Deals,
        r"\b(?:deals?|offers?|discounts?|sale|cheap|lowest price|save big|clearance|bargain|exclusive)\b",
    ),
    (
        Category::Urgency,
        r"\b(?:urgent|urgently|immediately|hurry|expires?|expiring|limited time|last chance|today only|deadline|before its too late|too late|act now)\b",
    ),
    (
        Category::CallToAction,
        r"\b(?:click here|click below|click|buy now|order now|call now|apply now|sign up now|subscribe now|unsubscribe|opt out)\b",
    ),
    (
        Category::SuspiciousClaims,
        r"\b(?:guaranteed|guarantee|risk free|no risk|miracle|secret|once in a lifetime|get rich quick|rich quick|no catch|too good to be true|no strings attached)\b",
    ),
    (
        Category::Selection,
        r"\b(?:selected|chosen|eligible|qualified|qualify|pre approved|approved|lucky)\b",
    ),
    (
        Category::AccountAlerts,
        r"\b(?:account|suspended|suspend|suspension|verify|verification|locked|unusual activity|security alert|confirm your|reactivate)\b",
    ),
    (
        Category::Credentials,
        r"\b(?:passwords?|login|log in|username|ssn|social security|pin|bank details|credit card|billing information)\b",
    ),
    (
        Category::Links,
        r"\b(?:links?|website|download|attachment|https?[a-z]*|www[a-z]*|bit ly|tinyurl)\b",
    ),
    (
        Category::EmotionalManipulation,
        r"\b(?:congratulations|congrats|dear friend|dear customer|dear winner|you deserve|dont miss|miss out|exciting news|act fast|only you)\b",
    ),
    (
        Category::Investment,
        r"\b(?:bitcoin|btc|crypto|cryptocurrency|investment|invest|forex|trading|stocks?|returns|dividends?|roi)\b",
    ),
];

#[derive(Debug)]
struct CompiledPattern {
    category: Category,
    regex: Regex,
}

/// The compiled, immutable spam-indicator table.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatternScore {
    pub spam_score: u32,
    pub word_count: usize,
    /// Categories with at least one match, in table order.
    pub hits: Vec<(Category, u32)>,
}

impl PatternSet {
    pub fn builtin() -> Result<Self> {
        Self::compile(SPAM_PATTERNS)
    }

    pub fn compile(table: &[(Category, &str)]) -> Result<Self> {
        let patterns = table
            .iter()
            .map(|&(category, pattern)| {
                Regex::new(pattern)
                    .map(|regex| CompiledPattern { category, regex })
                    .map_err(|source| ClassifierError::Pattern { category, source })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Counts non-overlapping matches of every pattern in `normalized`.
    pub fn score(&self, normalized: &str) -> PatternScore {
        let word_count = word_count(normalized);
        if word_count == 0 {
            return PatternScore::default();
        }

        let mut spam_score = 0u32;
        let mut hits = Vec::new();
        for pattern in &self.patterns {
            let count = pattern.regex.find_iter(normalized).count() as u32;
            if count > 0 {
                spam_score += count;
                hits.push((pattern.category, count));
            }
        }

        PatternScore {
            spam_score,
            word_count,
            hits,
        }
    }
}
