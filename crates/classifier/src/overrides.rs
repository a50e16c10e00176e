use serde::Serialize;

use crate::error::{ClassifierError, Result};

pub const SPAM_FLOOR: f64 = 0.95;
pub const HAM_FLOOR: f64 = 0.9;

pub(crate) const SPAM_PHRASES: &[&str] = &[
    "win free money",
    "click here to claim",
    "claim your prize",
    "you have won",
    "free lottery",
    "get rich quick",
    "act now before",
    "your account will be suspended",
    "limited time offer",
    "verify your account",
    "send your bank details",
    "wire transfer fee",
];

pub(crate) const HAM_PHRASES: &[&str] = &[
    "hello how are you",
    "how are you doing",
    "lets meet",
    "see you at the meeting",
    "thanks for your help",
    "what time are we",
    "meeting rescheduled",
    "dentist appointment",
    "are we still on",
    "can you send me the report",
    "what is the status of",
];

/// Which literal phrase forced the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "phrase", rename_all = "snake_case")]
pub enum Forced {
    Spam(&'static str),
    Ham(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolved {
    pub is_spam: bool,
    pub confidence: f64,
    pub forced: Option<Forced>,
}

/// Literal substrings that override the scored decision. Spam phrases are always checked
/// first, so text carrying phrases from both sets is forced to spam.
#[derive(Debug, Clone)]
pub struct OverridePhraseSet {
    spam: &'static [&'static str],
    ham: &'static [&'static str],
}

impl OverridePhraseSet {
    pub fn builtin() -> Result<Self> {
        Self::new(SPAM_PHRASES, HAM_PHRASES)
    }

    pub fn new(spam: &'static [&'static str], ham: &'static [&'static str]) -> Result<Self> {
        if let Some(phrase) = spam.iter().find(|p| ham.contains(*p)) {
            return Err(ClassifierError::OverlappingPhrase(*phrase));
        }
        Ok(Self { spam, ham })
    }

    pub fn resolve(&self, normalized: &str, is_spam: bool, confidence: f64) -> Resolved {
        if let Some(phrase) = find_phrase(self.spam, normalized) {
            return Resolved {
                is_spam: true,
                confidence: confidence.max(SPAM_FLOOR),
                forced: Some(Forced::Spam(phrase)),
            };
        }
        if let Some(phrase) = find_phrase(self.ham, normalized) {
            return Resolved {
                is_spam: false,
                confidence: confidence.max(HAM_FLOOR),
                forced: Some(Forced::Ham(phrase)),
            };
        }
        Resolved {
            is_spam,
            confidence,
            forced: None,
        }
    }
}

fn find_phrase(phrases: &'static [&'static str], normalized: &str) -> Option<&'static str> {
    if normalized.is_empty() {
        return None;
    }
    phrases.iter().copied().find(|p| normalized.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases() -> OverridePhraseSet {
        OverridePhraseSet::builtin().expect("builtin phrases are disjoint")
    }

    #[test]
    fn spam_phrase_forces_spam_with_floor() {
        let resolved = phrases().resolve("win free money now", false, 0.3);
        assert!(resolved.is_spam);
        assert_eq!(resolved.confidence, SPAM_FLOOR);
        assert_eq!(resolved.forced, Some(Forced::Spam("win free money")));
    }

    #[test]
    fn ham_phrase_forces_ham_with_floor() {
        let resolved = phrases().resolve("hello how are you doing today", true, 0.4);
        assert!(!resolved.is_spam);
        assert_eq!(resolved.confidence, HAM_FLOOR);
        assert!(matches!(resolved.forced, Some(Forced::Ham(_))));
    }

    #[test]
    fn floor_never_lowers_confidence() {
        let resolved = phrases().resolve("win free money", true, 0.99);
        assert_eq!(resolved.confidence, 0.99);
    }

    #[test]
    fn spam_takes_precedence_over_ham() {
        let resolved = phrases().resolve("hello how are you win free money", false, 0.9);
        assert!(resolved.is_spam);
        assert!(resolved.confidence >= SPAM_FLOOR);
    }

    #[test]
    fn no_phrase_passes_through() {
        let resolved = phrases().resolve("meet me by the river", false, 0.87);
        assert_eq!(
            resolved,
            Resolved {
                is_spam: false,
                confidence: 0.87,
                forced: None
            }
        );
    }

    #[test]
    fn overlapping_sets_are_rejected() {
        static SPAM: &[&str] = &["shared phrase"];
        static HAM: &[&str] = &["other", "shared phrase"];
        let err = OverridePhraseSet::new(SPAM, HAM).unwrap_err();
        assert!(matches!(err, ClassifierError::OverlappingPhrase("shared phrase")));
    }
}
