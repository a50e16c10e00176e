use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, error};

use crate::error::{ClassifierError, Result};
use crate::normalize::normalize;
use crate::overrides::{Forced, OverridePhraseSet};
use crate::patterns::{PatternScore, PatternSet};
use crate::result::{assemble, ScoringResult};
use crate::shaper::{shape, Bucket};

/// Everything the pipeline learned about one message on the way to its verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub normalized: String,
    pub score: PatternScore,
    pub bucket: Bucket,
    pub forced: Option<Forced>,
    pub result: ScoringResult,
}

impl Evaluation {
    /// Short machine-readable reasons, one per matched category plus any override.
    pub fn reasons(&self) -> Vec<String> {
        let mut reasons: Vec<String> = self
            .score
            .hits
            .iter()
            .map(|(category, count)| format!("{category}:{count}"))
            .collect();
        match self.forced {
            Some(Forced::Spam(phrase)) => reasons.push(format!("forced_spam:{phrase}")),
            Some(Forced::Ham(phrase)) => reasons.push(format!("forced_ham:{phrase}")),
            None => {}
        }
        reasons
    }
}

#[derive(Debug)]
pub struct RuleEngine {
    patterns: PatternSet,
    phrases: OverridePhraseSet,
    version: &'static str,
}

impl RuleEngine {
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(PatternSet::builtin()?, OverridePhraseSet::builtin()?))
    }

    pub fn new(patterns: PatternSet, phrases: OverridePhraseSet) -> Self {
        Self {
            patterns,
            phrases,
            version: "keyword_rules_v1",
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn evaluate(&self, text: &str) -> Evaluation {
        let normalized = normalize(text);
        let score = self.patterns.score(&normalized);
        let shaped = shape(score.spam_score, score.word_count, normalized.len());
        let resolved = self
            .phrases
            .resolve(&normalized, shaped.is_spam, shaped.confidence);

        Evaluation {
            result: assemble(resolved.is_spam, resolved.confidence),
            bucket: shaped.bucket,
            forced: resolved.forced,
            normalized,
            score,
        }
    }

    pub fn classify(&self, text: &str) -> ScoringResult {
        let evaluation = self.evaluate(text);
        debug!(
            version = self.version,
            spam_score = evaluation.score.spam_score,
            word_count = evaluation.score.word_count,
            prediction = %evaluation.result.prediction(),
            confidence = evaluation.result.confidence(),
            reasons = ?evaluation.reasons(),
            "message classified"
        );
        evaluation.result
    }
}

static ENGINE: Lazy<Result<RuleEngine>> = Lazy::new(RuleEngine::builtin);

/// The process-wide engine built from the compiled-in tables.
pub fn shared_engine() -> std::result::Result<&'static RuleEngine, &'static ClassifierError> {
    Lazy::force(&ENGINE).as_ref()
}

/// Classifies `text` with the built-in tables. Never fails: if the tables could not be
/// built the safe default verdict is returned instead.
pub fn classify(text: &str) -> ScoringResult {
    match shared_engine() {
        Ok(engine) => engine.classify(text),
        Err(err) => {
            error!(error = %err, "rule tables unavailable, returning safe default");
            ScoringResult::safe_default()
        }
    }
}

/// Like [`classify`] but keeps the intermediate signals. `None` when the tables are broken.
pub fn explain(text: &str) -> Option<Evaluation> {
    shared_engine().ok().map(|engine| engine.evaluate(text))
}
