use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final verdict for one message.
///
/// Only [`assemble`] builds these, so `is_spam` always agrees with `prediction` and
/// `confidence` always sits in `[0, 1]` with three decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringResult {
    prediction: Label,
    confidence: f64,
    is_spam: bool,
}

impl ScoringResult {
    /// Returned whenever classification cannot run to completion.
    pub fn safe_default() -> Self {
        assemble(false, 0.5)
    }

    pub fn prediction(&self) -> Label {
        self.prediction
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn is_spam(&self) -> bool {
        self.is_spam
    }
}

pub fn assemble(is_spam: bool, confidence: f64) -> ScoringResult {
    let prediction = if is_spam { Label::Spam } else { Label::Ham };
    ScoringResult {
        prediction,
        confidence: round3(confidence),
        is_spam,
    }
}

fn round3(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    ((value.clamp(0.0, 1.0)) * 1000.0).round() / 1000.0
}
