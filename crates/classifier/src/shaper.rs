use serde::Serialize;

/// Confidence reported for text with no words at all.
pub const EMPTY_CONFIDENCE: f64 = 0.1;

/// Ladder rung selected by the raw spam score. Variants are ordered so that a higher
/// score never lands in a lower bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    NoSignal,
    Weak,
    Moderate,
    Strong,
    Overwhelming,
}

impl Bucket {
    pub fn for_score(spam_score: u32) -> Self {
        match spam_score {
            0 => Bucket::NoSignal,
            1 => Bucket::Weak,
            2 => Bucket::Moderate,
            3 => Bucket::Strong,
            _ => Bucket::Overwhelming,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shaped {
    pub is_spam: bool,
    pub confidence: f64,
    pub bucket: Bucket,
}

fn base_score(word_count: usize) -> f64 {
    if word_count < 3 {
        0.1
    } else if word_count > 50 {
        0.3
    } else {
        0.2
    }
}

/// Turns raw pattern counts into a spam decision and an unrounded confidence.
///
/// Each bucket caps confidence at its own ceiling (0.55, 0.65, 0.75, 0.85), and the two
/// weakest buckets only call spam when matches make up a large enough share of the words.
/// Zero-signal text gets `0.9 - words/200`, floored at 0.6.
pub fn shape(spam_score: u32, word_count: usize, normalized_length: usize) -> Shaped {
    let bucket = Bucket::for_score(spam_score);
    if word_count == 0 || normalized_length == 0 {
        return Shaped {
            is_spam: false,
            confidence: EMPTY_CONFIDENCE,
            bucket,
        };
    }

    let spam_ratio = spam_score as f64 / word_count.max(1) as f64;
    let base = base_score(word_count);

    let (is_spam, confidence) = match bucket {
        Bucket::Overwhelming => (true, (base + spam_ratio * 0.8).min(0.85)),
        Bucket::Strong => (true, (base + spam_ratio * 0.7).min(0.75)),
        Bucket::Moderate => (spam_ratio > 0.25, (base + spam_ratio * 0.6).min(0.65)),
        Bucket::Weak => (spam_ratio > 0.3, (base + spam_ratio * 0.5).min(0.55)),
        Bucket::NoSignal => (false, (0.9 - word_count as f64 / 200.0).max(0.6)),
    };

    Shaped {
        is_spam,
        confidence,
        bucket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_text_short_circuits() {
        let shaped = shape(0, 0, 0);
        assert!(!shaped.is_spam);
        assert!(approx(shaped.confidence, 0.1));
    }

    #[test]
    fn four_or_more_is_always_spam_with_ceiling() {
        let shaped = shape(6, 6, 30);
        assert!(shaped.is_spam);
        assert!(approx(shaped.confidence, 0.85));

        let diluted = shape(4, 40, 200);
        assert!(diluted.is_spam);
        assert!(approx(diluted.confidence, 0.2 + 0.1 * 0.8));
    }

    #[test]
    fn three_is_spam_capped_at_075() {
        let shaped = shape(3, 5, 30);
        assert!(shaped.is_spam);
        assert!(approx(shaped.confidence, 0.2 + 0.6 * 0.7));

        let capped = shape(3, 3, 15);
        assert!(approx(capped.confidence, 0.75));
    }

    #[test]
    fn two_needs_ratio_above_quarter() {
        let spam = shape(2, 6, 30);
        assert!(spam.is_spam);
        assert!(approx(spam.confidence, 0.2 + (2.0 / 6.0) * 0.6));

        // exactly 0.25 is not enough
        let ham = shape(2, 8, 40);
        assert!(!ham.is_spam);
        assert!(approx(ham.confidence, 0.2 + 0.25 * 0.6));
    }

    #[test]
    fn one_needs_ratio_above_three_tenths() {
        let spam = shape(1, 2, 10);
        assert!(spam.is_spam);
        assert!(approx(spam.confidence, 0.1 + 0.5 * 0.5));

        let capped = shape(1, 1, 4);
        assert!(approx(capped.confidence, 0.55));

        let ham = shape(1, 4, 20);
        assert!(!ham.is_spam);
        assert!(approx(ham.confidence, 0.2 + 0.25 * 0.5));
    }

    #[test]
    fn no_signal_rewards_short_text() {
        let short = shape(0, 6, 30);
        assert!(!short.is_spam);
        assert!(approx(short.confidence, 0.87));

        let long = shape(0, 120, 600);
        assert!(approx(long.confidence, 0.6));
    }

    #[test]
    fn base_score_depends_on_length() {
        assert!(approx(base_score(2), 0.1));
        assert!(approx(base_score(3), 0.2));
        assert!(approx(base_score(50), 0.2));
        assert!(approx(base_score(51), 0.3));
    }

    #[test]
    fn buckets_are_monotonic() {
        let buckets: Vec<_> = (0..8).map(Bucket::for_score).collect();
        assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    }
}
