use std::sync::Arc;
use std::time::Duration;

use classifier::{assemble, ClassifierBackend, KeywordBackend, RuleBackend, ScoringResult};
use common::config::BackendKind;
use tracing::{error, warn};

use crate::metrics::{CLASSIFY_SECONDS, FALLBACKS_TOTAL, PREDICTIONS_TOTAL};

/// Confidence the service reports for blank input without consulting a backend. This is
/// deliberately distinct from the rule engine's own empty-text confidence.
pub const BLANK_TEXT_CONFIDENCE: f64 = 0.5;

pub fn select_backend(kind: BackendKind) -> Arc<dyn ClassifierBackend> {
    match kind {
        BackendKind::Rules => {
            if let Err(err) = classifier::shared_engine() {
                error!(error = %err, "rule tables failed to build; every verdict will be the safe default");
            }
            Arc::new(RuleBackend)
        }
        BackendKind::Keyword => Arc::new(KeywordBackend),
    }
}

/// Runs one classification off the async reactor, bounded by `timeout`. A timed-out or
/// panicked classification yields [`ScoringResult::safe_default`].
pub async fn classify_text(
    backend: Arc<dyn ClassifierBackend>,
    text: String,
    timeout: Duration,
) -> ScoringResult {
    if text.trim().is_empty() {
        return assemble(false, BLANK_TEXT_CONFIDENCE);
    }

    let name = backend.name();
    let timer = CLASSIFY_SECONDS.with_label_values(&[name]).start_timer();
    let task = tokio::task::spawn_blocking(move || backend.classify(&text));

    let result = match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => {
            warn!(backend = name, error = %err, "classification task failed, using safe default");
            FALLBACKS_TOTAL.with_label_values(&["task_failed"]).inc();
            ScoringResult::safe_default()
        }
        Err(_) => {
            warn!(
                backend = name,
                timeout_ms = timeout.as_millis() as u64,
                "classification timed out, using safe default"
            );
            FALLBACKS_TOTAL.with_label_values(&["timeout"]).inc();
            ScoringResult::safe_default()
        }
    };
    timer.observe_duration();

    PREDICTIONS_TOTAL
        .with_label_values(&[name, result.prediction().as_str()])
        .inc();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier::Label;

    struct PanickingBackend;

    impl ClassifierBackend for PanickingBackend {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn classify(&self, _text: &str) -> ScoringResult {
            panic!("backend exploded")
        }
    }

    struct SlowBackend;

    impl ClassifierBackend for SlowBackend {
        fn name(&self) -> &'static str {
            "slow"
        }

        fn classify(&self, _text: &str) -> ScoringResult {
            std::thread::sleep(Duration::from_millis(200));
            assemble(true, 0.99)
        }
    }

    #[tokio::test]
    async fn blank_text_uses_service_guard() {
        let result = classify_text(
            Arc::new(RuleBackend),
            "  \n".into(),
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(result.prediction(), Label::Ham);
        assert_eq!(result.confidence(), 0.5);
    }

    #[tokio::test]
    async fn panicking_backend_yields_safe_default() {
        let result = classify_text(
            Arc::new(PanickingBackend),
            "anything".into(),
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(result, ScoringResult::safe_default());
    }

    #[tokio::test]
    async fn slow_backend_yields_safe_default() {
        let result = classify_text(
            Arc::new(SlowBackend),
            "anything".into(),
            Duration::from_millis(10),
        )
        .await;
        assert_eq!(result, ScoringResult::safe_default());
    }

    #[tokio::test]
    async fn selected_backend_matches_kind() {
        assert_eq!(select_backend(BackendKind::Rules).name(), "rules");
        assert_eq!(select_backend(BackendKind::Keyword).name(), "keyword");
    }
}
