use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec,
};

pub static PREDICTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "classifier_predictions_total",
        "Predictions served per backend and label",
        &["backend", "label"]
    )
    .expect("predictions metric")
});

pub static FALLBACKS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "classifier_fallbacks_total",
        "Safe-default verdicts returned instead of a backend result",
        &["reason"]
    )
    .expect("fallbacks metric")
});

pub static CLASSIFY_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "classifier_duration_seconds",
        "Wall time spent classifying one message",
        &["backend"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.25]
    )
    .expect("duration metric")
});
