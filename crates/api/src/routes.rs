use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use classifier::{ClassifierBackend, ScoringResult};
use common::AppConfig;
use futures::future::join_all;
use prometheus::Encoder;
use tracing::{debug, instrument};

use crate::dto::{
    BatchItemDto, BatchPredictRequest, BatchPredictResponse, EndpointsDto, HealthDto,
    PredictRequest, RootDto,
};
use crate::error::{ApiError, ApiResult};
use crate::service::classify_text;

#[derive(Clone)]
pub struct ApiState {
    pub backend: Arc<dyn ClassifierBackend>,
    pub config: AppConfig,
}

impl ApiState {
    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.classifier.timeout_ms)
    }

    fn check_length(&self, text: &str) -> ApiResult<()> {
        let max = self.config.api.max_text_chars;
        if text.trim().chars().count() > max {
            return Err(ApiError::bad_request(format!(
                "Text too long (max {} characters)",
                max
            )));
        }
        Ok(())
    }
}

pub fn build_router(state: Arc<ApiState>) -> Router {
    let metrics_path = state.config.observability.metrics_path.clone();
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .route("/batch_predict", post(batch_predict))
        .route(&metrics_path, get(metrics))
        .with_state(state)
}

async fn root(State(state): State<Arc<ApiState>>) -> Json<RootDto> {
    Json(RootDto {
        message: "Spam Detection API",
        status: "running",
        backend: state.backend.name(),
        endpoints: EndpointsDto {
            health: "/health",
            predict: "/predict",
            batch_predict: "/batch_predict",
        },
    })
}

async fn health(State(state): State<Arc<ApiState>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy",
        service: "spam-detection",
        backend: state.backend.name(),
    })
}

#[instrument(skip_all)]
async fn predict(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<PredictRequest>,
) -> ApiResult<Json<ScoringResult>> {
    state.check_length(&request.text)?;
    let result = classify_text(state.backend.clone(), request.text, state.timeout()).await;
    Ok(Json(result))
}

#[instrument(skip_all)]
async fn batch_predict(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<BatchPredictRequest>,
) -> ApiResult<Json<BatchPredictResponse>> {
    let max_batch = state.config.api.max_batch;
    debug!(count = request.texts.len(), "batch prediction requested");
    if request.texts.len() > max_batch {
        return Err(ApiError::too_large(format!(
            "Too many texts (max {} per batch)",
            max_batch
        )));
    }
    for text in &request.texts {
        state.check_length(text)?;
    }

    let timeout = state.timeout();
    let verdicts = join_all(
        request
            .texts
            .iter()
            .map(|text| classify_text(state.backend.clone(), text.clone(), timeout)),
    )
    .await;

    let predictions = request
        .texts
        .into_iter()
        .zip(verdicts)
        .map(|(text, result)| BatchItemDto { text, result })
        .collect();
    Ok(Json(BatchPredictResponse { predictions }))
}

async fn metrics() -> ApiResult<impl IntoResponse> {
    let encoder = prometheus::TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    let content_type = encoder.format_type().to_string();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok((
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, content_type)],
        buffer,
    ))
}
