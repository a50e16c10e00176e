use classifier::ScoringResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchPredictRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchItemDto {
    pub text: String,
    #[serde(flatten)]
    pub result: ScoringResult,
}

#[derive(Debug, Serialize)]
pub struct BatchPredictResponse {
    pub predictions: Vec<BatchItemDto>,
}

#[derive(Debug, Serialize)]
pub struct EndpointsDto {
    pub health: &'static str,
    pub predict: &'static str,
    pub batch_predict: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RootDto {
    pub message: &'static str,
    pub status: &'static str,
    pub backend: &'static str,
    pub endpoints: EndpointsDto,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub service: &'static str,
    pub backend: &'static str,
}
