use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(".")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/default")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/local")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_bind")]
    pub bind: String,
    #[serde(default = "ApiConfig::default_max_text_chars")]
    pub max_text_chars: usize,
    #[serde(default = "ApiConfig::default_max_batch")]
    pub max_batch: usize,
}

impl ApiConfig {
    fn default_bind() -> String {
        "0.0.0.0:8001".to_string()
    }

    const fn default_max_text_chars() -> usize {
        1000
    }

    const fn default_max_batch() -> usize {
        100
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: Self::default_bind(),
            max_text_chars: Self::default_max_text_chars(),
            max_batch: Self::default_max_batch(),
        }
    }
}

/// Which classifier backend the service wires in at startup.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Rules,
    Keyword,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "ClassifierConfig::default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ClassifierConfig {
    const fn default_timeout_ms() -> u64 {
        250
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            timeout_ms: Self::default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "ObservabilityConfig::default_metrics_path")]
    pub metrics_path: String,
}

impl ObservabilityConfig {
    fn default_metrics_path() -> String {
        "/metrics".to_string()
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_path: Self::default_metrics_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: AppConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.api.bind, "0.0.0.0:8001");
        assert_eq!(config.api.max_text_chars, 1000);
        assert_eq!(config.classifier.backend, BackendKind::Rules);
        assert_eq!(config.observability.metrics_path, "/metrics");
    }

    #[test]
    fn backend_kind_parses_from_string() {
        let config: AppConfig = Config::builder()
            .set_override("classifier.backend", "keyword")
            .unwrap()
            .set_override("classifier.timeout_ms", 40)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.classifier.backend, BackendKind::Keyword);
        assert_eq!(config.classifier.timeout_ms, 40);
    }
}
