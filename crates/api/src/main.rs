use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use api::{build_router, select_backend, ApiState};
use axum::Router;
use common::{config::AppConfig, logging, AppError};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging("api", "info");
    let (config, addr) = load_settings()?;

    let backend = select_backend(config.classifier.backend);
    info!(
        backend = backend.name(),
        timeout_ms = config.classifier.timeout_ms,
        "classifier backend ready"
    );

    let state = Arc::new(ApiState { backend, config });
    let app: Router = build_router(state);

    info!("api listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn load_settings() -> common::Result<(AppConfig, SocketAddr)> {
    let config = AppConfig::load()?;
    let addr = config
        .api
        .bind
        .parse()
        .map_err(|err| AppError::bind(&config.api.bind, err))?;
    Ok((config, addr))
}
