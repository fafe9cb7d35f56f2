use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::api::router::AppState;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status (`healthy`, `ready`, `not_ready`)
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub service: String,
    /// Parser backend that serves requests, reported by the readiness probe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn new(status: &str, state: &AppState) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
            version: state.config.app_version.clone(),
            service: state.config.app_name.clone(),
            parser: None,
            error: None,
        }
    }
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::new("healthy", &state)))
}

/// GET /health/ready
/// Ready once the configured parser backend resolves
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse),
        (status = 503, description = "Parser backend cannot be resolved", body = HealthResponse)
    )
)]
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let resolved = state
        .config
        .parser_kind()
        .and_then(|kind| state.parsers.get(kind).map_err(|e| e.to_string()));

    match resolved {
        Ok(parser) => {
            let mut body = HealthResponse::new("ready", &state);
            body.parser = Some(parser.name().to_string());
            (StatusCode::OK, Json(body))
        }
        Err(error) => {
            warn!(error = %error, "Readiness check failed");
            let mut body = HealthResponse::new("not_ready", &state);
            body.error = Some(error);
            (StatusCode::SERVICE_UNAVAILABLE, Json(body))
        }
    }
}

/// GET /health/live
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    responses(
        (status = 204, description = "Service is alive")
    )
)]
pub async fn liveness_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
