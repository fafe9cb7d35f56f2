use axum::{extract::State, response::Json};
use utoipa::OpenApi;

use crate::api::handlers::HealthResponse;
use crate::api::router::AppState;

/// OpenAPI document for the Aelus API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aelus",
        description = "Web-based dashboard for Ableton Live projects"
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::health::liveness_handler,
    ),
    components(schemas(HealthResponse)),
    tags(
        (name = "health", description = "Health check endpoints for monitoring service status"),
        (name = "projects", description = "Ableton Live project operations")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document with the configured name, version and description
pub async fn openapi_handler(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    let mut doc = ApiDoc::openapi();
    doc.info.title = state.config.app_name.clone();
    doc.info.version = state.config.app_version.clone();
    doc.info.description = Some(state.config.app_description.clone());
    Json(doc)
}
