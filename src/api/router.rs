use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{health_handler, liveness_handler, readiness_handler};
use crate::api::middleware::{
    cors, metrics,
    rate_limiting::{self, RateLimiter},
};
use crate::api::openapi::openapi_handler;
use crate::application::parser_registry::ParserRegistry;
use crate::config::Config;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub parsers: Arc<ParserRegistry>,
    /// Present when rate limiting is enabled
    pub rate_limiter: Option<Arc<RateLimiter>>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/health/", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .route("/health/live", get(liveness_handler));

    if !state.config.openapi_url.is_empty() {
        router = router.route(&state.config.openapi_url, get(openapi_handler));
    }

    let mut router = router.with_state(state.clone());

    // Layers added later wrap the earlier ones
    if let Some(limiter) = &state.rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            Arc::clone(limiter),
            rate_limiting::rate_limit_middleware,
        ));
    }

    router = router.layer(axum_middleware::from_fn(metrics::metrics_middleware));

    if state.config.cors_enabled {
        router = router.layer(cors::create_cors_layer(&state.config.cors_origins));
    }

    router
}
