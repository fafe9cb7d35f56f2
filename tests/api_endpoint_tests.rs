//! HTTP endpoint tests driven through the full router with `tower::ServiceExt::oneshot`

mod test_fixtures;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use aelus::api::create_router;
use aelus::Config;

use test_fixtures::{test_config, test_state};

fn app_with(config: Config) -> Router {
    create_router(test_state(config))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app_with(test_config()).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Aelus");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_trailing_slash() {
    let response = app_with(test_config()).oneshot(get("/health/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_custom_service_name_and_version() {
    let config = Config {
        app_name: "Aelus Test".to_string(),
        app_version: "9.9.9".to_string(),
        ..test_config()
    };
    let body = json_body(app_with(config).oneshot(get("/health")).await.unwrap()).await;

    assert_eq!(body["service"], "Aelus Test");
    assert_eq!(body["version"], "9.9.9");
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let response = app_with(test_config())
        .oneshot(get("/health/ready"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["parser"], "builtin");
}

#[tokio::test]
async fn test_readiness_not_ready_without_alternate_backend() {
    let config = Config {
        parser_kind: "alternate".to_string(),
        ..test_config()
    };
    let response = app_with(config).oneshot(get("/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let response = app_with(test_config())
        .oneshot(get("/health/live"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_openapi_document() {
    let response = app_with(test_config())
        .oneshot(get("/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["info"]["title"], "Aelus");
    assert!(body["paths"]["/health/ready"].is_object());
}

#[tokio::test]
async fn test_openapi_disabled() {
    let config = Config {
        openapi_url: String::new(),
        ..test_config()
    };
    let response = app_with(config).oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app_with(test_config())
        .oneshot(get("/projects"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rate_limit_enforced() {
    let config = Config {
        rate_limit_requests: 2,
        rate_limit_period_secs: 60,
        ..test_config()
    };
    let app = app_with(config);

    let request = || {
        Request::builder()
            .uri("/health")
            .header("x-forwarded-for", "203.0.113.9")
            .body(Body::empty())
            .unwrap()
    };

    for _ in 0..2 {
        let response = app.clone().oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(header::RETRY_AFTER));

    let body = json_body(response).await;
    assert_eq!(body["error"], "Rate limit exceeded");
    assert!(body["retry_after"].as_u64().unwrap() >= 1);

    // Another client still gets through
    let other = Request::builder()
        .uri("/health")
        .header("x-forwarded-for", "203.0.113.10")
        .body(Body::empty())
        .unwrap();
    assert_eq!(app.oneshot(other).await.unwrap().status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_disabled() {
    let config = Config {
        rate_limit_enabled: false,
        rate_limit_requests: 1,
        ..test_config()
    };
    let app = app_with(config);

    for _ in 0..5 {
        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_cors_headers() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app_with(test_config()).oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_disabled() {
    let config = Config {
        cors_enabled: false,
        ..test_config()
    };
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app_with(config).oneshot(request).await.unwrap();

    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
