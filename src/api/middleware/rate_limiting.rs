use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use serde::Serialize;
use std::{
    collections::VecDeque,
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::Config;

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per client within one window
    pub requests_per_window: usize,
    /// Window length in seconds
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: 100,
            window_seconds: 60,
        }
    }
}

impl From<&Config> for RateLimitConfig {
    fn from(config: &Config) -> Self {
        Self {
            requests_per_window: config.rate_limit_requests,
            window_seconds: config.rate_limit_period_secs,
        }
    }
}

/// Rate limiting middleware response
#[derive(Serialize)]
struct RateLimitResponse {
    error: String,
    retry_after: u64,
}

/// Rate limit error types
#[derive(Debug, PartialEq, Eq)]
pub enum RateLimitError {
    /// Seconds until the client may retry
    LimitExceeded(u64),
}

/// Per-client sliding window limiter
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    // Client key -> (request times, last seen)
    clients: DashMap<String, (VecDeque<Instant>, Instant)>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            clients: DashMap::new(),
        }
    }

    fn window(&self) -> Duration {
        Duration::from_secs(self.config.window_seconds)
    }

    /// Record a request for `key`, or refuse it when the window is full
    pub fn check_limit(&self, key: &str) -> Result<(), RateLimitError> {
        let now = Instant::now();
        let window = self.window();

        let mut entry = self
            .clients
            .entry(key.to_string())
            .or_insert_with(|| (VecDeque::new(), now));
        let (requests, last_seen) = entry.value_mut();
        *last_seen = now;

        // Drop requests that fell out of the window
        while let Some(&oldest) = requests.front() {
            if now.duration_since(oldest) >= window {
                requests.pop_front();
            } else {
                break;
            }
        }

        if requests.len() >= self.config.requests_per_window {
            let retry_after = requests
                .front()
                .map(|oldest| window.saturating_sub(now.duration_since(*oldest)))
                .unwrap_or(window);
            // Round up so clients never retry early
            let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            return Err(RateLimitError::LimitExceeded(secs.max(1)));
        }

        requests.push_back(now);
        Ok(())
    }

    /// Drop clients with no request inside the window
    pub fn cleanup(&self) {
        let now = Instant::now();
        let window = self.window();
        let before = self.clients.len();

        self.clients.retain(|_, (requests, last_seen)| {
            requests.retain(|t| now.duration_since(*t) < window);
            !requests.is_empty() || now.duration_since(*last_seen) < window
        });

        debug!(
            removed = before.saturating_sub(self.clients.len()),
            "Rate limiter cleanup"
        );
    }

    /// Number of tracked clients
    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }

    /// Run [`RateLimiter::cleanup`] periodically in the background
    pub fn spawn_cleanup(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let limiter = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                limiter.cleanup();
            }
        })
    }
}

/// Rate limiting middleware
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request);

    match limiter.check_limit(&client) {
        Ok(()) => next.run(request).await,
        Err(RateLimitError::LimitExceeded(retry_after)) => {
            warn!(client = %client, retry_after, "Rate limit exceeded");

            let response = RateLimitResponse {
                error: "Rate limit exceeded".to_string(),
                retry_after,
            };

            (
                StatusCode::TOO_MANY_REQUESTS,
                [("Retry-After", retry_after.to_string())],
                axum::Json(response),
            )
                .into_response()
        }
    }
}

/// Identify the client: proxy headers first, then the socket address
fn client_key(request: &Request) -> String {
    // Take the first IP in case of multiple
    if let Some(ip) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
    {
        return ip.to_string();
    }

    if let Some(ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .and_then(|ip| ip.trim().parse::<IpAddr>().ok())
    {
        return ip.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
