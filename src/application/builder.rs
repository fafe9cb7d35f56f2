use std::sync::Arc;

use tracing::info;

use crate::api::middleware::rate_limiting::{RateLimitConfig, RateLimiter};
use crate::api::router::AppState;
use crate::application::{parser_registry::ParserRegistry, ports::BackendLocator};
use crate::config::Config;
use crate::infrastructure::parsers::FilesystemBackendLocator;

/// Application builder for dependency wiring
pub struct ApplicationBuilder {
    config: Config,
    locator: Option<Arc<dyn BackendLocator>>,
    parsers: Option<Arc<ParserRegistry>>,
    rate_limiter: Option<Arc<RateLimiter>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            locator: None,
            parsers: None,
            rate_limiter: None,
        }
    }

    /// Override how the alternate parser's dependency is located
    pub fn with_backend_locator(mut self, locator: Arc<dyn BackendLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Set up the parser registry
    pub fn with_parsers(mut self) -> Self {
        let locator = self.locator.take().unwrap_or_else(|| {
            Arc::new(FilesystemBackendLocator::new(
                self.config.alternate_parser_path.clone(),
            ))
        });

        self.parsers = Some(Arc::new(ParserRegistry::new(locator)));
        info!(parser_kind = %self.config.parser_kind, "Parser registry initialized");
        self
    }

    /// Set up the rate limiter when enabled in configuration
    pub fn with_rate_limiter(mut self) -> Self {
        if self.config.rate_limit_enabled {
            let limiter = RateLimiter::new(RateLimitConfig::from(&self.config));
            self.rate_limiter = Some(Arc::new(limiter));
            info!(
                requests = self.config.rate_limit_requests,
                period_secs = self.config.rate_limit_period_secs,
                "Rate limiter initialized"
            );
        }
        self
    }

    /// Build application state
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let parsers = self.parsers.ok_or("Parser registry not initialized")?;

        Ok(AppState {
            config: Arc::new(self.config),
            parsers,
            rate_limiter: self.rate_limiter,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
