pub mod cors;
pub mod metrics;
pub mod rate_limiting;
