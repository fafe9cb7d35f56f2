pub mod health;


pub use health::{health_handler, liveness_handler, readiness_handler, HealthResponse};
