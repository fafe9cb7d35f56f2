//! # Aelus - Ableton Live Set metadata service
//!
//! Extracts structured metadata (tempo, time signature, tracks, samples,
//! plugins) from gzip-compressed `.als` project files and serves a small
//! health-check API.
//!
//! ## Architecture Layers
//!
//! - **Domain**: `Project`, `Track` and validated value objects
//! - **Application**: parser port, backend selection registry, errors
//! - **Infrastructure**: gzip reader, project scanner, hardened XML loading,
//!   field extractors and parser backends
//! - **API**: HTTP handlers and middleware
//!
//! ## Example Usage
//!
//! ```no_run
//! use aelus::application::parser_registry::{ParserKind, ParserRegistry};
//! use aelus::infrastructure::parsers::FilesystemBackendLocator;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ParserRegistry::new(Arc::new(FilesystemBackendLocator::default()));
//! let parser = registry.get(ParserKind::Automatic)?;
//! let project = parser.parse(Path::new("My Song.als"))?;
//! println!("{} @ {}", project.name(), project.tempo());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use application::errors::{FileError, ParseError};
pub use application::parser_registry::{ParserKind, ParserRegistry};
pub use application::ports;
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
