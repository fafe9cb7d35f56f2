//! Hardened XML loading, path queries and field extraction

pub mod document;
pub mod extractors;
pub mod query;

pub use document::{ensure_project_root, parse_document, PROJECT_ROOT_TAG};
