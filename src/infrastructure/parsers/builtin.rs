use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::application::errors::ParseError;
use crate::application::ports::ProjectParser;
use crate::domain::entities::Project;
use crate::infrastructure::parsers::build_project;
use crate::infrastructure::storage::read_compressed;
use crate::infrastructure::xml::{ensure_project_root, parse_document};

/// Parser built on the crate's own gzip reader and XML extractors
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltInParser;

impl BuiltInParser {
    pub const NAME: &'static str = "builtin";

    pub fn new() -> Self {
        Self
    }

    fn check(path: &Path) -> Result<(), ParseError> {
        let bytes = read_compressed(path)?;
        let doc = parse_document(&bytes)?;
        ensure_project_root(&doc)?;
        Ok(())
    }
}

#[async_trait]
impl ProjectParser for BuiltInParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(&self, path: &Path) -> Result<Project, ParseError> {
        if !path.exists() {
            return Err(ParseError::NotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "Parsing project file");

        let bytes = read_compressed(path)?;
        let doc = parse_document(&bytes)?;
        build_project(&doc, path)
    }

    async fn parse_async(&self, path: &Path) -> Result<Project, ParseError> {
        let parser = *self;
        let owned = path.to_path_buf();
        tokio::task::spawn_blocking(move || parser.parse(&owned)).await?
    }

    fn validate(&self, path: &Path) -> bool {
        match Self::check(path) {
            Ok(()) => true,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Project file failed validation");
                false
            }
        }
    }
}
