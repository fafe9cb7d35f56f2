use std::path::Path;

use async_trait::async_trait;

use crate::application::errors::ParseError;
use crate::domain::entities::Project;

/// Port for anything that can turn a Live Set file into a [`Project`]
#[async_trait]
pub trait ProjectParser: Send + Sync {
    /// Short backend name used in logs and readiness payloads
    fn name(&self) -> &'static str;

    /// Parse the file at `path`
    fn parse(&self, path: &Path) -> Result<Project, ParseError>;

    /// Same contract as [`ProjectParser::parse`], with file work kept off the async runtime
    async fn parse_async(&self, path: &Path) -> Result<Project, ParseError>;

    /// Cheap structural check. Never fails; any problem yields `false`.
    fn validate(&self, path: &Path) -> bool;
}
