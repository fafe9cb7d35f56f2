use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::errors::DomainError;

/// Validated project name, taken from the project file's stem
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidProjectName(
                "Project name cannot be empty".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// Derive the name from a file path (base name without extension).
    ///
    /// Any title stored inside the document is ignored.
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let stem = path.file_stem().ok_or_else(|| {
            DomainError::InvalidProjectName(format!("No file name in path: {}", path.display()))
        })?;

        Self::new(stem.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}
