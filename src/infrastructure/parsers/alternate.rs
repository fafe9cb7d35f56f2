use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::errors::ParseError;
use crate::application::ports::{BackendLocator, ProjectParser};
use crate::domain::entities::Project;

/// Adapter slot for an external Live Set parsing library.
///
/// Construction only succeeds when the library is installed. The
/// integration itself is not wired up yet, so parsing reports
/// `NotImplemented`.
#[derive(Debug, Clone)]
pub struct AlternateParser {
    library: PathBuf,
}

impl AlternateParser {
    pub const NAME: &'static str = "alternate";

    pub fn new(locator: &dyn BackendLocator) -> Result<Self, ParseError> {
        let library = locator.locate().ok_or_else(|| {
            ParseError::BackendUnavailable(
                "alternate parser library not installed; set ALTERNATE_PARSER_PATH or use the builtin parser"
                    .to_string(),
            )
        })?;

        debug!(library = %library.display(), "Alternate parser backend located");
        Ok(Self { library })
    }

    pub fn library(&self) -> &Path {
        &self.library
    }

    fn log_not_implemented(&self, path: &Path) {
        warn!(
            path = %path.display(),
            library = %self.library.display(),
            "Alternate parser integration is not implemented"
        );
    }

    fn not_implemented(&self, path: &Path) -> ParseError {
        self.log_not_implemented(path);
        ParseError::NotImplemented("alternate parser integration".to_string())
    }
}

#[async_trait]
impl ProjectParser for AlternateParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(&self, path: &Path) -> Result<Project, ParseError> {
        Err(self.not_implemented(path))
    }

    async fn parse_async(&self, path: &Path) -> Result<Project, ParseError> {
        Err(self.not_implemented(path))
    }

    fn validate(&self, path: &Path) -> bool {
        self.log_not_implemented(path);
        false
    }
}

/// Locates the alternate backend's library at a configured path
#[derive(Debug, Clone, Default)]
pub struct FilesystemBackendLocator {
    candidate: Option<PathBuf>,
}

impl FilesystemBackendLocator {
    pub fn new(candidate: Option<PathBuf>) -> Self {
        Self { candidate }
    }
}

impl BackendLocator for FilesystemBackendLocator {
    fn locate(&self) -> Option<PathBuf> {
        self.candidate.as_ref().filter(|path| path.is_file()).cloned()
    }
}
