use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

/// Port for finding the runtime dependency of the alternate parser backend
#[cfg_attr(test, automock)]
pub trait BackendLocator: Send + Sync {
    /// Location of the dependency, or `None` when it is not installed
    fn locate(&self) -> Option<PathBuf>;
}
