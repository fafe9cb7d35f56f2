use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::application::errors::FileError;

/// Extension of Live Set files, matched exactly
pub const PROJECT_EXTENSION: &str = "als";

/// Recursively list every `.als` file below `dir`, sorted by path
pub fn list_project_files(dir: &Path) -> Result<Vec<PathBuf>, FileError> {
    if !dir.exists() {
        return Err(FileError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(FileError::NotADirectory(dir.to_path_buf()));
    }

    let mut projects = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_project_file(entry.path()) {
                    projects.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!("Error accessing entry: {}", e);
            }
        }
    }

    projects.sort();
    debug!(dir = %dir.display(), count = projects.len(), "Scanned for project files");
    Ok(projects)
}

/// [`list_project_files`] on the blocking thread pool
pub async fn list_project_files_async(dir: &Path) -> Result<Vec<PathBuf>, FileError> {
    let owned = dir.to_path_buf();
    tokio::task::spawn_blocking(move || list_project_files(&owned))
        .await
        .map_err(|e| FileError::Io(std::io::Error::other(e)))?
}

fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == PROJECT_EXTENSION)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_finds_nested_projects_sorted() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("b.als"));
        touch(&dir.path().join("a.als"));
        touch(&dir.path().join("Sets/Live/c.als"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("Backup/a.als.bak"));

        let found = list_project_files(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("Sets/Live/c.als"),
                PathBuf::from("a.als"),
                PathBuf::from("b.als"),
            ]
        );
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("LOUD.ALS"));
        assert!(list_project_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = list_project_files(&dir.path().join("missing"));
        assert!(matches!(result, Err(FileError::NotFound(_))));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("set.als");
        touch(&file);
        assert!(matches!(
            list_project_files(&file),
            Err(FileError::NotADirectory(_))
        ));
    }

    #[tokio::test]
    async fn test_async_variant() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("one.als"));

        let found = list_project_files_async(dir.path()).await.unwrap();
        assert_eq!(found.len(), 1);
    }
}
