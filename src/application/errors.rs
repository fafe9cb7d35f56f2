//! Error types shared by the read layer and the parser backends

use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating, reading or decompressing project files
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid gzip data in {}: {message}", path.display())]
    InvalidGzip { path: PathBuf, message: String },

    #[error("Truncated gzip stream in {}", .0.display())]
    Truncated(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures surfaced by the `ProjectParser` port
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Project file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Corrupt project file: {0}")]
    Corrupt(String),

    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    #[error("Invalid project format: {0}")]
    InvalidFormat(String),

    #[error("Parser backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FileError> for ParseError {
    fn from(err: FileError) -> Self {
        match err {
            FileError::NotFound(path) => ParseError::NotFound(path),
            FileError::NotADirectory(path) => {
                ParseError::InvalidArgument(format!("{} is not a directory", path.display()))
            }
            other => ParseError::Corrupt(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for ParseError {
    fn from(err: tokio::task::JoinError) -> Self {
        ParseError::Internal(format!("blocking task failed: {}", err))
    }
}
