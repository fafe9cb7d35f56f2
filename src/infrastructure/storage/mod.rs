mod gzip_reader;
mod project_scanner;

pub use gzip_reader::{read_compressed, read_compressed_async};
pub use project_scanner::{list_project_files, list_project_files_async, PROJECT_EXTENSION};
