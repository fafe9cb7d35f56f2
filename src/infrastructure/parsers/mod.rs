mod alternate;
mod assembler;
mod builtin;

pub use alternate::{AlternateParser, FilesystemBackendLocator};
pub use assembler::build_project;
pub use builtin::BuiltInParser;
