mod project;
mod track;

pub use project::Project;
pub use track::Track;
