use std::path::Path;

use roxmltree::Document;
use tracing::debug;

use crate::application::errors::ParseError;
use crate::domain::entities::Project;
use crate::domain::value_objects::ProjectName;
use crate::infrastructure::xml::{ensure_project_root, extractors};

/// Build a [`Project`] from a parsed Live Set document.
///
/// The name always comes from `source_path`, never from the document.
pub fn build_project(doc: &Document, source_path: &Path) -> Result<Project, ParseError> {
    let root = ensure_project_root(doc)?;

    let name = ProjectName::from_path(source_path)
        .map_err(|e| ParseError::InvalidArgument(e.to_string()))?;

    let project = Project::new(name, extractors::extract_version(root))
        .with_creator(extractors::extract_creator(root))
        .with_tempo(extractors::extract_tempo(root))
        .with_time_signature(extractors::extract_time_signature(root))
        .with_tracks(extractors::extract_tracks(root))
        .with_samples(extractors::extract_samples(root))
        .with_plugins(extractors::extract_plugins(root));

    debug!(
        project = %project.name(),
        version = project.version(),
        tracks = project.tracks().len(),
        samples = project.samples().len(),
        plugins = project.plugins().len(),
        "Assembled project"
    );

    Ok(project)
}
