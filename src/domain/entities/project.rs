use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Track,
    value_objects::{ProjectName, Tempo, TimeSignature},
};

/// Project aggregate - metadata extracted from one Live Set file
///
/// Built once by the assembler and never mutated afterwards. The
/// `with_*` methods consume the value and are only used while building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    name: ProjectName,
    version: String,
    creator: Option<String>,
    tempo: Tempo,
    time_signature: TimeSignature,
    tracks: Vec<Track>,
    created_at: Option<DateTime<Utc>>,
    modified_at: Option<DateTime<Utc>>,
    total_time: Option<f64>,
    samples: Vec<String>,
    plugins: Vec<String>,
}

impl Project {
    pub const UNKNOWN_VERSION: &'static str = "Unknown";

    /// Create a project with default tempo and time signature and no content
    pub fn new(name: ProjectName, version: impl Into<String>) -> Self {
        Self {
            name,
            version: version.into(),
            creator: None,
            tempo: Tempo::default(),
            time_signature: TimeSignature::default(),
            tracks: Vec::new(),
            created_at: None,
            modified_at: None,
            total_time: None,
            samples: Vec::new(),
            plugins: Vec::new(),
        }
    }

    pub fn with_creator(mut self, creator: Option<String>) -> Self {
        self.creator = creator;
        self
    }

    pub fn with_tempo(mut self, tempo: Tempo) -> Self {
        self.tempo = tempo;
        self
    }

    pub fn with_time_signature(mut self, time_signature: TimeSignature) -> Self {
        self.time_signature = time_signature;
        self
    }

    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = tracks;
        self
    }

    pub fn with_samples(mut self, samples: Vec<String>) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_plugins(mut self, plugins: Vec<String>) -> Self {
        self.plugins = plugins;
        self
    }

    // Getters
    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub fn time_signature(&self) -> TimeSignature {
        self.time_signature
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    pub fn total_time(&self) -> Option<f64> {
        self.total_time
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }
}
