use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TrackType;

/// A named channel inside a Live Set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    name: String,
    track_type: TrackType,
    color: Option<i64>,
    is_frozen: bool,
    /// Opaque device records; device parsing is not performed, so this stays empty
    devices: Vec<serde_json::Value>,
}

impl Track {
    pub const DEFAULT_NAME: &'static str = "Untitled Track";

    /// Create a track; the name is stored as given
    pub fn new(name: impl Into<String>, track_type: TrackType) -> Self {
        Self {
            name: name.into(),
            track_type,
            color: None,
            is_frozen: false,
            devices: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: Option<i64>) -> Self {
        self.color = color;
        self
    }

    pub fn with_frozen(mut self, is_frozen: bool) -> Self {
        self.is_frozen = is_frozen;
        self
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn track_type(&self) -> TrackType {
        self.track_type
    }

    pub fn color(&self) -> Option<i64> {
        self.color
    }

    pub fn is_frozen(&self) -> bool {
        self.is_frozen
    }

    pub fn devices(&self) -> &[serde_json::Value] {
        &self.devices
    }
}
