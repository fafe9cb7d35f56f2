use serde::{Deserialize, Serialize};

/// Track category, derived from the track element's tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Audio,
    Midi,
    Return,
    Group,
    #[default]
    Unknown,
}

impl TrackType {
    /// Tag fragments checked in order; the first fragment contained in the tag wins.
    const TAG_FRAGMENTS: [(&'static str, TrackType); 4] = [
        ("Audio", TrackType::Audio),
        ("Midi", TrackType::Midi),
        ("Return", TrackType::Return),
        ("Group", TrackType::Group),
    ];

    /// Classify an element tag (case-sensitive substring match)
    pub fn from_tag(tag: &str) -> Self {
        Self::TAG_FRAGMENTS
            .iter()
            .find(|(fragment, _)| tag.contains(fragment))
            .map(|(_, track_type)| *track_type)
            .unwrap_or(TrackType::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Audio => "audio",
            TrackType::Midi => "midi",
            TrackType::Return => "return",
            TrackType::Group => "group",
            TrackType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TrackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "audio" => Ok(TrackType::Audio),
            "midi" => Ok(TrackType::Midi),
            "return" => Ok(TrackType::Return),
            "group" => Ok(TrackType::Group),
            "unknown" => Ok(TrackType::Unknown),
            _ => Err(format!("Invalid track type: {}", s)),
        }
    }
}
