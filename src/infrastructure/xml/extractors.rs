//! Field extractors for Live Set documents
//!
//! Each extractor is a pure function of the document root. None of them
//! fail: absent or unusable structure resolves to the field's default.

use std::collections::HashSet;

use roxmltree::Node;

use crate::domain::entities::{Project, Track};
use crate::domain::value_objects::{Tempo, TimeSignature, TrackType};
use crate::infrastructure::xml::query::{child, child_elements, select_all, select_first, value_attr};

const LIVE_SET: &str = "LiveSet";
const TEMPO_PATH: &[&str] = &["Tempo", "Manual"];
const SIGNATURE_PATH: &[&str] = &["TimeSignature", "TimeSignatures", "RemoteableTimeSignature"];
const TRACKS: &str = "Tracks";
const EFFECTIVE_NAME_PATH: &[&str] = &["Name", "EffectiveName"];
const USER_NAME_PATH: &[&str] = &["Name", "UserName"];
const VST_PLUGIN_PATH: &[&str] = &["PluginDesc", "VstPluginInfo", "PlugName"];
const AU_PLUGIN_PATH: &[&str] = &["PluginDesc", "AuPluginInfo", "Name"];

/// First `LiveSet` element below the root
pub fn live_set<'a, 'input>(root: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    select_first(root, &[LIVE_SET])
}

/// Project tempo, `120.0` BPM when missing or unusable
pub fn extract_tempo(root: Node) -> Tempo {
    live_set(root)
        .and_then(|set| select_first(set, TEMPO_PATH))
        .and_then(value_attr)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .and_then(|bpm| Tempo::new(bpm).ok())
        .unwrap_or_default()
}

/// Project time signature; each component falls back to 4 on its own
pub fn extract_time_signature(root: Node) -> TimeSignature {
    let component = |name: &str| -> u32 {
        live_set(root)
            .and_then(|set| {
                let mut path = SIGNATURE_PATH.to_vec();
                path.push(name);
                select_first(set, &path)
            })
            .and_then(value_attr)
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(TimeSignature::DEFAULT_COMPONENT)
    };

    TimeSignature::new(component("Numerator"), component("Denominator")).unwrap_or_default()
}

/// Every child of every `Tracks` container under the first `LiveSet`, in document order
pub fn extract_tracks(root: Node) -> Vec<Track> {
    let Some(set) = live_set(root) else {
        return Vec::new();
    };

    select_all(set, &[TRACKS])
        .into_iter()
        .flat_map(|container| child_elements(container))
        .map(track_from_element)
        .collect()
}

fn track_from_element(element: Node) -> Track {
    let track_type = TrackType::from_tag(element.tag_name().name());

    let name = select_first(element, EFFECTIVE_NAME_PATH)
        .and_then(value_attr)
        .or_else(|| select_first(element, USER_NAME_PATH).and_then(value_attr))
        .unwrap_or(Track::DEFAULT_NAME);

    let color = select_first(element, &["ColorIndex"])
        .and_then(value_attr)
        .and_then(|value| value.trim().parse::<i64>().ok());

    let is_frozen = select_first(element, &["Freeze"])
        .and_then(|freeze| freeze.attribute("Value"))
        .map(|value| value == "true")
        .unwrap_or(false);

    Track::new(name, track_type)
        .with_color(color)
        .with_frozen(is_frozen)
}

/// Sample references from every `FileRef`; `Path` and `Name` are both candidates
pub fn extract_samples(root: Node) -> Vec<String> {
    let mut samples = UniqueList::default();

    for file_ref in select_all(root, &["FileRef"]) {
        for field in ["Path", "Name"] {
            if let Some(value) = child(file_ref, field).and_then(value_attr) {
                samples.push(value);
            }
        }
    }

    samples.into_vec()
}

/// VST plugin names followed by AU plugin names, each listed once
pub fn extract_plugins(root: Node) -> Vec<String> {
    let mut plugins = UniqueList::default();

    for path in [VST_PLUGIN_PATH, AU_PLUGIN_PATH] {
        for value in select_all(root, path).into_iter().filter_map(value_attr) {
            plugins.push(value);
        }
    }

    plugins.into_vec()
}

/// Display version: `major.minor`, else the creator string, else `Unknown`
pub fn extract_version(root: Node) -> String {
    let major = root.attribute("MajorVersion").filter(|v| !v.is_empty());
    let minor = root.attribute("MinorVersion").filter(|v| !v.is_empty());

    match (major, minor) {
        (Some(major), Some(minor)) => format!("{}.{}", major, minor),
        _ => root
            .attribute("Creator")
            .filter(|v| !v.is_empty())
            .unwrap_or(Project::UNKNOWN_VERSION)
            .to_string(),
    }
}

/// `Creator` attribute copied verbatim
pub fn extract_creator(root: Node) -> Option<String> {
    root.attribute("Creator").map(str::to_string)
}

/// Insertion-ordered set of strings
#[derive(Default)]
struct UniqueList {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl UniqueList {
    fn push(&mut self, value: &str) {
        if self.seen.insert(value.to_string()) {
            self.items.push(value.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}
