//! Shared test fixtures and utilities for all test types
//!
//! Live Set documents plus helpers that write them to temporary `.als`
//! files (gzip-compressed, the way Live stores them).
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

use aelus::api::router::AppState;
use aelus::application::builder::ApplicationBuilder;
use aelus::infrastructure::parsers::FilesystemBackendLocator;
use aelus::Config;

/// Project with three tracks, two sample references and one VST plugin
pub const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Ableton Creator="Ableton Live 11.0.0" MajorVersion="5" MinorVersion="11.0">
    <LiveSet>
        <Tempo>
            <Manual Value="120"/>
        </Tempo>
        <TimeSignature>
            <TimeSignatures>
                <RemoteableTimeSignature>
                    <Numerator Value="4"/>
                    <Denominator Value="4"/>
                </RemoteableTimeSignature>
            </TimeSignatures>
        </TimeSignature>
        <Tracks>
            <AudioTrack Id="0">
                <Name>
                    <EffectiveName Value="1-Audio"/>
                    <UserName Value=""/>
                </Name>
                <ColorIndex Value="5"/>
                <Freeze Value="false"/>
            </AudioTrack>
            <MidiTrack Id="1">
                <Name>
                    <EffectiveName Value="2-MIDI"/>
                    <UserName Value=""/>
                </Name>
                <ColorIndex Value="10"/>
                <Freeze Value="false"/>
            </MidiTrack>
            <ReturnTrack Id="2">
                <Name>
                    <EffectiveName Value="A-Reverb"/>
                    <UserName Value=""/>
                </Name>
            </ReturnTrack>
        </Tracks>
        <FileRef>
            <Path Value="Samples/Kick.wav"/>
        </FileRef>
        <FileRef>
            <Name Value="Snare.wav"/>
        </FileRef>
        <PluginDesc>
            <VstPluginInfo>
                <PlugName Value="Serum"/>
            </VstPluginInfo>
        </PluginDesc>
    </LiveSet>
</Ableton>
"#;

/// Project with an empty track list and no version attributes
pub const MINIMAL_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Ableton Creator="Ableton Live 11.0.0">
    <LiveSet>
        <Tracks/>
    </LiveSet>
</Ableton>
"#;

/// Well-formed XML that is not a Live Set
pub const INVALID_ROOT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<NotAbleton>
    <SomeData/>
</NotAbleton>
"#;

pub fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("Failed to compress fixture");
    encoder.finish().expect("Failed to finish gzip stream")
}

/// Write `xml` gzip-compressed to `dir/name`
pub fn write_project(dir: &Path, name: &str, xml: &str) -> PathBuf {
    write_raw(dir, name, &gzip_bytes(xml.as_bytes()))
}

/// Write bytes to `dir/name` as-is
pub fn write_raw(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, bytes).expect("Failed to write fixture");
    path
}

/// Temporary directory holding `test_project.als` built from [`SAMPLE_XML`]
pub fn sample_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_project(dir.path(), "test_project.als", SAMPLE_XML);
    (dir, path)
}

/// Configuration with defaults and no alternate backend
pub fn test_config() -> Config {
    Config::from_source(|_| None)
}

/// Application state wired the same way the server does it
pub fn test_state(config: Config) -> AppState {
    ApplicationBuilder::new(config)
        .with_backend_locator(Arc::new(FilesystemBackendLocator::default()))
        .with_parsers()
        .with_rate_limiter()
        .build()
        .expect("Failed to build application state")
}
