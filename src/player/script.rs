//! Event scripts.
//!
//! A script is a JSON-lines file with one player notification per line, used
//! to replay what a playback engine and ad SDK would emit:
//!
//! ```text
//! # comments and blank lines are skipped
//! {"event": "source", "uri": "https://example.com/live.m3u8"}
//! {"event": "markers", "markers": [{"type": "START", "relativeFromMs": 0}]}
//! {"event": "duration", "ms": 60000}
//! {"event": "position", "ms": 1000}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::player::engine::PlayerEvent;
use crate::player::render::AdMetadata;
use crate::player::state::{Marker, Source};

/// Errors that can occur while loading an event script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid event on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
enum ScriptLine {
    Duration {
        ms: i64,
    },
    Position {
        ms: i64,
    },
    Markers {
        markers: Vec<Marker>,
    },
    Source(Source),
    Unload,
    AdMetadata {
        #[serde(default)]
        metadata: Option<AdMetadata>,
    },
    Ended,
    Error {
        message: String,
    },
}

impl From<ScriptLine> for PlayerEvent {
    fn from(line: ScriptLine) -> Self {
        match line {
            ScriptLine::Duration { ms } => PlayerEvent::DurationChanged(ms),
            ScriptLine::Position { ms } => PlayerEvent::PositionChanged(ms),
            ScriptLine::Markers { markers } => PlayerEvent::MarkersChanged(markers),
            ScriptLine::Source(source) => PlayerEvent::SourceChanged(Some(source)),
            ScriptLine::Unload => PlayerEvent::SourceChanged(None),
            ScriptLine::AdMetadata { metadata } => PlayerEvent::AdMetadataChanged(metadata),
            ScriptLine::Ended => PlayerEvent::PlaybackEnded,
            ScriptLine::Error { message } => PlayerEvent::PlaybackError(message),
        }
    }
}

/// Parse a script from text.
///
/// Line numbers in errors are 1-based.
pub fn parse_script(text: &str) -> Result<Vec<PlayerEvent>, ScriptError> {
    let mut events = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parsed: ScriptLine = serde_json::from_str(line).map_err(|source| ScriptError::Parse {
            line: idx + 1,
            source,
        })?;
        events.push(parsed.into());
    }

    Ok(events)
}

/// Read and parse a script file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<PlayerEvent>, ScriptError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}
