//! Player state management
//!
//! Contains the central `PlaybackState` struct that holds the state of one
//! loaded source, as well as the marker and source types shared across
//! player modules.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Kind of marker supplied by the ad SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerKind {
    /// Point where the program itself starts (after any pre-roll)
    Start,
    /// A span occupied by an ad break
    AdSegment,
}

/// Marker on the progress track.
///
/// Offsets are relative to playback start, in milliseconds. They are signed
/// so that bad input from the SDK can be detected and skipped rather than
/// silently wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    pub relative_from_ms: i64,
    /// End of the span; only meaningful for `AdSegment`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to_ms: Option<i64>,
}

impl Marker {
    pub fn start(relative_from_ms: i64) -> Self {
        Self {
            kind: MarkerKind::Start,
            relative_from_ms,
            relative_to_ms: None,
        }
    }

    pub fn ad_segment(relative_from_ms: i64, relative_to_ms: i64) -> Self {
        Self {
            kind: MarkerKind::AdSegment,
            relative_from_ms,
            relative_to_ms: Some(relative_to_ms),
        }
    }

    pub fn is_start(&self) -> bool {
        self.kind == MarkerKind::Start
    }

    pub fn is_ad_segment(&self) -> bool {
        self.kind == MarkerKind::AdSegment
    }
}

/// Source descriptor handed to the playback engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_from_position_ms: Option<u64>,
}

impl Source {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            start_from_position_ms: None,
        }
    }

    /// Start offset in seconds, as media elements expect it.
    ///
    /// A zero offset means "from the beginning" and yields `None`.
    pub fn start_seconds(&self) -> Option<f64> {
        self.start_from_position_ms
            .filter(|&ms| ms > 0)
            .map(|ms| ms as f64 / 1000.0)
    }
}

/// Playback state of one loaded source.
///
/// Reset to empty whenever a new source is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Duration of the source; unknown until the first valid notification
    pub duration_ms: Option<NonZeroU64>,
    /// Last accepted playback position
    pub position_ms: u64,
    /// Latest accepted marker list
    pub markers: Vec<Marker>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything about the previous source.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_duration(&self) -> bool {
        self.duration_ms.is_some()
    }

    /// First START marker, if any. Only one start slot exists on the track.
    pub fn start_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.is_start())
    }

    pub fn ad_segments(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.is_ad_segment())
    }
}
