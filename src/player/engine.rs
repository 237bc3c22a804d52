//! Playback engine contract.
//!
//! The engine (media element, streaming player) and the ad SDK live outside
//! this crate. They talk to the progress bar through [`PlayerEvent`]s; the
//! host talks to the engine through [`PlaybackEngine`].

use crate::player::render::AdMetadata;
use crate::player::state::{Marker, Source};

/// Commands a host can send to the playback engine.
pub trait PlaybackEngine {
    fn play(&mut self);

    fn pause(&mut self);

    fn seek_to(&mut self, ms: u64);

    /// Load a new source, or unload with `None`.
    fn set_source(&mut self, source: Option<Source>);
}

/// Notification from the playback engine or the ad SDK.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    DurationChanged(i64),
    PositionChanged(i64),
    MarkersChanged(Vec<Marker>),
    SourceChanged(Option<Source>),
    /// `None` when no ad is playing
    AdMetadataChanged(Option<AdMetadata>),
    PlaybackEnded,
    PlaybackError(String),
}

impl PlayerEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DurationChanged(_) => "duration",
            Self::PositionChanged(_) => "position",
            Self::MarkersChanged(_) => "markers",
            Self::SourceChanged(_) => "source",
            Self::AdMetadataChanged(_) => "adMetadata",
            Self::PlaybackEnded => "ended",
            Self::PlaybackError(_) => "error",
        }
    }
}
