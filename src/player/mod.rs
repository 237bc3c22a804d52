//! Ad-marker progress bar
//!
//! Maps playback time onto a fixed-width progress track and keeps the ad
//! markers supplied by the ad SDK drawn on it.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackState struct and shared types (Marker, Source)
//! - `playback/`: Position/duration clock and marker validation
//! - `render/`: Projection, marker rendering, surfaces and the ad panel
//! - `session`: ProgressSession tying state, clock and renderer together
//! - `engine`: Contract of the external playback engine and its events
//! - `script`: JSON-lines event scripts for offline replay
//!
//! # Usage
//!
//! ```
//! use adbar::player::{Marker, PlaybackClock, ProgressProjector, ProgressSession};
//!
//! let mut session =
//!     ProgressSession::in_memory(ProgressProjector::new(960, true), PlaybackClock::default());
//!
//! // Markers may arrive before the duration is known.
//! session.set_markers(vec![Marker::start(0), Marker::ad_segment(30_000, 36_000)]);
//! session.set_duration(60_000).unwrap();
//!
//! assert_eq!(session.start_offset_px(), Some(0));
//! assert_eq!(session.surface().geometry(), vec![(480, 96)]);
//! ```

pub mod engine;
pub(crate) mod playback;
pub mod render;
pub mod script;
pub mod session;
pub mod state;

pub use engine::{PlaybackEngine, PlayerEvent};
pub use playback::{sanitize_markers, validate_marker, PlaybackClock, DEFAULT_POSITION_THRESHOLD_MS};
pub use render::{
    format_duration, project, AdMetadata, AdMetadataPanel, MarkerRenderer, MarkerSurface,
    ProgressProjector, RenderPhase, RenderedMarker, TextTrack, TrackSurface,
};
pub use script::{load_script, parse_script, ScriptError};
pub use session::{ProgressSession, SubscriptionId};
pub use state::{Marker, MarkerKind, PlaybackState, Source};
