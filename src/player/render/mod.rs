//! Rendering components for the progress bar.
//!
//! This module contains the time-to-pixel projection, the marker renderer and
//! the surfaces it draws onto, plus the ad metadata panel.

mod admeta;
mod markers;
mod progress;
mod surface;
mod text;

pub use admeta::{AdMetadata, AdMetadataPanel};
pub use markers::{MarkerRenderer, MarkerSurface, RenderPhase, RenderedMarker};
pub use progress::{format_duration, project, ProgressProjector};
pub use surface::{SegmentBox, SegmentId, TrackSurface};
pub use text::{render_progress_bar, CellKind, TextSegment, TextTrack};
