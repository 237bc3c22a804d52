//! Playback logic for the progress bar.
//!
//! This module handles position/duration tracking and marker validation.

mod clock;
mod markers;

pub use clock::{PlaybackClock, DEFAULT_POSITION_THRESHOLD_MS};
pub use markers::{sanitize_markers, validate_marker};
