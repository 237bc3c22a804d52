//! adbar - ad-marker progress bar core
//!
//! Projects playback time and ad markers onto a fixed-width progress track.
//! The playback engine and the ad SDK are external; they feed a
//! [`ProgressSession`](player::ProgressSession) with duration, position and
//! marker notifications, and the session keeps the rendered markers in sync.

pub mod cli;
pub mod config;
pub mod error;
pub mod player;

pub use config::Config;
pub use error::ProgressError;
pub use player::{Marker, MarkerKind, PlaybackState, ProgressSession};
