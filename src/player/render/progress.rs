//! Time-to-pixel projection for the progress track.

use std::num::NonZeroU64;

/// Format a millisecond offset as `m:ss`.
///
/// Minutes are not padded; seconds are truncated and zero-padded.
///
/// # Arguments
/// * `ms` - Offset in milliseconds
///
/// # Returns
/// A string in m:ss format
pub fn format_duration(ms: u64) -> String {
    let mins = ms / 60_000;
    let secs = (ms % 60_000) / 1000;
    format!("{}:{:02}", mins, secs)
}

/// Project a time offset onto a track of `track_width_px` pixels.
///
/// Truncates toward zero and never clamps, so offsets past the duration land
/// past the end of the track.
///
/// # Arguments
/// * `offset_ms` - Offset from playback start
/// * `duration` - Total duration of the source
/// * `track_width_px` - Width of the track
pub fn project(offset_ms: u64, duration: NonZeroU64, track_width_px: u32) -> u64 {
    let scaled = u128::from(track_width_px) * u128::from(offset_ms) / u128::from(duration.get());
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Projector bound to one track width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressProjector {
    track_width_px: u32,
    clamp: bool,
}

impl ProgressProjector {
    /// # Arguments
    /// * `track_width_px` - Width of the track
    /// * `clamp` - Limit results to `[0, track_width_px]`
    pub fn new(track_width_px: u32, clamp: bool) -> Self {
        Self {
            track_width_px,
            clamp,
        }
    }

    pub fn track_width_px(&self) -> u32 {
        self.track_width_px
    }

    pub fn clamps(&self) -> bool {
        self.clamp
    }

    pub fn project(&self, offset_ms: u64, duration: NonZeroU64) -> u64 {
        let px = project(offset_ms, duration, self.track_width_px);
        if self.clamp {
            px.min(u64::from(self.track_width_px))
        } else {
            px
        }
    }
}
