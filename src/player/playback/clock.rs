//! Playback clock for the progress bar.
//!
//! Position notifications from media elements arrive several times per
//! second and jitter slightly, so only updates that move far enough from the
//! last accepted one are let through.

use std::num::NonZeroU64;

use crate::error::ProgressError;
use crate::player::state::PlaybackState;

/// Default minimum distance between accepted position updates.
pub const DEFAULT_POSITION_THRESHOLD_MS: u64 = 900;

/// Tracks position and duration notifications for one source.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    threshold_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION_THRESHOLD_MS)
    }
}

impl PlaybackClock {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            threshold_ms,
            last_accepted_ms: None,
        }
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    /// Handle a position notification.
    ///
    /// Negative positions are treated as zero. Returns the accepted position,
    /// or `None` if the update was throttled.
    pub fn on_position_update(&mut self, state: &mut PlaybackState, ms: i64) -> Option<u64> {
        let ms = u64::try_from(ms).unwrap_or(0);

        let accept = match self.last_accepted_ms {
            None | Some(0) => true,
            Some(last) => ms.abs_diff(last) > self.threshold_ms,
        };
        if !accept {
            return None;
        }

        self.last_accepted_ms = Some(ms);
        state.position_ms = ms;
        Some(ms)
    }

    /// Handle a duration notification.
    ///
    /// Zero or negative durations are rejected and leave the state untouched.
    pub fn on_duration_update(
        &mut self,
        state: &mut PlaybackState,
        ms: i64,
    ) -> Result<NonZeroU64, ProgressError> {
        let duration = u64::try_from(ms)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or(ProgressError::InvalidDuration { ms })?;

        state.duration_ms = Some(duration);
        Ok(duration)
    }

    pub fn current_duration_ms(&self, state: &PlaybackState) -> Option<u64> {
        state.duration_ms.map(NonZeroU64::get)
    }

    /// Forget the throttle baseline (new source loaded).
    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
