//! Errors raised by the progress-bar core.
//!
//! None of these escape a [`ProgressSession`](crate::player::ProgressSession):
//! the session logs them and keeps its previous state.

/// Rejected input from the playback engine or ad SDK.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("Invalid duration: {ms} ms (must be greater than zero)")]
    InvalidDuration { ms: i64 },

    #[error("Malformed marker #{index}: {reason}")]
    MalformedMarker { index: usize, reason: String },
}

impl ProgressError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedMarker {
            index,
            reason: reason.into(),
        }
    }
}
