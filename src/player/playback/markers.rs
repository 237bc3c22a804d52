//! Marker validation for the progress bar.
//!
//! Marker lists come straight from the ad SDK. Entries that cannot be placed
//! on the track are dropped with a diagnostic; the rest keep their order.

use crate::error::ProgressError;
use crate::player::state::{Marker, MarkerKind};

/// Check a single marker.
///
/// # Arguments
/// * `index` - Position of the marker in its list (for diagnostics)
/// * `marker` - The marker to check
pub fn validate_marker(index: usize, marker: &Marker) -> Result<(), ProgressError> {
    if marker.relative_from_ms < 0 {
        return Err(ProgressError::malformed(
            index,
            format!("negative start offset {} ms", marker.relative_from_ms),
        ));
    }

    if marker.kind == MarkerKind::AdSegment {
        let to = marker
            .relative_to_ms
            .ok_or_else(|| ProgressError::malformed(index, "ad segment without end offset"))?;
        if to < marker.relative_from_ms {
            return Err(ProgressError::malformed(
                index,
                format!(
                    "end {} ms before start {} ms",
                    to, marker.relative_from_ms
                ),
            ));
        }
    }

    Ok(())
}

/// Drop markers that cannot be placed on the track.
///
/// Each dropped marker is reported with `tracing::warn!`.
///
/// # Returns
/// The accepted markers, in their original order
pub fn sanitize_markers(markers: Vec<Marker>) -> Vec<Marker> {
    markers
        .into_iter()
        .enumerate()
        .filter_map(|(index, marker)| match validate_marker(index, &marker) {
            Ok(()) => Some(marker),
            Err(err) => {
                tracing::warn!(%err, "skipping marker");
                None
            }
        })
        .collect()
}
