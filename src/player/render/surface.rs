//! In-memory marker surface.
//!
//! Keeps the geometry of every visible element so hosts can read back what
//! is on the track, and so tests can check that nothing leaks between renders.

use std::collections::BTreeMap;

use crate::player::render::markers::MarkerSurface;

/// Identifier of a segment element on a [`TrackSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(u64);

/// A visible ad-segment element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBox {
    pub id: SegmentId,
    pub left_px: u64,
    pub width_px: u64,
}

#[derive(Debug, Default)]
pub struct TrackSurface {
    next_id: u64,
    start: Option<u64>,
    segments: BTreeMap<SegmentId, SegmentBox>,
    /// Total elements ever created (monotonic)
    created: u64,
}

impl TrackSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the start indicator, if shown.
    pub fn start(&self) -> Option<u64> {
        self.start
    }

    /// Visible segments in creation order.
    pub fn segments(&self) -> impl Iterator<Item = &SegmentBox> {
        self.segments.values()
    }

    /// `(left, width)` of every visible segment, in creation order.
    pub fn geometry(&self) -> Vec<(u64, u64)> {
        self.segments()
            .map(|s| (s.left_px, s.width_px))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_visible(&self, id: SegmentId) -> bool {
        self.segments.contains_key(&id)
    }

    pub fn created_count(&self) -> u64 {
        self.created
    }
}

impl MarkerSurface for TrackSurface {
    type Element = SegmentId;

    fn show_start(&mut self, left_px: u64) {
        self.start = Some(left_px);
    }

    fn hide_start(&mut self) {
        self.start = None;
    }

    fn create_segment(&mut self, left_px: u64, width_px: u64) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.segments.insert(
            id,
            SegmentBox {
                id,
                left_px,
                width_px,
            },
        );
        id
    }

    fn remove_segment(&mut self, element: SegmentId) {
        if self.segments.remove(&element).is_none() {
            tracing::warn!(?element, "removing unknown segment element");
        }
    }
}
