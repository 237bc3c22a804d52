//! Marker rendering for the progress track.
//!
//! Every render pass throws away all segment elements created by the previous
//! pass and builds a fresh set from the current state. There is no diffing.

use std::num::NonZeroU64;

use crate::player::playback::sanitize_markers;
use crate::player::render::progress::ProgressProjector;
use crate::player::state::{Marker, PlaybackState};

/// Display that marker geometry is drawn onto.
///
/// The track has a single start indicator that is shown or hidden, and any
/// number of ad-segment elements. Elements are handed back to the surface
/// when the renderer is done with them.
pub trait MarkerSurface {
    /// Handle to one created segment element.
    type Element;

    fn show_start(&mut self, left_px: u64);

    fn hide_start(&mut self);

    fn create_segment(&mut self, left_px: u64, width_px: u64) -> Self::Element;

    fn remove_segment(&mut self, element: Self::Element);
}

/// Renderer phase, derived from whether a duration is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// Nothing can be projected yet
    NoDuration,
    /// Markers are on the track
    HasDuration,
}

/// A segment element together with the marker it was created for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMarker<E> {
    pub element: E,
    pub marker: Marker,
    pub from_px: u64,
    pub to_px: u64,
}

impl<E> RenderedMarker<E> {
    pub fn width_px(&self) -> u64 {
        self.to_px.saturating_sub(self.from_px)
    }
}

/// Projects markers onto a [`MarkerSurface`].
pub struct MarkerRenderer<S: MarkerSurface> {
    surface: S,
    projector: ProgressProjector,
    start_px: Option<u64>,
    segments: Vec<RenderedMarker<S::Element>>,
    phase: RenderPhase,
}

impl<S: MarkerSurface> MarkerRenderer<S> {
    pub fn new(surface: S, projector: ProgressProjector) -> Self {
        Self {
            surface,
            projector,
            start_px: None,
            segments: Vec::new(),
            phase: RenderPhase::NoDuration,
        }
    }

    /// Replace the marker list and re-render.
    ///
    /// Malformed markers are skipped with a warning.
    ///
    /// # Returns
    /// The accepted markers as stored in `state`
    pub fn set_markers<'a>(
        &mut self,
        state: &'a mut PlaybackState,
        markers: Vec<Marker>,
    ) -> &'a [Marker] {
        state.markers = sanitize_markers(markers);
        self.render(state);
        &state.markers
    }

    /// Store a validated duration and re-render.
    ///
    /// Markers that arrived before the duration are placed now.
    pub fn set_duration(&mut self, state: &mut PlaybackState, duration: NonZeroU64) {
        state.duration_ms = Some(duration);
        self.render(state);
    }

    /// Rebuild all marker elements from `state`.
    pub fn render(&mut self, state: &PlaybackState) {
        self.clear();

        let Some(duration) = state.duration_ms else {
            tracing::trace!("no duration yet, markers stay hidden");
            return;
        };
        self.phase = RenderPhase::HasDuration;

        if let Some(start) = state.start_marker() {
            let px = self.project(start.relative_from_ms, duration);
            self.surface.show_start(px);
            self.start_px = Some(px);
        }

        for marker in state.ad_segments() {
            let from_px = self.project(marker.relative_from_ms, duration);
            let to_px = self.project(
                marker.relative_to_ms.unwrap_or(marker.relative_from_ms),
                duration,
            );
            let element = self
                .surface
                .create_segment(from_px, to_px.saturating_sub(from_px));
            self.segments.push(RenderedMarker {
                element,
                marker: marker.clone(),
                from_px,
                to_px,
            });
        }

        tracing::debug!(
            duration_ms = duration.get(),
            start_px = ?self.start_px,
            segments = self.segments.len(),
            "rendered markers"
        );
    }

    /// Remove every element this renderer created and hide the start marker.
    pub fn clear(&mut self) {
        for rendered in self.segments.drain(..) {
            self.surface.remove_segment(rendered.element);
        }
        self.surface.hide_start();
        self.start_px = None;
    }

    /// Clear the track and return to `NoDuration` (new source).
    pub fn reset(&mut self) {
        self.clear();
        self.phase = RenderPhase::NoDuration;
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Pixel offset of the visible start indicator.
    pub fn start_offset_px(&self) -> Option<u64> {
        self.start_px
    }

    /// Segment elements created by the last render, in marker order.
    pub fn rendered(&self) -> &[RenderedMarker<S::Element>] {
        &self.segments
    }

    pub fn projector(&self) -> &ProgressProjector {
        &self.projector
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn project(&self, offset_ms: i64, duration: NonZeroU64) -> u64 {
        // Offsets were validated as non-negative when the markers were set.
        self.projector
            .project(u64::try_from(offset_ms).unwrap_or(0), duration)
    }
}
