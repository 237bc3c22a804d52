//! Progress session: everything the progress bar knows about one source.
//!
//! The session owns the [`PlaybackState`], the clock and the marker renderer.
//! Hosts feed it notifications (directly or as [`PlayerEvent`]s) and may
//! subscribe to the values it accepts. Bad input is logged and dropped here;
//! nothing is propagated back to the playback engine.

use std::num::NonZeroU64;

use crate::error::ProgressError;
use crate::player::engine::PlayerEvent;
use crate::player::playback::PlaybackClock;
use crate::player::render::{
    format_duration, AdMetadataPanel, MarkerRenderer, MarkerSurface, ProgressProjector,
    RenderPhase, RenderedMarker, TrackSurface,
};
use crate::player::state::{Marker, PlaybackState, Source};

/// Handle returned by the `on_*_change` registration methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscribers<A: ?Sized> {
    entries: Vec<(SubscriptionId, Box<dyn FnMut(&A)>)>,
}

impl<A: ?Sized> Default for Subscribers<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A: ?Sized> Subscribers<A> {
    fn add(&mut self, id: SubscriptionId, listener: Box<dyn FnMut(&A)>) {
        self.entries.push((id, listener));
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn notify(&mut self, value: &A) {
        for (_, listener) in &mut self.entries {
            listener(value);
        }
    }
}

pub struct ProgressSession<S: MarkerSurface = TrackSurface> {
    state: PlaybackState,
    clock: PlaybackClock,
    renderer: MarkerRenderer<S>,
    source: Option<Source>,
    ad_panel: AdMetadataPanel,
    ended: bool,
    last_error: Option<String>,
    next_subscription: u64,
    duration_listeners: Subscribers<u64>,
    position_listeners: Subscribers<u64>,
    marker_listeners: Subscribers<[Marker]>,
}

impl ProgressSession<TrackSurface> {
    /// Session drawing onto an in-memory [`TrackSurface`].
    pub fn in_memory(projector: ProgressProjector, clock: PlaybackClock) -> Self {
        Self::new(TrackSurface::new(), projector, clock)
    }
}

impl<S: MarkerSurface> ProgressSession<S> {
    pub fn new(surface: S, projector: ProgressProjector, clock: PlaybackClock) -> Self {
        Self {
            state: PlaybackState::new(),
            clock,
            renderer: MarkerRenderer::new(surface, projector),
            source: None,
            ad_panel: AdMetadataPanel::default(),
            ended: false,
            last_error: None,
            next_subscription: 0,
            duration_listeners: Subscribers::default(),
            position_listeners: Subscribers::default(),
            marker_listeners: Subscribers::default(),
        }
    }

    // === Inbound notifications ===

    /// Accept a duration notification and re-render the markers.
    pub fn set_duration(&mut self, ms: i64) -> Result<NonZeroU64, ProgressError> {
        let duration = self.clock.on_duration_update(&mut self.state, ms)?;
        self.renderer.set_duration(&mut self.state, duration);
        self.duration_listeners.notify(&duration.get());
        Ok(duration)
    }

    /// Accept a position notification.
    ///
    /// Returns the accepted position, or `None` if it was throttled.
    pub fn set_position(&mut self, ms: i64) -> Option<u64> {
        let accepted = self.clock.on_position_update(&mut self.state, ms)?;
        tracing::trace!(position_ms = accepted, "position accepted");
        self.position_listeners.notify(&accepted);
        Some(accepted)
    }

    /// Replace the marker list and re-render.
    ///
    /// Returns the number of markers accepted.
    pub fn set_markers(&mut self, markers: Vec<Marker>) -> usize {
        let accepted = self.renderer.set_markers(&mut self.state, markers).len();
        self.marker_listeners.notify(&self.state.markers);
        accepted
    }

    /// Start over for a new source (or no source).
    pub fn load_source(&mut self, source: Option<Source>) {
        tracing::debug!(uri = ?source.as_ref().map(|s| s.uri.as_str()), "loading source");
        self.state.reset();
        self.clock.reset();
        self.renderer.reset();
        self.ad_panel = AdMetadataPanel::default();
        self.ended = false;
        self.last_error = None;
        self.source = source;
    }

    /// Dispatch a notification from the engine or the ad SDK.
    pub fn handle(&mut self, event: PlayerEvent) {
        tracing::trace!(event = event.name(), "handling event");
        match event {
            PlayerEvent::DurationChanged(ms) => {
                if let Err(err) = self.set_duration(ms) {
                    tracing::warn!(%err, "ignoring duration update");
                }
            }
            PlayerEvent::PositionChanged(ms) => {
                self.set_position(ms);
            }
            PlayerEvent::MarkersChanged(markers) => {
                self.set_markers(markers);
            }
            PlayerEvent::SourceChanged(source) => self.load_source(source),
            PlayerEvent::AdMetadataChanged(meta) => {
                self.ad_panel = AdMetadataPanel::from(meta.as_ref());
            }
            PlayerEvent::PlaybackEnded => {
                tracing::info!("playback ended");
                self.ended = true;
            }
            PlayerEvent::PlaybackError(message) => {
                tracing::warn!(error = message.as_str(), "playback error reported by engine");
                self.last_error = Some(message);
            }
        }
    }

    // === Subscriptions ===

    pub fn on_duration_change(
        &mut self,
        mut listener: impl FnMut(u64) + 'static,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.duration_listeners
            .add(id, Box::new(move |ms: &u64| listener(*ms)));
        id
    }

    pub fn on_position_change(
        &mut self,
        mut listener: impl FnMut(u64) + 'static,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.position_listeners
            .add(id, Box::new(move |ms: &u64| listener(*ms)));
        id
    }

    pub fn on_markers_change(
        &mut self,
        listener: impl FnMut(&[Marker]) + 'static,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.marker_listeners.add(id, Box::new(listener));
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.duration_listeners.remove(id)
            || self.position_listeners.remove(id)
            || self.marker_listeners.remove(id)
    }

    fn next_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        id
    }

    // === Read access ===

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.clock.current_duration_ms(&self.state)
    }

    pub fn position_ms(&self) -> u64 {
        self.state.position_ms
    }

    /// Current position as `m:ss`.
    pub fn position_label(&self) -> String {
        format_duration(self.state.position_ms)
    }

    /// Projected playhead; `None` until the duration is known.
    pub fn position_px(&self) -> Option<u64> {
        let duration = self.state.duration_ms?;
        Some(
            self.renderer
                .projector()
                .project(self.state.position_ms, duration),
        )
    }

    pub fn phase(&self) -> RenderPhase {
        self.renderer.phase()
    }

    pub fn start_offset_px(&self) -> Option<u64> {
        self.renderer.start_offset_px()
    }

    pub fn rendered(&self) -> &[RenderedMarker<S::Element>] {
        self.renderer.rendered()
    }

    pub fn renderer(&self) -> &MarkerRenderer<S> {
        &self.renderer
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn ad_panel(&self) -> &AdMetadataPanel {
        &self.ad_panel
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
