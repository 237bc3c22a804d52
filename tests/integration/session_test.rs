//! Integration tests for ProgressSession through the public API

use std::cell::RefCell;
use std::rc::Rc;

use adbar::player::{Marker, PlayerEvent, RenderPhase, Source};

use crate::helpers::session_960;

#[test]
fn start_marker_at_zero_renders_at_pixel_zero() {
    let mut session = session_960();
    session.set_duration(60_000).unwrap();
    session.set_markers(vec![Marker::start(0)]);

    assert_eq!(session.start_offset_px(), Some(0));
}

#[test]
fn ad_segment_renders_with_expected_width() {
    let mut session = session_960();
    session.set_duration(60_000).unwrap();
    session.set_markers(vec![Marker::ad_segment(30_000, 36_000)]);

    let rendered = session.rendered();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].from_px, 480);
    assert_eq!(rendered[0].to_px, 576);
    assert_eq!(rendered[0].width_px(), 96);
}

#[test]
fn duration_first_renders_nothing_until_markers_arrive() {
    let mut session = session_960();
    session.set_duration(60_000).unwrap();

    assert_eq!(session.phase(), RenderPhase::HasDuration);
    assert_eq!(session.surface().visible_count(), 0);
    assert_eq!(session.start_offset_px(), None);

    session.set_markers(vec![Marker::start(0), Marker::ad_segment(0, 6_000)]);

    assert_eq!(session.surface().visible_count(), 1);
    assert_eq!(session.start_offset_px(), Some(0));
}

#[test]
fn markers_first_render_when_duration_arrives() {
    let mut session = session_960();
    session.set_markers(vec![Marker::start(0), Marker::ad_segment(30_000, 36_000)]);

    assert_eq!(session.phase(), RenderPhase::NoDuration);
    assert_eq!(session.surface().visible_count(), 0);

    session.set_duration(60_000).unwrap();

    assert_eq!(session.surface().geometry(), vec![(480, 96)]);
    assert_eq!(session.start_offset_px(), Some(0));
}

#[test]
fn second_marker_list_fully_replaces_first() {
    let mut session = session_960();
    session.set_duration(60_000).unwrap();

    session.set_markers(vec![
        Marker::start(6_000),
        Marker::ad_segment(0, 6_000),
        Marker::ad_segment(12_000, 18_000),
    ]);
    session.set_markers(vec![Marker::ad_segment(42_000, 48_000)]);

    assert_eq!(session.surface().geometry(), vec![(672, 96)]);
    assert_eq!(session.surface().start(), None);
}

#[test]
fn render_twice_gives_same_geometry() {
    let mut session = session_960();
    let markers = vec![Marker::start(1_000), Marker::ad_segment(10_000, 20_000)];
    session.set_duration(60_000).unwrap();

    session.set_markers(markers.clone());
    let first = (session.surface().geometry(), session.start_offset_px());
    session.set_markers(markers);
    let second = (session.surface().geometry(), session.start_offset_px());

    assert_eq!(first, second);
}

#[test]
fn new_source_starts_from_scratch() {
    let mut session = session_960();
    session.handle(PlayerEvent::DurationChanged(60_000));
    session.handle(PlayerEvent::MarkersChanged(vec![Marker::ad_segment(0, 6_000)]));

    session.handle(PlayerEvent::SourceChanged(Some(Source::new("second.mp4"))));

    assert_eq!(session.phase(), RenderPhase::NoDuration);
    assert_eq!(session.surface().visible_count(), 0);

    // Markers of the new source wait for its duration
    session.handle(PlayerEvent::MarkersChanged(vec![Marker::ad_segment(0, 3_000)]));
    assert_eq!(session.surface().visible_count(), 0);
    session.handle(PlayerEvent::DurationChanged(30_000));
    assert_eq!(session.surface().geometry(), vec![(0, 96)]);
}

#[test]
fn host_wiring_through_subscriptions() {
    let mut session = session_960();
    let label = Rc::new(RefCell::new(String::new()));

    let sink = Rc::clone(&label);
    session.on_position_change(move |ms| {
        *sink.borrow_mut() = adbar::player::format_duration(ms);
    });

    session.handle(PlayerEvent::PositionChanged(125_000));
    assert_eq!(*label.borrow(), "2:05");

    session.handle(PlayerEvent::PositionChanged(125_500));
    assert_eq!(*label.borrow(), "2:05");

    session.handle(PlayerEvent::PositionChanged(5_000));
    assert_eq!(*label.borrow(), "0:05");
}
