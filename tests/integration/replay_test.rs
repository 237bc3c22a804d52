//! Integration tests for event script replay

use adbar::player::{load_script, ScriptError};

use crate::helpers::{fixture, session_960};

#[test]
fn replaying_fixture_places_markers() {
    let events = load_script(fixture("session.jsonl")).expect("Should load script");
    let mut session = session_960();

    for event in events {
        session.handle(event);
    }

    assert_eq!(
        session.source().map(|s| s.uri.as_str()),
        Some("https://example.com/live/index.m3u8")
    );
    assert_eq!(session.duration_ms(), Some(60_000));
    assert_eq!(session.start_offset_px(), Some(192));
    assert_eq!(session.surface().geometry(), vec![(0, 192), (480, 96)]);
    assert_eq!(session.position_label(), "0:15");
    assert!(session.ad_panel().is_empty());
}

#[test]
fn bad_script_reports_line() {
    let err = load_script(fixture("bad_script.jsonl")).unwrap_err();
    assert!(matches!(err, ScriptError::Parse { line: 2, .. }));
}
