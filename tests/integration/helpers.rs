//! Shared helpers for integration tests

use std::path::PathBuf;

use adbar::player::{PlaybackClock, ProgressProjector, ProgressSession};

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Session on a 960 px in-memory track with the default throttle.
pub fn session_960() -> ProgressSession {
    ProgressSession::in_memory(ProgressProjector::new(960, true), PlaybackClock::default())
}
