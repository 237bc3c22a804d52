//! Render subcommand handler

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use adbar::cli::RenderArgs;
use adbar::player::{Marker, PlayerEvent, ProgressProjector, ProgressSession};
use adbar::Config;

use super::report::{write_bar, Report};

/// Read a JSON marker list from a file, or stdin for `-`.
fn read_markers(path: &Path) -> Result<Vec<Marker>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read markers from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read markers from {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid marker list in {}", path.display()))
}

/// Render a marker list for a known duration and print the geometry.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &RenderArgs) -> Result<()> {
    let config = Config::load()?;
    let markers = read_markers(&args.markers)?;

    let width = args.width.unwrap_or(config.track.width_px);
    let mut session = ProgressSession::in_memory(
        ProgressProjector::new(width, config.track.clamp),
        config.clock(),
    );

    // Markers first; the duration update triggers the render.
    session.handle(PlayerEvent::MarkersChanged(markers));
    session.handle(PlayerEvent::DurationChanged(args.duration));
    if let Some(position) = args.position {
        session.handle(PlayerEvent::PositionChanged(position));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = Report::from_session(&session);
    if args.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }
    if args.bar {
        write_bar(&mut out, &config, session.state())?;
    }

    Ok(())
}
