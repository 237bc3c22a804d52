//! Replay subcommand handler

use std::io;

use anyhow::{Context, Result};

use adbar::cli::ReplayArgs;
use adbar::player::{load_script, ProgressProjector, ProgressSession};
use adbar::Config;

use super::report::{write_bar, Report};

/// Feed an event script through a session and print the final geometry.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &ReplayArgs) -> Result<()> {
    let config = Config::load()?;
    let events = load_script(&args.script)
        .with_context(|| format!("Failed to load event script {}", args.script.display()))?;

    let width = args.width.unwrap_or(config.track.width_px);
    let mut session = ProgressSession::in_memory(
        ProgressProjector::new(width, config.track.clamp),
        config.clock(),
    );

    tracing::debug!(events = events.len(), "replaying script");
    for event in events {
        session.handle(event);
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
