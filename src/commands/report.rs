//! Geometry report shared by `render` and `replay`.

use std::io::Write;
use std::num::NonZeroU64;

use anyhow::Result;
use serde::Serialize;

use adbar::player::render::render_progress_bar;
use adbar::player::{
    format_duration, MarkerRenderer, MarkerSurface, PlaybackState, ProgressProjector,
    ProgressSession, TextTrack,
};
use adbar::Config;

#[derive(Debug, Serialize)]
pub struct SegmentReport {
    pub from_ms: i64,
    pub to_ms: i64,
    pub from_px: u64,
    pub to_px: u64,
    pub width_px: u64,
}

#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub duration_ms: Option<u64>,
    pub position_ms: u64,
    pub track_width_px: u32,
    pub start_px: Option<u64>,
    pub segments: Vec<SegmentReport>,
    /// Markers held back until a duration is known
    pub pending_markers: usize,
    pub ended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub ad_panel: Option<String>,
}

impl Report {
    pub fn from_session<S: MarkerSurface>(session: &ProgressSession<S>) -> Self {
        let duration_ms = session.duration_ms();
        let pending_markers = if duration_ms.is_some() {
            0
        } else {
            session.state().markers.len()
        };

        Self {
            source: session.source().map(|s| s.uri.clone()),
            duration_ms,
            position_ms: session.position_ms(),
            track_width_px: session.renderer().projector().track_width_px(),
            start_px: session.start_offset_px(),
            segments: session
                .rendered()
                .iter()
                .map(|r| SegmentReport {
                    from_ms: r.marker.relative_from_ms,
                    to_ms: r.marker.relative_to_ms.unwrap_or(r.marker.relative_from_ms),
                    from_px: r.from_px,
                    to_px: r.to_px,
                    width_px: r.width_px(),
                })
                .collect(),
            pending_markers,
            ended: session.has_ended(),
            error: session.last_error().map(str::to_string),
            ad_panel: (!session.ad_panel().is_empty()).then(|| session.ad_panel().to_string()),
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(source) = &self.source {
            writeln!(out, "source    {}", source)?;
        }
        match self.duration_ms {
            Some(ms) => writeln!(out, "duration  {} ({} ms)", format_duration(ms), ms)?,
            None => writeln!(out, "duration  unknown")?,
        }
        writeln!(out, "position  {}", format_duration(self.position_ms))?;
        writeln!(out, "track     {} px", self.track_width_px)?;
        match self.start_px {
            Some(px) => writeln!(out, "start     {} px", px)?,
            None => writeln!(out, "start     none")?,
        }
        writeln!(out, "segments  {}", self.segments.len())?;
        for seg in &self.segments {
            writeln!(
                out,
                "  {}..{} ms -> {}..{} px ({} px)",
                seg.from_ms, seg.to_ms, seg.from_px, seg.to_px, seg.width_px
            )?;
        }
        if self.pending_markers > 0 {
            writeln!(
                out,
                "pending   {} marker(s) waiting for duration",
                self.pending_markers
            )?;
        }
        if self.ended {
            writeln!(out, "ended     yes")?;
        }
        if let Some(error) = &self.error {
            writeln!(out, "error     {}", error)?;
        }
        if let Some(panel) = &self.ad_panel {
            writeln!(out)?;
            writeln!(out, "{}", panel)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Draw `state` as a terminal progress bar.
///
/// Uses its own renderer so the bar can have a different width than the
/// pixel track.
pub fn write_bar<W: Write>(out: &mut W, config: &Config, state: &PlaybackState) -> Result<()> {
    let width = config.bar_width();
    let projector = ProgressProjector::new(u32::try_from(width).unwrap_or(u32::MAX), true);
    let mut renderer = MarkerRenderer::new(TextTrack::new(width), projector);
    renderer.render(state);

    let playhead = state
        .duration_ms
        .map(|d| projector.project(state.position_ms, d))
        .map(|col| usize::try_from(col).unwrap_or(usize::MAX));
    renderer.surface_mut().set_playhead(playhead);

    render_progress_bar(
        out,
        renderer.surface(),
        state.position_ms,
        state.duration_ms.map(NonZeroU64::get),
        config.use_color(),
    )
}
