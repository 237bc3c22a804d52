//! Terminal progress bar.
//!
//! A [`MarkerSurface`] whose "pixels" are terminal columns. The marker
//! renderer paints ad segments into it like into any other surface; the
//! playhead and time display are added when the bar is written out.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;

use crate::player::render::markers::MarkerSurface;
use crate::player::render::progress::format_duration;

/// Handle to a segment painted on a [`TextTrack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextSegment(u64);

/// What a single column of the bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Track,
    Played,
    AdSegment,
    Start,
    Playhead,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Track => '─',
            CellKind::Played => '━',
            CellKind::AdSegment => '█',
            CellKind::Start => '◆',
            CellKind::Playhead => '⏺',
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextTrack {
    width: usize,
    next_id: u64,
    segments: BTreeMap<TextSegment, (usize, usize)>,
    start: Option<usize>,
    playhead: Option<usize>,
}

impl TextTrack {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            next_id: 0,
            segments: BTreeMap::new(),
            start: None,
            playhead: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Place the playhead at `col`. Columns past the end mean "fully played".
    pub fn set_playhead(&mut self, col: Option<usize>) {
        self.playhead = col;
    }

    /// Build the cell array for the bar.
    ///
    /// The playhead takes precedence over the start marker, which takes
    /// precedence over ad segments.
    pub fn cells(&self) -> Vec<CellKind> {
        let played = self.playhead.unwrap_or(0).min(self.width);
        let mut cells: Vec<CellKind> = (0..self.width)
            .map(|i| {
                if i < played {
                    CellKind::Played
                } else {
                    CellKind::Track
                }
            })
            .collect();

        for &(from, to) in self.segments.values() {
            for cell in &mut cells[from..to] {
                *cell = CellKind::AdSegment;
            }
        }

        if let Some(col) = self.start.filter(|&c| c < self.width) {
            cells[col] = CellKind::Start;
        }

        if let Some(col) = self.playhead.filter(|&c| c < self.width) {
            cells[col] = CellKind::Playhead;
        }

        cells
    }

    /// Plain-text rendition of the bar (no colors).
    pub fn to_plain(&self) -> String {
        self.cells().into_iter().map(CellKind::glyph).collect()
    }

    fn column(&self, px: u64) -> usize {
        usize::try_from(px).unwrap_or(usize::MAX).min(self.width)
    }
}

impl MarkerSurface for TextTrack {
    type Element = TextSegment;

    fn show_start(&mut self, left_px: u64) {
        self.start = Some(self.column(left_px));
    }

    fn hide_start(&mut self) {
        self.start = None;
    }

    fn create_segment(&mut self, left_px: u64, width_px: u64) -> TextSegment {
        let from = self.column(left_px);
        // Short ads still get one column so they stay visible.
        let to = self
            .column(left_px.saturating_add(width_px.max(1)))
            .max(from);
        let id = TextSegment(self.next_id);
        self.next_id += 1;
        self.segments.insert(id, (from, to));
        id
    }

    fn remove_segment(&mut self, element: TextSegment) {
        self.segments.remove(&element);
    }
}

/// Write the progress bar followed by the `m:ss/m:ss` time display.
///
/// # Arguments
/// * `out` - Destination
/// * `track` - Track with markers and playhead already placed
/// * `position_ms` - Current playback position
/// * `duration_ms` - Total duration, if known
/// * `color` - Emit ANSI colors
pub fn render_progress_bar<W: Write>(
    out: &mut W,
    track: &TextTrack,
    position_ms: u64,
    duration_ms: Option<u64>,
    color: bool,
) -> Result<()> {
    // ANSI color codes
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const MAGENTA: &str = "\x1b[35m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(track.width() * 4 + 32);
    output.push(' ');

    let mut current: Option<&str> = None;
    for cell in track.cells() {
        if color {
            let code = match cell {
                CellKind::Track => DARK_GREY,
                CellKind::Played => GREEN,
                CellKind::AdSegment => YELLOW,
                CellKind::Start => MAGENTA,
                CellKind::Playhead => WHITE,
            };
            if current != Some(code) {
                output.push_str(code);
                current = Some(code);
            }
        }
        output.push(cell.glyph());
    }

    let total = duration_ms.map_or_else(|| "-:--".to_string(), format_duration);
    if color {
        output.push_str(GREY);
    }
    output.push_str(&format!(" {}/{}", format_duration(position_ms), total));
    if color {
        output.push_str(RESET);
    }

    writeln!(out, "{}", output)?;
    Ok(())
}
