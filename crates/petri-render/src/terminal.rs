//! Terminal presentation: clear and redraw each frame.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use petri_core::Grid;
use petri_engine::RenderSink;

use crate::frame::render_frame;
use crate::glyph::GlyphSet;

/// A sink that clears the display and redraws the grid on every frame.
///
/// Writes to any [`io::Write`]; escape sequences are queued and flushed
/// once per frame so a slow terminal sees whole frames, not partial rows.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
    glyphs: GlyphSet,
}

impl TerminalSink<io::Stdout> {
    /// A sink over stdout with the default glyphs.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), GlyphSet::default())
    }
}

impl<W: Write> TerminalSink<W> {
    /// A sink over `out` with the given glyphs.
    pub fn new(out: W, glyphs: GlyphSet) -> Self {
        Self { out, glyphs }
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn present(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.out, "{}", render_frame(grid, self.glyphs))?;
        writeln!(self.out, "generation {generation}")?;
        self.out.flush()
    }
}
