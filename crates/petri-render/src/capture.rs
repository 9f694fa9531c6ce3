//! Frame capture for headless runs.

use std::io;

use petri_core::Grid;
use petri_engine::RenderSink;

use crate::frame::render_frame;
use crate::glyph::GlyphSet;

/// A sink that records every presented frame as text.
///
/// Useful as a test double for driver loops and for asserting on
/// rendered output without a terminal.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    frames: Vec<(u64, String)>,
}

impl CaptureSink {
    /// An empty capture using ASCII glyphs.
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured `(generation, frame)` pairs, in presentation order.
    pub fn frames(&self) -> &[(u64, String)] {
        &self.frames
    }

    /// The most recently captured frame, if any.
    pub fn last(&self) -> Option<&(u64, String)> {
        self.frames.last()
    }
}

impl RenderSink for CaptureSink {
    fn present(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        self.frames
            .push((generation, render_frame(grid, GlyphSet::ASCII)));
        Ok(())
    }
}
