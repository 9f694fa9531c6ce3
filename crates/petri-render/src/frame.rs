//! Canonical text frames.

use petri_core::Grid;

use crate::glyph::GlyphSet;

/// Format a grid as glyph lines, one line per row, top to bottom.
///
/// The output is canonical: the same grid always yields the same
/// string, with no trailing newline.
pub fn render_frame(grid: &Grid, glyphs: GlyphSet) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 4 + grid.height() as usize);
    for (i, row) in grid.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for cell in row {
            out.push(if cell.is_alive() {
                glyphs.alive
            } else {
                glyphs.dead
            });
        }
    }
    out
}
