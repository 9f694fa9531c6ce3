//! Glyph selection for cell states.

/// The characters used to draw alive and dead cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    /// Glyph for an alive cell.
    pub alive: char,
    /// Glyph for a dead cell.
    pub dead: char,
}

impl GlyphSet {
    /// Single-width ASCII glyphs, convenient for logs and tests.
    pub const ASCII: Self = Self {
        alive: '#',
        dead: '.',
    };
}

impl Default for GlyphSet {
    /// Colour-block emoji, matching the classic terminal presentation.
    fn default() -> Self {
        Self {
            alive: '🟥',
            dead: '⬜',
        }
    }
}
