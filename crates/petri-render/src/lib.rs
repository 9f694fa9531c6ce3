//! Text presentation for the petri Life simulation.
//!
//! Grids cross the [`RenderSink`](petri_engine::RenderSink) seam as
//! plain row-major snapshots; this crate turns them into glyph lines
//! and, for interactive use, clears and redraws a terminal each frame.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capture;
pub mod frame;
pub mod glyph;
pub mod terminal;

pub use capture::CaptureSink;
pub use frame::render_frame;
pub use glyph::GlyphSet;
pub use terminal::TerminalSink;
