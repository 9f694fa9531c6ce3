//! petri: a bounded Conway's Game of Life simulation.
//!
//! This is the facade crate re-exporting the public API from the petri
//! sub-crates. For most users, adding `petri` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // A 2×2 block is a still life: one step settles it.
//! let seed = patterns::BLOCK.offset(1, 1);
//! let mut automaton = Automaton::new(SimConfig::new(4, 4, seed)).unwrap();
//! automaton.step();
//! assert!(automaton.is_settled());
//! assert_eq!(automaton.grid().population(), 4);
//! ```
//!
//! A paced, rendered run is one more line:
//!
//! ```rust,no_run
//! use petri::prelude::*;
//! use std::time::Duration;
//!
//! let automaton =
//!     Automaton::new(SimConfig::new(10, 10, patterns::GLIDER.coords())).unwrap();
//! let mut driver = Driver::new(automaton, TerminalSink::stdout(), Duration::from_millis(200));
//! let summary = driver.run().unwrap();
//! println!("settled after {} generations", summary.generations);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: cells, coordinates, grids, patterns (`petri-core`).
pub use petri_core as types;

/// Automaton engine and driver loop (`petri-engine`).
pub use petri_engine as engine;

/// Text presentation and terminal sinks (`petri-render`).
pub use petri_render as render;

/// The most commonly used items from every sub-crate.
pub mod prelude {
    pub use petri_core::patterns;
    pub use petri_core::{Cell, Coord, Grid, GridError};
    pub use petri_engine::{
        Automaton, ConfigError, Driver, NullSink, RenderSink, RunSummary, SimConfig, StepStats,
        DEFAULT_TICK_INTERVAL,
    };
    pub use petri_render::{render_frame, CaptureSink, GlyphSet, TerminalSink};
}
