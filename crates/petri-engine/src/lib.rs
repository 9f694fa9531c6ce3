//! The petri simulation engine.
//!
//! [`Automaton`] owns the grid and advances it one generation at a time
//! under the standard Life rule, double-buffered so every cell's next
//! state is derived from the pre-step generation only. [`Driver`] is the
//! surrounding control loop: it renders, waits out the tick interval,
//! steps, and stops once two consecutive generations compare equal.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod config;
pub mod driver;

pub use automaton::{Automaton, StepStats};
pub use config::{ConfigError, SimConfig, DEFAULT_TICK_INTERVAL};
pub use driver::{Driver, NullSink, RenderSink, RunSummary};
