//! Core types for the petri Life simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared across the workspace: cell states,
//! coordinates, the bounded row-major grid with its 8-connected
//! neighbourhood, grid errors, and the builtin seed patterns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod patterns;

pub use cell::Cell;
pub use coord::Coord;
pub use error::GridError;
pub use grid::{Grid, MOORE_OFFSETS};
