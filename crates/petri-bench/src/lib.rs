//! Benchmark helpers for the petri Life simulation.
//!
//! The benchmarks themselves live under `benches/`; this library only
//! hosts the shared fixtures.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use petri_core::{patterns, Coord};
use petri_engine::{Automaton, SimConfig};

/// A reproducible one-third-density soup on a square grid.
pub fn soup_automaton(dim: u32, seed: u64) -> Automaton {
    let soup: Vec<Coord> = patterns::random_soup(dim, dim, 0.33, seed);
    Automaton::new(SimConfig::new(dim, dim, soup)).expect("soup coordinates are in bounds")
}

/// The default demo: a glider on a 10×10 grid.
pub fn glider_automaton() -> Automaton {
    Automaton::new(SimConfig::new(10, 10, patterns::GLIDER.coords()))
        .expect("glider seed is in bounds")
}
