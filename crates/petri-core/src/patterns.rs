//! Seed patterns: the builtin catalogue and deterministic random soups.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::coord::Coord;

/// A named seed pattern.
///
/// Cells are `(x, y)` offsets from the pattern's top-left corner; a
/// pattern says nothing about grid size, and placement is bounds-checked
/// at seeding time like any other coordinate list.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    /// Human-readable name for logging and demo listings.
    pub name: &'static str,
    /// Alive cells as `(x, y)` offsets.
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// The pattern's cells as coordinates, anchored at the origin.
    pub fn coords(&self) -> Vec<Coord> {
        self.cells.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    /// The pattern's cells translated by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Vec<Coord> {
        self.cells
            .iter()
            .map(|&(x, y)| Coord::new(x + dx, y + dy))
            .collect()
    }
}

/// The 5-cell glider. Translates by `(+1, +1)` every 4 generations on an
/// unbounded plane; on a bounded grid it decays at the rim.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Period-2 oscillator: a horizontal triple flips to vertical and back.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// The 2×2 block, the smallest still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Period-2 oscillator of six cells.
pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

/// Period-2 oscillator: two diagonal blocks blinking at the join.
pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

/// Every builtin pattern, in catalogue order.
pub const BUILTIN: &[Pattern] = &[GLIDER, BLINKER, BLOCK, TOAD, BEACON];

/// Deterministic random seeding for a `width × height` grid.
///
/// Each cell is alive with probability `density` (clamped to `[0, 1]`).
/// The same `seed` always yields the same coordinate list, cells in
/// row-major order.
pub fn random_soup(width: u32, height: u32, density: f64, seed: u64) -> Vec<Coord> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut alive = Vec::new();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if rng.random_bool(density) {
                alive.push(Coord::new(x, y));
            }
        }
    }
    alive
}
