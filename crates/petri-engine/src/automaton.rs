//! The automaton engine: double-buffered generation stepping.

use std::mem;
use std::time::Instant;

use petri_core::{Cell, Coord, Grid, GridError};

use crate::config::{ConfigError, SimConfig};

/// Metrics for the most recent step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Wall time spent computing the step, in microseconds.
    pub step_us: u64,
    /// Alive cells after the step.
    pub population: u32,
    /// Generation number after the step.
    pub generation: u64,
}

/// A bounded Life automaton.
///
/// Owns exactly one current generation. Stepping computes the next
/// generation into a staging grid while reading only the current one,
/// then swaps the buffers — the read buffer is never mutated
/// mid-computation, so every cell's next state depends solely on the
/// pre-step generation.
///
/// After a swap the staging grid *is* the previous generation, which
/// makes [`is_settled()`](Automaton::is_settled) a plain structural
/// comparison with no extra copy.
///
/// The automaton never terminates on its own; halting is the caller's
/// decision (see [`Driver`](crate::Driver)).
#[derive(Clone, Debug)]
pub struct Automaton {
    current: Grid,
    staging: Grid,
    generation: u64,
    last_stats: StepStats,
}

impl Automaton {
    /// Construct a seeded automaton at generation 0.
    ///
    /// Allocates an all-dead `width × height` grid and marks each seed
    /// coordinate alive. Fails on the first out-of-bounds coordinate;
    /// validation happens before any grid is built, so construction is
    /// all-or-nothing. Duplicate seed coordinates are idempotent.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let staging = Grid::dead(config.width, config.height)?;
        let mut current = staging.clone();
        for &coord in &config.seed {
            current.set(coord, Cell::Alive)?;
        }
        Ok(Self {
            current,
            staging,
            generation: 0,
            last_stats: StepStats::default(),
        })
    }

    /// Shorthand for [`Automaton::new`] with the default tick interval.
    pub fn with_seed(width: u32, height: u32, seed: Vec<Coord>) -> Result<Self, ConfigError> {
        Self::new(SimConfig::new(width, height, seed))
    }

    /// The current generation's grid.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// The immediately preceding generation's grid.
    ///
    /// Before the first step this is the all-dead grid.
    pub fn previous(&self) -> &Grid {
        &self.staging
    }

    /// Generation counter; 0 until the first step.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Metrics from the most recent step.
    pub fn last_stats(&self) -> &StepStats {
        &self.last_stats
    }

    /// Whether the current generation equals its predecessor.
    ///
    /// Structural cell-by-cell equality, never a serialized form. An
    /// unstepped automaton with an empty seed reports settled
    /// immediately: the all-dead grid is its own successor.
    pub fn is_settled(&self) -> bool {
        self.current == self.staging
    }

    /// Advance one generation and return the new grid.
    ///
    /// Applies the standard Life rule per cell from the live-neighbour
    /// count `n` in the pre-step generation: `n == 2` leaves the cell
    /// unchanged, `n == 3` makes it alive (birth or survival), anything
    /// else kills it. Neighbour positions outside the grid are dead.
    /// Infallible: every queried coordinate is derived from the grid's
    /// own dimensions.
    pub fn step(&mut self) -> &Grid {
        let start = Instant::now();
        let width = self.current.width() as i32;
        let height = self.current.height() as i32;

        let staging = self.staging.as_mut_slice();
        let mut idx = 0;
        for y in 0..height {
            for x in 0..width {
                let coord = Coord::new(x, y);
                let n = self
                    .current
                    .live_neighbours(coord)
                    .expect("loop coordinate is in bounds");
                staging[idx] = match n {
                    2 => Cell::from_bool(self.current.is_alive(coord)),
                    3 => Cell::Alive,
                    _ => Cell::Dead,
                };
                idx += 1;
            }
        }

        mem::swap(&mut self.current, &mut self.staging);
        self.generation += 1;
        self.last_stats = StepStats {
            step_us: start.elapsed().as_micros() as u64,
            population: self.current.population(),
            generation: self.generation,
        };
        &self.current
    }

    /// Step repeatedly without pacing until the population settles.
    ///
    /// Returns the generation at which two consecutive grids first
    /// compared equal, or `None` if `max_steps` elapsed first. Headless
    /// companion to [`Driver::run`](crate::Driver::run) for tests and
    /// benches.
    pub fn run_to_settled(&mut self, max_steps: u64) -> Option<u64> {
        for _ in 0..max_steps {
            if self.is_settled() {
                return Some(self.generation);
            }
            self.step();
        }
        if self.is_settled() {
            Some(self.generation)
        } else {
            None
        }
    }

    /// Return to generation 0 with a fresh seed, keeping the dimensions.
    ///
    /// All-or-nothing like construction: every coordinate is validated
    /// before anything is cleared.
    pub fn reset(&mut self, seed: &[Coord]) -> Result<(), GridError> {
        for &coord in seed {
            self.current.get(coord)?;
        }
        self.current.clear();
        self.staging.clear();
        for &coord in seed {
            self.current.set(coord, Cell::Alive)?;
        }
        self.generation = 0;
        self.last_stats = StepStats::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::patterns;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn grid_from(width: u32, height: u32, alive: &[Coord]) -> Grid {
        let mut grid = Grid::dead(width, height).unwrap();
        for &coord in alive {
            grid.set(coord, Cell::Alive).unwrap();
        }
        grid
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn seeded_cells_alive_everything_else_dead() {
        let seed = vec![c(0, 0), c(3, 2), c(3, 2), c(1, 4)];
        let automaton = Automaton::with_seed(5, 5, seed.clone()).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let expected = seed.contains(&c(x, y));
                assert_eq!(
                    automaton.grid().is_alive(c(x, y)),
                    expected,
                    "cell ({x}, {y})"
                );
            }
        }
        // Duplicates are idempotent: population counts unique cells.
        assert_eq!(automaton.grid().population(), 3);
        assert_eq!(automaton.generation(), 0);
    }

    #[test]
    fn out_of_bounds_seed_rejects_construction() {
        let err = Automaton::with_seed(10, 10, vec![c(1, 1), c(10, 0)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Grid(GridError::OutOfBounds {
                coord: c(10, 0),
                width: 10,
                height: 10,
            })
        );
        assert!(Automaton::with_seed(10, 10, vec![c(-1, 5)]).is_err());
        assert!(Automaton::with_seed(10, 10, vec![c(5, -1)]).is_err());
    }

    #[test]
    fn empty_seed_is_valid_and_settled() {
        let automaton = Automaton::with_seed(4, 4, Vec::new()).unwrap();
        assert_eq!(automaton.grid().population(), 0);
        assert!(automaton.is_settled());
    }

    // ── Transition rule ─────────────────────────────────────────

    #[test]
    fn all_dead_grid_is_a_fixed_point() {
        let mut automaton = Automaton::with_seed(6, 4, Vec::new()).unwrap();
        let before = automaton.grid().clone();
        automaton.step();
        assert_eq!(automaton.grid(), &before);
        assert!(automaton.is_settled());
    }

    #[test]
    fn lone_cell_dies_of_isolation() {
        let mut automaton = Automaton::with_seed(5, 5, vec![c(2, 2)]).unwrap();
        automaton.step();
        assert_eq!(automaton.grid().population(), 0);
    }

    #[test]
    fn block_is_a_still_life() {
        let mut automaton = Automaton::with_seed(4, 4, patterns::BLOCK.offset(1, 1)).unwrap();
        let seeded = automaton.grid().clone();
        for _ in 0..5 {
            automaton.step();
            assert_eq!(automaton.grid(), &seeded);
        }
        assert!(automaton.is_settled());
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut automaton = Automaton::with_seed(5, 5, patterns::BLINKER.offset(1, 2)).unwrap();
        let horizontal = automaton.grid().clone();
        let vertical = grid_from(5, 5, &[c(2, 1), c(2, 2), c(2, 3)]);
        automaton.step();
        assert_eq!(automaton.grid(), &vertical);
        assert!(!automaton.is_settled());
        automaton.step();
        assert_eq!(automaton.grid(), &horizontal);
    }

    #[test]
    fn dead_cell_with_two_neighbours_stays_dead() {
        // Two alive cells flank (1, 1): n == 2 leaves it unchanged, dead.
        let mut automaton = Automaton::with_seed(3, 3, vec![c(0, 1), c(2, 1)]).unwrap();
        automaton.step();
        assert!(!automaton.grid().is_alive(c(1, 1)));
        // The flanking cells had a single neighbour each: both die.
        assert_eq!(automaton.grid().population(), 0);
    }

    #[test]
    fn birth_requires_exactly_three_neighbours() {
        // L-tromino: the fourth corner is born, completing a block.
        let mut automaton = Automaton::with_seed(4, 4, vec![c(1, 1), c(2, 1), c(1, 2)]).unwrap();
        automaton.step();
        assert_eq!(automaton.grid(), &grid_from(4, 4, &patterns::BLOCK.offset(1, 1)));
    }

    #[test]
    fn overcrowded_cell_dies() {
        // Plus shape: the centre has 4 neighbours and dies.
        let seed = vec![c(1, 1), c(0, 1), c(2, 1), c(1, 0), c(1, 2)];
        let mut automaton = Automaton::with_seed(3, 3, seed).unwrap();
        automaton.step();
        assert!(!automaton.grid().is_alive(c(1, 1)));
    }

    // ── Glider behaviour ────────────────────────────────────────

    #[test]
    fn glider_translates_diagonally_every_four_steps() {
        let mut automaton = Automaton::with_seed(10, 10, patterns::GLIDER.coords()).unwrap();
        for _ in 0..4 {
            automaton.step();
        }
        let expected = grid_from(10, 10, &patterns::GLIDER.offset(1, 1));
        assert_eq!(automaton.grid(), &expected);
    }

    #[test]
    fn bounded_glider_run_terminates() {
        // The glider hits the rim and decays; the run must reach a
        // generation equal to its predecessor well within the cap.
        let mut automaton = Automaton::with_seed(10, 10, patterns::GLIDER.coords()).unwrap();
        let settled_at = automaton.run_to_settled(512);
        assert!(settled_at.is_some(), "glider never settled");
        assert!(automaton.is_settled());
    }

    // ── Double buffering ────────────────────────────────────────

    #[test]
    fn previous_holds_the_pre_step_generation() {
        let mut automaton = Automaton::with_seed(5, 5, patterns::GLIDER.coords()).unwrap();
        let seeded = automaton.grid().clone();
        automaton.step();
        assert_eq!(automaton.previous(), &seeded);
    }

    #[test]
    fn step_is_synchronous_not_sequential() {
        // A blinker evaluated cell-by-cell in place would decay; the
        // staged evaluation must preserve the oscillation.
        let mut automaton = Automaton::with_seed(5, 5, patterns::BLINKER.offset(1, 2)).unwrap();
        automaton.step();
        assert_eq!(automaton.grid().population(), 3);
    }

    // ── Stats, reset ────────────────────────────────────────────

    #[test]
    fn stats_track_generation_and_population() {
        let mut automaton = Automaton::with_seed(4, 4, patterns::BLOCK.coords()).unwrap();
        automaton.step();
        let stats = automaton.last_stats();
        assert_eq!(stats.generation, 1);
        assert_eq!(stats.population, 4);
    }

    #[test]
    fn reset_reseeds_at_generation_zero() {
        let mut automaton = Automaton::with_seed(5, 5, patterns::GLIDER.coords()).unwrap();
        automaton.step();
        automaton.step();
        automaton.reset(&patterns::BLOCK.offset(1, 1)).unwrap();
        assert_eq!(automaton.generation(), 0);
        assert_eq!(automaton.grid(), &grid_from(5, 5, &patterns::BLOCK.offset(1, 1)));
        assert_eq!(automaton.previous().population(), 0);
    }

    #[test]
    fn reset_with_invalid_seed_mutates_nothing() {
        let mut automaton = Automaton::with_seed(5, 5, patterns::GLIDER.coords()).unwrap();
        automaton.step();
        let grid_before = automaton.grid().clone();
        let generation_before = automaton.generation();
        assert!(automaton.reset(&[c(1, 1), c(5, 5)]).is_err());
        assert_eq!(automaton.grid(), &grid_before);
        assert_eq!(automaton.generation(), generation_before);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_seed(max_dim: i32) -> impl Strategy<Value = Vec<Coord>> {
        prop::collection::vec((0..max_dim, 0..max_dim), 0..48)
            .prop_map(|cells| cells.into_iter().map(|(x, y)| Coord::new(x, y)).collect())
    }

    proptest! {
        #[test]
        fn step_is_deterministic(seed in arb_seed(8)) {
            let mut a = Automaton::with_seed(8, 8, seed.clone()).unwrap();
            let mut b = Automaton::with_seed(8, 8, seed).unwrap();
            for _ in 0..6 {
                a.step();
                b.step();
                prop_assert_eq!(a.grid(), b.grid());
            }
        }

        #[test]
        fn next_state_matches_the_rule_cell_by_cell(seed in arb_seed(8)) {
            let mut automaton = Automaton::with_seed(8, 8, seed).unwrap();
            let before = automaton.grid().clone();
            automaton.step();
            for y in 0..8 {
                for x in 0..8 {
                    let coord = Coord::new(x, y);
                    let n = before.live_neighbours(coord).unwrap();
                    let expected = match n {
                        2 => before.is_alive(coord),
                        3 => true,
                        _ => false,
                    };
                    prop_assert_eq!(
                        automaton.grid().is_alive(coord),
                        expected,
                        "cell {} with {} live neighbours",
                        coord,
                        n,
                    );
                }
            }
        }

        #[test]
        fn dimensions_survive_stepping(
            w in 1u32..12,
            h in 1u32..12,
            steps in 0usize..8,
        ) {
            let mut automaton = Automaton::with_seed(w, h, Vec::new()).unwrap();
            for _ in 0..steps {
                automaton.step();
            }
            prop_assert_eq!(automaton.grid().width(), w);
            prop_assert_eq!(automaton.grid().height(), h);
        }
    }
}
