//! The driver: a fixed-cadence render/step loop with settle detection.
//!
//! The driver owns the [`Automaton`] exclusively and runs the loop the
//! engine itself deliberately lacks: present the grid, wait out the
//! tick interval, step, present again, and stop once a step produces a
//! grid equal to its predecessor.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use petri_core::Grid;

use crate::automaton::Automaton;

/// Where the driver sends each grid snapshot.
///
/// Implementations receive the complete row-major grid; nothing about
/// the engine's internals leaks through this seam.
pub trait RenderSink {
    /// Present one generation. `generation` is 0 for the seeded grid.
    fn present(&mut self, grid: &Grid, generation: u64) -> io::Result<()>;
}

/// A sink that discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _grid: &Grid, _generation: u64) -> io::Result<()> {
        Ok(())
    }
}

/// Outcome of a completed [`Driver::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations stepped before the population settled.
    pub generations: u64,
    /// Alive cells in the final generation.
    pub final_population: u32,
    /// Wall time of the whole run, including tick-interval waits.
    pub elapsed: Duration,
}

/// Drives an [`Automaton`] at a fixed cadence until it settles.
#[derive(Debug)]
pub struct Driver<S> {
    automaton: Automaton,
    sink: S,
    interval: Duration,
}

impl<S: RenderSink> Driver<S> {
    /// Pair an automaton with a sink at the given tick interval.
    ///
    /// A zero interval is valid: the loop then runs unpaced, which is
    /// how tests and benches drive the simulation flat out.
    pub fn new(automaton: Automaton, sink: S, interval: Duration) -> Self {
        Self {
            automaton,
            sink,
            interval,
        }
    }

    /// The driven automaton.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Dismantle the driver, returning the automaton and the sink.
    pub fn into_parts(self) -> (Automaton, S) {
        (self.automaton, self.sink)
    }

    /// Run until two consecutive generations compare equal.
    ///
    /// Presents the seeded grid first, then repeats wait-step-present.
    /// Waits use absolute deadlines (`next = previous + interval`) so
    /// render and step cost do not stretch the period. Errors from the
    /// sink abort the run.
    pub fn run(&mut self) -> io::Result<RunSummary> {
        let started = Instant::now();
        self.sink
            .present(self.automaton.grid(), self.automaton.generation())?;

        let mut deadline = started + self.interval;
        loop {
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
            deadline += self.interval;

            self.automaton.step();
            self.sink
                .present(self.automaton.grid(), self.automaton.generation())?;

            let stats = self.automaton.last_stats();
            debug!(
                generation = stats.generation,
                population = stats.population,
                step_us = stats.step_us,
                "generation advanced"
            );

            if self.automaton.is_settled() {
                info!(
                    generation = stats.generation,
                    population = stats.population,
                    "population settled"
                );
                break;
            }
        }

        Ok(RunSummary {
            generations: self.automaton.generation(),
            final_population: self.automaton.grid().population(),
            elapsed: started.elapsed(),
        })
    }
}
