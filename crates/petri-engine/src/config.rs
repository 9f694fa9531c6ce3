//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for constructing an
//! [`Automaton`](crate::Automaton). [`validate()`](SimConfig::validate)
//! checks structural invariants up front so construction is
//! all-or-nothing: no partially-seeded engine is ever observable.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use petri_core::{Coord, Grid, GridError};

/// Default delay between generations in the driver loop.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Input for constructing an [`Automaton`](crate::Automaton).
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Grid width in cells. Must be non-zero.
    pub width: u32,
    /// Grid height in cells. Must be non-zero.
    pub height: u32,
    /// Cells marked alive at generation 0. Order is irrelevant and
    /// duplicates are idempotent; every entry must be in bounds.
    pub seed: Vec<Coord>,
    /// Delay between generations in the driver loop. Only the driver
    /// reads this; a zero interval means the loop runs unpaced.
    pub tick_interval: Duration,
}

impl SimConfig {
    /// A configuration with the given dimensions and seed, at the
    /// default 200 ms tick interval.
    pub fn new(width: u32, height: u32, seed: Vec<Coord>) -> Self {
        Self {
            width,
            height,
            seed,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Check structural invariants without allocating a grid.
    ///
    /// Fails on the first seed coordinate outside
    /// `[0, width) × [0, height)`, identifying it in the error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Grid(GridError::EmptyGrid));
        }
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value > Grid::MAX_DIM {
                return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                    axis,
                    value,
                    max: Grid::MAX_DIM,
                }));
            }
        }
        for &coord in &self.seed {
            let inside = coord.x >= 0
                && coord.x < self.width as i32
                && coord.y >= 0
                && coord.y < self.height as i32;
            if !inside {
                return Err(ConfigError::Grid(GridError::OutOfBounds {
                    coord,
                    width: self.width,
                    height: self.height,
                }));
            }
        }
        Ok(())
    }
}

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid construction or seeding is invalid.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
