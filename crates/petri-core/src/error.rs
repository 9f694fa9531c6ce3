//! Error types for grid construction and coordinate access.

use std::error::Error;
use std::fmt;

use crate::coord::Coord;

/// Errors from grid construction and bounds-checked cell access.
///
/// These are always caller errors (invalid configuration), never
/// transient conditions; there is nothing to retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate fell outside `[0, width) × [0, height)`.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width at the time of the access.
        width: u32,
        /// Grid height at the time of the access.
        height: u32,
    },
    /// A grid was requested with zero width or zero height.
    EmptyGrid,
    /// A grid dimension exceeds what `i32` coordinates can address.
    DimensionTooLarge {
        /// Which axis overflowed: `"width"` or `"height"`.
        axis: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum supported size.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "coordinate {coord} outside [0, {width}) x [0, {height})")
            }
            Self::EmptyGrid => write!(f, "grid dimensions must both be non-zero"),
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "grid {axis} {value} exceeds the maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}
