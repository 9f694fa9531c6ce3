//! Grid coordinates.

use std::fmt;

/// A cell position: `x` is the column, `y` is the row, both zero-based.
///
/// Components are signed so that out-of-range input — including negative
/// values — can be represented and rejected with a
/// [`GridError::OutOfBounds`](crate::GridError::OutOfBounds) naming the
/// offending coordinate, rather than being unconstructible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate translated by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
