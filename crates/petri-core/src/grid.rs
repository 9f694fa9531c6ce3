//! Bounded row-major grid with an 8-connected (Moore) neighbourhood.

use smallvec::SmallVec;

use crate::cell::Cell;
use crate::coord::Coord;
use crate::error::GridError;

/// All 8 Moore offsets as `(dx, dy)` pairs.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of cells with fixed dimensions.
///
/// Cells are stored row-major: index `y * width + x`. The grid is
/// bounded — positions outside it are not neighbours of anything and
/// count as dead when a neighbourhood is evaluated. There is no
/// wraparound.
///
/// Equality is structural over `(width, height, cells)`; two grids of
/// differing dimensions are never equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum size of either dimension: coordinates are `i32`-based,
    /// so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-dead grid.
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is zero, or
    /// [`GridError::DimensionTooLarge`] if either exceeds
    /// [`Grid::MAX_DIM`].
    pub fn dead(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                axis: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                axis: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; (width as usize) * (height as usize)],
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` lies inside `[0, width) × [0, height)`.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.x < self.width as i32
            && coord.y >= 0
            && coord.y < self.height as i32
    }

    /// Resolve `coord` to a row-major index, or the out-of-bounds error.
    fn checked_index(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        Ok((coord.y as usize) * (self.width as usize) + (coord.x as usize))
    }

    /// The cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<Cell, GridError> {
        Ok(self.cells[self.checked_index(coord)?])
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(coord)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Whether the cell at `coord` is alive.
    ///
    /// Out-of-bounds positions are dead. This is the boundary rule used
    /// by neighbourhood evaluation, exposed directly for callers that
    /// probe positions adjacent to the rim.
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.checked_index(coord)
            .map(|idx| self.cells[idx].is_alive())
            .unwrap_or(false)
    }

    /// The in-bounds Moore neighbours of `coord`.
    ///
    /// Interior cells have 8, edge cells 5, corner cells 3.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        let mut out = SmallVec::new();
        for (dx, dy) in MOORE_OFFSETS {
            let nb = coord.offset(dx, dy);
            if self.contains(nb) {
                out.push(nb);
            }
        }
        out
    }

    /// Count the alive cells among the 8 Moore neighbours of `coord`.
    ///
    /// Neighbour positions outside the grid count as dead. The queried
    /// coordinate itself is bounds-checked, so a direct query with an
    /// out-of-grid coordinate fails with [`GridError::OutOfBounds`].
    pub fn live_neighbours(&self, coord: Coord) -> Result<u8, GridError> {
        self.checked_index(coord)?;
        let mut count = 0u8;
        for (dx, dy) in MOORE_OFFSETS {
            if self.is_alive(coord.offset(dx, dy)) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Number of alive cells in the whole grid.
    pub fn population(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_alive()).count() as u32
    }

    /// Kill every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Iterate the rows as slices, top to bottom.
    ///
    /// This is the stable snapshot form renderers consume: a row-major
    /// matrix of cell states with no engine internals attached.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// The full cell buffer in row-major order.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the full cell buffer in row-major order.
    ///
    /// The buffer length is fixed; only cell states can change.
    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
