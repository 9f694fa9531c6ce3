//! Binary cell state.

/// The state of a single grid position.
///
/// Cells carry no identity beyond their position; two `Alive` cells are
/// interchangeable. `Dead` is the default so freshly allocated grids
/// start empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The cell is unoccupied.
    #[default]
    Dead,
    /// The cell is occupied.
    Alive,
}

impl Cell {
    /// Returns `true` for [`Cell::Alive`].
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// `true` maps to [`Cell::Alive`], `false` to [`Cell::Dead`].
    pub fn from_bool(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::from_bool(alive)
    }
}
