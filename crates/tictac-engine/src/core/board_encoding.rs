use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BOARD_SIZE, Cell, InvalidCellValueError, Move, NUM_CELLS};

/// Numeric view of a board: one value per cell in [`Move::index`] order.
///
/// Serializes as a flat array of nine integers (`0` empty, `1` X, `-1` O),
/// which is the state half of every corpus record and the input of a
/// predictor model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardEncoding([Cell; NUM_CELLS]);

impl BoardEncoding {
    pub const EMPTY: Self = Self([Cell::Empty; NUM_CELLS]);

    #[must_use]
    pub const fn new(cells: [Cell; NUM_CELLS]) -> Self {
        Self(cells)
    }

    pub fn from_values(values: [i8; NUM_CELLS]) -> Result<Self, InvalidCellValueError> {
        let mut cells = [Cell::Empty; NUM_CELLS];
        for (cell, value) in cells.iter_mut().zip(values) {
            *cell = Cell::try_from(value)?;
        }
        Ok(Self(cells))
    }

    #[must_use]
    pub fn values(&self) -> [i8; NUM_CELLS] {
        self.0.map(Cell::value)
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.0
    }

    #[must_use]
    pub fn cell(&self, mv: Move) -> Cell {
        self.0[mv.index()]
    }

    #[must_use]
    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.cell(mv).is_empty()
    }

    /// Iterates over the empty cells in ascending index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(|mv| self.is_empty_at(*mv))
    }
}

/// Renders the grid one row per line, e.g. `X . .`.
impl fmt::Display for BoardEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.chunks(usize::from(BOARD_SIZE)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl From<[Cell; NUM_CELLS]> for BoardEncoding {
    fn from(cells: [Cell; NUM_CELLS]) -> Self {
        Self(cells)
    }
}

impl TryFrom<[i8; NUM_CELLS]> for BoardEncoding {
    type Error = InvalidCellValueError;

    fn try_from(values: [i8; NUM_CELLS]) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}
