use std::fmt;

use crate::{InvalidCoordinateError, InvalidMoveIndexError};

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 3;
/// Number of cells on the board, and length of every per-cell vector.
pub const NUM_CELLS: usize = 9;

/// A cell on the board, addressed by `(column, row)`.
///
/// Internally stored as the linear index `column + 3 * row`. This type owns
/// the only conversion between the two forms; encodings, labels and score
/// vectors all index cells through [`Move::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    index: u8,
}

impl Move {
    /// Creates a move from its coordinates.
    pub fn new(column: u8, row: u8) -> Result<Self, InvalidCoordinateError> {
        if column >= BOARD_SIZE || row >= BOARD_SIZE {
            return Err(InvalidCoordinateError { column, row });
        }
        Ok(Self {
            index: column + BOARD_SIZE * row,
        })
    }

    /// Creates a move from its linear index.
    pub fn from_index(index: usize) -> Result<Self, InvalidMoveIndexError> {
        if index >= NUM_CELLS {
            return Err(InvalidMoveIndexError { index });
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Ok(Self { index })
    }

    /// Iterates over every cell in ascending index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|index| Self { index })
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    #[must_use]
    pub const fn column(self) -> u8 {
        self.index % BOARD_SIZE
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / BOARD_SIZE
    }

    #[must_use]
    pub const fn bit(self) -> u16 {
        1 << self.index
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column(), self.row())
    }
}
