use serde::{Deserialize, Serialize};

use crate::InvalidCellValueError;

/// One side of the game. `X` always moves first.
///
/// Parses case-insensitively from `x` or `o`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::FromStr,
    derive_more::IsVariant,
)]
pub enum Player {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::X, Self::O];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

/// Occupancy of a single board cell.
///
/// The numeric form used by [`BoardEncoding`](crate::BoardEncoding) is
/// `0` for empty, `1` for X and `-1` for O.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(try_from = "i8", into = "i8")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub const X: Self = Self::Occupied(Player::X);
    pub const O: Self = Self::Occupied(Player::O);

    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Empty => 0,
            Self::Occupied(Player::X) => 1,
            Self::Occupied(Player::O) => -1,
        }
    }

    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Occupied(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Occupied(Player::X) => 'X',
            Self::Occupied(Player::O) => 'O',
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

impl TryFrom<i8> for Cell {
    type Error = InvalidCellValueError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::X),
            -1 => Ok(Self::O),
            _ => Err(InvalidCellValueError { value }),
        }
    }
}
