//! Tic-tac-toe rules and board representation.
//!
//! - [`core`] - Plain data shared by every consumer: [`Player`], [`Cell`],
//!   [`Move`] and the numeric [`BoardEncoding`].
//! - [`engine`] - The rule engine: [`Board`] tracks marks, enumerates legal
//!   moves, applies them and detects terminal positions.
//!
//! Cells are linearized as `index = column + 3 * row`. [`Move::new`] and
//! [`Move::from_index`] are the only conversions between the two forms.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid cell value {value}: expected -1, 0 or 1")]
pub struct InvalidCellValueError {
    value: i8,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid move index {index}: expected 0..=8")]
pub struct InvalidMoveIndexError {
    index: usize,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid cell coordinate ({column}, {row}): expected values in 0..=2")]
pub struct InvalidCoordinateError {
    column: u8,
    row: u8,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum IllegalMoveError {
    #[display("cell {mv} is already occupied")]
    Occupied { mv: Move },
    #[display("game is already over")]
    GameOver,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum InvalidEncodingError {
    #[display("mark counts cannot arise in play: {x} X and {o} O")]
    MarkCountImbalance { x: usize, o: usize },
    #[display("both players own a complete line")]
    BothPlayersWin,
    #[display("{winner} owns a line but the opponent moved afterwards")]
    PlayedPastWin { winner: Player },
}
