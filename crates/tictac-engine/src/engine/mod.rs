//! Rule engine for tic-tac-toe.
//!
//! [`Board`] is the only mutable game state. It exposes the operations the
//! corpus pipeline drives:
//!
//! 1. [`Board::legal_moves`] - enumerate empty cells
//! 2. [`Board::apply`] - place the mover's mark
//! 3. [`Board::is_terminal`] - detect a win or a full board
//! 4. [`Board::encode`] - produce the numeric [`BoardEncoding`](crate::BoardEncoding)

pub use self::board::*;

mod board;
