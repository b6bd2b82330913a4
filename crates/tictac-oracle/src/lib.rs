//! Move-selection oracles for labeling sampled positions.
//!
//! An [`Oracle`] answers one question: which move should the side to move
//! play in a non-terminal position? The corpus pipeline treats the answer as
//! ground truth and does not care how it was computed.
//!
//! [`MinimaxOracle`] solves the whole game tree once at construction and then
//! answers every query with a table lookup per candidate move.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Board, Move};
//! use tictac_oracle::{MinimaxOracle, Oracle, Outcome};
//!
//! let oracle = MinimaxOracle::new();
//! let board = Board::new();
//!
//! assert_eq!(oracle.outcome(&board), Outcome::Draw);
//! assert!(oracle.best_move(&board).is_some());
//! ```

use std::fmt;

use tictac_engine::{Board, Move};

pub use self::minimax::*;

mod minimax;

/// Selects an optimal move for the side to move.
pub trait Oracle: fmt::Debug + Send + Sync {
    /// Returns an optimal move, or `None` if `board` is terminal.
    ///
    /// When several moves are equally good the implementation decides which
    /// one is returned; callers must not rely on a particular choice.
    fn best_move(&self, board: &Board) -> Option<Move>;
}

impl<T> Oracle for &T
where
    T: Oracle + ?Sized,
{
    fn best_move(&self, board: &Board) -> Option<Move> {
        (**self).best_move(board)
    }
}

/// Result of a position under perfect play, from the side to move's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Outcome {
    #[display("win")]
    Win,
    #[display("draw")]
    Draw,
    #[display("loss")]
    Loss,
}
