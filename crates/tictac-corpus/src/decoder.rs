//! Inference-time decoding of model scores into a legal move.
//!
//! A [`Predictor`] maps a [`BoardEncoding`] to one score per cell, in the
//! same [`Move::index`] order used by the corpus. Models are free to score
//! occupied cells highly; [`decode`] only considers empty cells.
//!
//! # Selection Rule
//!
//! - Candidates are the empty cells in ascending index order.
//! - The first empty cell seeds the comparison.
//! - A later candidate replaces the current best only if its score is
//!   strictly greater, so the lowest index wins ties.
//! - `NaN` scores never replace a number; a `NaN` seed is replaced by the
//!   first number that follows.
//!
//! A board without empty cells has no legal move and is reported as
//! [`DecodeError::NoEmptyCell`].
//!
//! # Example
//!
//! ```
//! use tictac_corpus::decoder::{Scores, decode};
//! use tictac_engine::{BoardEncoding, Move};
//!
//! let board = BoardEncoding::from_values([0, 0, 0, 0, 1, 0, 0, 0, 0])?;
//! let scores = Scores::new([0.1, 0.1, 0.1, 0.1, 0.99, 0.1, 0.1, 0.1, 0.1]);
//!
//! // The center is occupied, so the first best empty cell wins.
//! assert_eq!(decode(&scores, &board)?, Move::new(0, 0)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};
use tictac_engine::{Board, BoardEncoding, Move, NUM_CELLS};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum DecodeError {
    #[display("board has no empty cell")]
    NoEmptyCell,
    #[display("game is already over")]
    GameOver,
}

/// Raw per-cell scores produced by a model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores([f32; NUM_CELLS]);

impl Scores {
    #[must_use]
    pub const fn new(scores: [f32; NUM_CELLS]) -> Self {
        Self(scores)
    }

    #[must_use]
    pub fn get(&self, mv: Move) -> f32 {
        self.0[mv.index()]
    }
}

impl From<[f32; NUM_CELLS]> for Scores {
    fn from(scores: [f32; NUM_CELLS]) -> Self {
        Self(scores)
    }
}

/// A model mapping a board encoding to per-cell scores.
pub trait Predictor {
    fn predict(&self, board: &BoardEncoding) -> Scores;
}

impl<F> Predictor for F
where
    F: Fn(&BoardEncoding) -> Scores,
{
    fn predict(&self, board: &BoardEncoding) -> Scores {
        self(board)
    }
}

/// Selects the best-scoring empty cell of `board`.
pub fn decode(scores: &Scores, board: &BoardEncoding) -> Result<Move, DecodeError> {
    let mut candidates = board.empty_cells();
    let first = candidates.next().ok_or(DecodeError::NoEmptyCell)?;
    let (best, _) = candidates.fold((first, scores.get(first)), |(best, best_score), mv| {
        let score = scores.get(mv);
        if score > best_score || (best_score.is_nan() && !score.is_nan()) {
            (mv, score)
        } else {
            (best, best_score)
        }
    });
    Ok(best)
}

/// Runs `predictor` on `board` and decodes its scores into a legal move.
pub fn predict_move<P>(predictor: &P, board: &Board) -> Result<Move, DecodeError>
where
    P: Predictor + ?Sized,
{
    if board.is_terminal() {
        return Err(DecodeError::GameOver);
    }
    let encoding = board.encode();
    let scores = predictor.predict(&encoding);
    decode(&scores, &encoding)
}
