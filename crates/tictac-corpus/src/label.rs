//! One-hot move labels.

use serde::{Deserialize, Serialize};
use tictac_engine::{Board, Move, NUM_CELLS};
use tictac_oracle::Oracle;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("label is not one-hot: {values:?}")]
pub struct InvalidLabelError {
    values: [u8; NUM_CELLS],
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum LabelError {
    #[display("cannot label a terminal position")]
    TerminalState,
}

/// A 9-slot vector with a single `1` at the labeled move's index.
///
/// The one-hot property is checked on construction and on deserialization,
/// so every `Label` in memory names exactly one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; NUM_CELLS]", into = "[u8; NUM_CELLS]")]
pub struct Label {
    mv: Move,
}

impl Label {
    #[must_use]
    pub const fn one_hot(mv: Move) -> Self {
        Self { mv }
    }

    /// The move marked by this label.
    #[must_use]
    pub const fn best_move(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub fn values(&self) -> [u8; NUM_CELLS] {
        let mut values = [0; NUM_CELLS];
        values[self.mv.index()] = 1;
        values
    }
}

impl From<Label> for [u8; NUM_CELLS] {
    fn from(label: Label) -> Self {
        label.values()
    }
}

impl TryFrom<[u8; NUM_CELLS]> for Label {
    type Error = InvalidLabelError;

    fn try_from(values: [u8; NUM_CELLS]) -> Result<Self, Self::Error> {
        let mut hot = None;
        for (index, value) in values.iter().enumerate() {
            match (value, hot) {
                (0, _) => {}
                (1, None) => hot = Some(index),
                _ => return Err(InvalidLabelError { values }),
            }
        }
        hot.and_then(|index| Move::from_index(index).ok())
            .map(Self::one_hot)
            .ok_or(InvalidLabelError { values })
    }
}

/// Labels positions with the move chosen by an [`Oracle`].
#[derive(Debug, Clone)]
pub struct Labeler<O> {
    oracle: O,
}

impl<O> Labeler<O>
where
    O: Oracle,
{
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Asks the oracle for the best move on `board` and encodes it one-hot.
    ///
    /// `board` must not be terminal.
    pub fn label(&self, board: &Board) -> Result<Label, LabelError> {
        if board.is_terminal() {
            return Err(LabelError::TerminalState);
        }
        let mv = self
            .oracle
            .best_move(board)
            .ok_or(LabelError::TerminalState)?;
        Ok(Label::one_hot(mv))
    }
}
