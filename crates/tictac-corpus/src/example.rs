use serde::{Deserialize, Serialize};
use tictac_engine::BoardEncoding;

use crate::label::Label;

/// A `(board encoding, label)` pair: one record of the corpus.
///
/// Serializes as a two-element array, `[[b0, ..., b8], [l0, ..., l8]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingExample(pub BoardEncoding, pub Label);

impl TrainingExample {
    #[must_use]
    pub const fn new(board: BoardEncoding, label: Label) -> Self {
        Self(board, label)
    }

    #[must_use]
    pub const fn board(&self) -> &BoardEncoding {
        &self.0
    }

    #[must_use]
    pub const fn label(&self) -> &Label {
        &self.1
    }
}

#[cfg(test)]
mod tests {
    use tictac_engine::Move;

    use super::*;

    #[test]
    fn test_record_text() {
        let board = BoardEncoding::from_values([1, 0, 0, 0, -1, 0, 0, 0, 0]).unwrap();
        let label = Label::one_hot(Move::new(2, 0).unwrap());
        let example = TrainingExample::new(board, label);

        let json = serde_json::to_string(&example).unwrap();
        assert_eq!(json, "[[1,0,0,0,-1,0,0,0,0],[0,0,1,0,0,0,0,0,0]]");
        assert_eq!(
            serde_json::from_str::<TrainingExample>(&json).unwrap(),
            example
        );
    }

    #[test]
    fn test_rejects_extra_elements() {
        let json = "[[0,0,0,0,0,0,0,0,0],[1,0,0,0,0,0,0,0,0],[]]";
        assert!(serde_json::from_str::<TrainingExample>(json).is_err());
    }
}
