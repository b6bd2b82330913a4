use std::collections::HashMap;

use tictac_engine::{Board, Move, NUM_CELLS};

use crate::{Oracle, Outcome};

/// Exhaustive negamax oracle.
///
/// Every position reachable from the empty board is scored once in
/// [`MinimaxOracle::new`]. A score is relative to the side to move:
/// positive for a forced win, negative for a forced loss, zero for a draw.
/// Its magnitude is `10 - plies` at the deciding position, so faster wins
/// and slower losses are preferred.
///
/// Ties between equally scored moves go to the lowest move index.
#[derive(Debug, Clone)]
pub struct MinimaxOracle {
    scores: HashMap<Board, i8>,
}

impl Default for MinimaxOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxOracle {
    #[must_use]
    pub fn new() -> Self {
        let mut scores = HashMap::new();
        negamax(&Board::new(), &mut scores);
        log::debug!("minimax oracle solved {} positions", scores.len());
        Self { scores }
    }

    /// Number of solved positions.
    #[must_use]
    pub fn num_positions(&self) -> usize {
        self.scores.len()
    }

    /// Perfect-play score of `board` for the side to move.
    #[must_use]
    pub fn score(&self, board: &Board) -> i8 {
        match self.scores.get(board) {
            Some(score) => *score,
            // Positions built from an encoding are always reachable, but
            // solving on demand keeps this total.
            None => negamax(board, &mut HashMap::new()),
        }
    }

    #[must_use]
    pub fn outcome(&self, board: &Board) -> Outcome {
        match self.score(board) {
            s if s > 0 => Outcome::Win,
            0 => Outcome::Draw,
            _ => Outcome::Loss,
        }
    }

    /// Scores every legal move of `board` from the mover's view.
    #[must_use]
    pub fn move_scores(&self, board: &Board) -> Vec<(Move, i8)> {
        board
            .legal_moves()
            .into_iter()
            .filter_map(|mv| {
                let next = board.applied(mv).ok()?;
                Some((mv, -self.score(&next)))
            })
            .collect()
    }
}

impl Oracle for MinimaxOracle {
    fn best_move(&self, board: &Board) -> Option<Move> {
        let mut best: Option<(Move, i8)> = None;
        for (mv, score) in self.move_scores(board) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn negamax(board: &Board, table: &mut HashMap<Board, i8>) -> i8 {
    if let Some(score) = table.get(board) {
        return *score;
    }

    let score = if board.winner().is_some() {
        // The previous mover completed a line.
        -((NUM_CELLS + 1 - board.plies()) as i8)
    } else if board.is_full() {
        0
    } else {
        board
            .legal_moves()
            .into_iter()
            .filter_map(|mv| board.applied(mv).ok())
            .map(|next| -negamax(&next, table))
            .max()
            .unwrap_or(0)
    };

    table.insert(*board, score);
    score
}

#[cfg(test)]
mod tests {
    use tictac_engine::Player;

    use super::*;

    fn play(indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &index in indices {
            board.apply(Move::from_index(index).unwrap()).unwrap();
        }
        board
    }

    fn oracle() -> MinimaxOracle {
        MinimaxOracle::new()
    }

    #[test]
    fn test_solves_all_reachable_positions() {
        // 5478 distinct legal positions are reachable in tic-tac-toe.
        assert_eq!(oracle().num_positions(), 5478);
    }

    #[test]
    fn test_empty_board_is_draw() {
        assert_eq!(oracle().outcome(&Board::new()), Outcome::Draw);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X .
        // O O .
        // . . .
        let board = play(&[0, 3, 1, 4]);
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(oracle().best_move(&board), Move::from_index(2).ok());
    }

    #[test]
    fn test_blocks_opponent_win() {
        // X X .
        // . O .
        // . . .
        let board = play(&[0, 4, 1]);
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(oracle().best_move(&board), Move::from_index(2).ok());
    }

    #[test]
    fn test_prefers_faster_win() {
        // X O .
        // X . .
        // . O .   X wins at once on 6 and by force on 4.
        let oracle = oracle();
        let board = play(&[0, 1, 3, 7]);
        assert_eq!(board.to_move(), Player::X);

        let scores = oracle.move_scores(&board);
        let score_of = |index| {
            scores
                .iter()
                .find(|(mv, _)| mv.index() == index)
                .map(|(_, score)| *score)
        };
        assert_eq!(score_of(4), Some(3));
        assert_eq!(score_of(6), Some(5));

        assert_eq!(oracle.best_move(&board), Move::from_index(6).ok());
        assert_eq!(oracle.outcome(&board), Outcome::Win);
    }

    #[test]
    fn test_no_move_on_terminal_board() {
        let board = play(&[0, 3, 1, 4, 2]);
        assert!(board.is_terminal());
        assert_eq!(oracle().best_move(&board), None);
    }

    #[test]
    fn test_best_move_is_legal_and_keeps_outcome() {
        let oracle = oracle();
        let boards = [play(&[]), play(&[4]), play(&[0, 8]), play(&[4, 0, 8])];
        for board in boards {
            let mv = oracle.best_move(&board).unwrap();
            assert!(board.legal_moves().contains(&mv));
            let next = board.applied(mv).unwrap();
            let expected = match oracle.outcome(&next) {
                Outcome::Win => Outcome::Loss,
                Outcome::Draw => Outcome::Draw,
                Outcome::Loss => Outcome::Win,
            };
            assert_eq!(oracle.outcome(&board), expected);
        }
    }
}
