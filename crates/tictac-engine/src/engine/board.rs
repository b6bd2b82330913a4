use std::fmt;

use arrayvec::ArrayVec;

use crate::{
    BoardEncoding, Cell, IllegalMoveError, InvalidEncodingError, Move, NUM_CELLS, Player,
};

/// Bit `i` corresponds to the cell with [`Move::index`] `i`.
const LINES: [u16; 8] = [
    0b000_000_111, // row 0
    0b000_111_000, // row 1
    0b111_000_000, // row 2
    0b001_001_001, // column 0
    0b010_010_010, // column 1
    0b100_100_100, // column 2
    0b100_010_001, // main diagonal
    0b001_010_100, // anti-diagonal
];
const FULL_MASK: u16 = (1 << NUM_CELLS) - 1;

/// Legal moves of a position, in ascending index order.
pub type MoveList = ArrayVec<Move, NUM_CELLS>;

/// Game state of a tic-tac-toe board.
///
/// Each side's marks are kept as a 9-bit mask. The side to move and the
/// ply count are derived from the mark counts, so any two boards with the
/// same marks compare equal regardless of move order.
///
/// # Example
///
/// ```
/// use tictac_engine::{Board, Move, Player};
///
/// let mut board = Board::new();
/// board.apply(Move::new(1, 1).unwrap()).unwrap();
///
/// assert_eq!(board.plies(), 1);
/// assert_eq!(board.to_move(), Player::O);
/// assert_eq!(board.legal_moves().len(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    x: u16,
    o: u16,
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self { x: 0, o: 0 }
    }

    /// Number of moves played so far.
    #[must_use]
    pub const fn plies(&self) -> usize {
        (self.x | self.o).count_ones() as usize
    }

    #[must_use]
    pub const fn to_move(&self) -> Player {
        if self.x.count_ones() == self.o.count_ones() {
            Player::X
        } else {
            Player::O
        }
    }

    #[must_use]
    pub fn cell(&self, mv: Move) -> Cell {
        let bit = mv.bit();
        if self.x & bit != 0 {
            Cell::X
        } else if self.o & bit != 0 {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        (self.x | self.o) == FULL_MASK
    }

    /// Returns the player owning a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if has_line(self.x) {
            Some(Player::X)
        } else if has_line(self.o) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Returns `true` if the game is over: someone has won or the board is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Enumerates empty cells in ascending index order.
    ///
    /// Returns an empty list once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.is_terminal() {
            return MoveList::new();
        }
        let occupied = self.x | self.o;
        Move::all().filter(|mv| occupied & mv.bit() == 0).collect()
    }

    /// Places the mark of the side to move on `mv`.
    pub fn apply(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        if self.is_terminal() {
            return Err(IllegalMoveError::GameOver);
        }
        if (self.x | self.o) & mv.bit() != 0 {
            return Err(IllegalMoveError::Occupied { mv });
        }
        match self.to_move() {
            Player::X => self.x |= mv.bit(),
            Player::O => self.o |= mv.bit(),
        }
        Ok(())
    }

    /// Like [`Self::apply`], but returns the resulting board and leaves `self` untouched.
    pub fn applied(&self, mv: Move) -> Result<Self, IllegalMoveError> {
        let mut next = *self;
        next.apply(mv)?;
        Ok(next)
    }

    #[must_use]
    pub fn encode(&self) -> BoardEncoding {
        let mut cells = [Cell::Empty; NUM_CELLS];
        for (mv, cell) in Move::all().zip(&mut cells) {
            *cell = self.cell(mv);
        }
        BoardEncoding::new(cells)
    }

    /// Rebuilds a board from its encoding.
    ///
    /// Rejects encodings that cannot be reached by alternating moves from the
    /// empty board.
    pub fn from_encoding(encoding: &BoardEncoding) -> Result<Self, InvalidEncodingError> {
        let mut board = Self::new();
        for (mv, cell) in Move::all().zip(encoding.cells()) {
            match cell {
                Cell::Empty => {}
                Cell::Occupied(Player::X) => board.x |= mv.bit(),
                Cell::Occupied(Player::O) => board.o |= mv.bit(),
            }
        }

        let x = board.x.count_ones() as usize;
        let o = board.o.count_ones() as usize;
        if x != o && x != o + 1 {
            return Err(InvalidEncodingError::MarkCountImbalance { x, o });
        }
        match (has_line(board.x), has_line(board.o)) {
            (true, true) => return Err(InvalidEncodingError::BothPlayersWin),
            // The winner must have made the last move.
            (true, false) if x == o => {
                return Err(InvalidEncodingError::PlayedPastWin { winner: Player::X });
            }
            (false, true) if x != o => {
                return Err(InvalidEncodingError::PlayedPastWin { winner: Player::O });
            }
            _ => {}
        }
        Ok(board)
    }
}

fn has_line(marks: u16) -> bool {
    LINES.iter().any(|&line| marks & line == line)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &index in indices {
            board.apply(Move::from_index(index).unwrap()).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.plies(), 0);
        assert_eq!(board.to_move(), Player::X);
        assert!(!board.is_terminal());
        assert_eq!(board.legal_moves().len(), NUM_CELLS);
        assert_eq!(board.encode(), BoardEncoding::EMPTY);
    }

    #[test]
    fn test_players_alternate() {
        let board = play(&[4, 0]);
        assert_eq!(board.cell(Move::from_index(4).unwrap()), Cell::X);
        assert_eq!(board.cell(Move::from_index(0).unwrap()), Cell::O);
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.plies(), 2);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut board = play(&[4]);
        let err = board.apply(Move::from_index(4).unwrap()).unwrap_err();
        assert!(err.is_occupied());
        assert_eq!(board.plies(), 1);
    }

    #[test]
    fn test_detects_every_line() {
        for line in LINES {
            let x = Move::all().filter(|mv| line & mv.bit() != 0);
            let o = Move::all().filter(|mv| line & mv.bit() == 0).take(2);
            let mut board = Board::new();
            for (xm, om) in x.zip(o.map(Some).chain([None])) {
                board.apply(xm).unwrap();
                if let Some(om) = om {
                    if !board.is_terminal() {
                        board.apply(om).unwrap();
                    }
                }
            }
            assert_eq!(board.winner(), Some(Player::X), "line {line:09b}");
            assert!(board.is_terminal());
            assert!(board.legal_moves().is_empty());
        }
    }

    #[test]
    fn test_game_over_after_win() {
        // X: 0, 1, 2 / O: 3, 4
        let mut board = play(&[0, 3, 1, 4, 2]);
        assert_eq!(board.winner(), Some(Player::X));
        let err = board.apply(Move::from_index(8).unwrap()).unwrap_err();
        assert!(err.is_game_over());
    }

    #[test]
    fn test_full_board_draw() {
        // X O X
        // X O O
        // O X X
        let board = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_encoding_roundtrip() {
        let board = play(&[4, 0, 8, 2]);
        let encoding = board.encode();
        assert_eq!(encoding.values(), [-1, 0, -1, 0, 1, 0, 0, 0, 1]);
        assert_eq!(Board::from_encoding(&encoding).unwrap(), board);
    }

    #[test]
    fn test_from_encoding_rejects_unreachable() {
        let two_x = BoardEncoding::from_values([1, 1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert!(
            Board::from_encoding(&two_x)
                .unwrap_err()
                .is_mark_count_imbalance()
        );

        let o_first = BoardEncoding::from_values([-1, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert!(Board::from_encoding(&o_first).is_err());

        // X won on the top row, yet O moved afterwards.
        let past_win = BoardEncoding::from_values([1, 1, 1, -1, -1, 0, -1, 0, 0]).unwrap();
        assert!(
            Board::from_encoding(&past_win)
                .unwrap_err()
                .is_played_past_win()
        );
    }

    #[test]
    fn test_display() {
        let board = play(&[0, 4]);
        assert_eq!(board.to_string(), "X . .\n. O .\n. . .");
    }
}
