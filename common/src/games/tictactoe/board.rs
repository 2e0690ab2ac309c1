use std::fmt;

use super::types::{BOARD_SIZE, Mark, Outcome, Player, WinningLine};
use super::win_detector::{check_any_win, check_win};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds(usize),
    Occupied(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(position) => {
                write!(f, "Position {} is outside the board", position)
            }
            MoveError::Occupied(position) => write!(f, "Position {} is already marked", position),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    pub fn is_valid_move(&self, position: usize) -> bool {
        self.cell(position) == Some(Mark::Empty)
    }

    /// Empty positions in ascending order. The search enumerates candidates
    /// in this order, so it decides which of several equal moves is chosen.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn apply_move(&mut self, position: usize, player: Player) -> Result<(), MoveError> {
        match self.cell(position) {
            None => Err(MoveError::OutOfBounds(position)),
            Some(Mark::Empty) => {
                self.cells[position] = Mark::from(player);
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied(position)),
        }
    }

    pub(crate) fn set(&mut self, position: usize, mark: Mark) {
        self.cells[position] = mark;
    }

    pub fn check_win(&self, player: Player) -> Option<WinningLine> {
        check_win(self, player)
    }

    pub fn is_tie(&self) -> bool {
        self.is_full() && check_any_win(self).is_none()
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(line) = check_any_win(self) {
            return Outcome::Win(line);
        }

        if self.is_full() {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const H: Mark = Mark::Human;
    const O: Mark = Mark::Opponent;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_empty_positions_are_ascending() {
        let board = Board::from_cells([H, E, O, E, H, E, O, E, E]);
        assert_eq!(board.empty_positions(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_apply_move_marks_cell() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(4, Player::Human), Ok(()));
        assert_eq!(board.cell(4), Some(Mark::Human));
        assert!(!board.is_valid_move(4));
        assert!(board.is_valid_move(0));
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut board = Board::new();
        board.apply_move(4, Player::Human).unwrap();
        let before = board;
        assert_eq!(
            board.apply_move(4, Player::Opponent),
            Err(MoveError::Occupied(4))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_move(9, Player::Human),
            Err(MoveError::OutOfBounds(9))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = Board::from_cells([H, O, H, H, O, O, O, H, H]);
        assert!(board.is_full());
        assert!(board.is_tie());
        assert_eq!(board.outcome(), Outcome::Tie);
    }

    #[test]
    fn test_full_board_with_line_is_not_tie() {
        let board = Board::from_cells([H, H, H, O, O, H, O, H, O]);
        assert!(board.is_full());
        assert!(!board.is_tie());
        let outcome = board.outcome();
        assert_eq!(outcome.winner(), Some(Player::Human));
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_outcome_reports_opponent_line() {
        let board = Board::from_cells([H, E, O, H, O, E, O, E, E]);
        match board.outcome() {
            Outcome::Win(line) => {
                assert_eq!(line.player, Player::Opponent);
                assert_eq!(line.combo_index, 7);
                assert_eq!(line.positions, [2, 4, 6]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_move_error_messages() {
        assert_eq!(
            MoveError::Occupied(3).to_string(),
            "Position 3 is already marked"
        );
        assert_eq!(
            MoveError::OutOfBounds(12).to_string(),
            "Position 12 is outside the board"
        );
    }
}
