use super::board::Board;
use super::types::{Mark, Player, WinningLine};

/// Rows, columns, then diagonals. The index into this table is what
/// `WinningLine::combo_index` reports.
pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = Mark::from(player);

    WIN_COMBINATIONS
        .iter()
        .enumerate()
        .find(|(_, combo)| combo.iter().all(|&position| board.cells()[position] == mark))
        .map(|(index, combo)| WinningLine::new(player, index, *combo))
}

pub fn check_any_win(board: &Board) -> Option<WinningLine> {
    check_win(board, Player::Human).or_else(|| check_win(board, Player::Opponent))
}
