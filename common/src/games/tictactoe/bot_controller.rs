use crate::log;
use super::board::Board;
use super::types::{Mark, Player};

/// Terminal score magnitude. Scores are always from the opponent's side:
/// an opponent line is `+WIN_SCORE`, a human line is `-WIN_SCORE`, a full
/// board without a line is zero. Depth does not discount the score.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub score: i32,
    pub index: Option<usize>,
}

impl ScoredMove {
    fn terminal(score: i32) -> Self {
        Self { score, index: None }
    }
}

/// Picks the move for `mover` by exhaustive minimax. Returns `None` when the
/// board is already decided or has no empty cell. The board is used as the
/// search buffer and holds its original contents again when this returns.
pub fn calculate_best_move(board: &mut Board, mover: Player) -> Option<usize> {
    if board.is_full() {
        return None;
    }

    let best = minimax(board, mover);

    if let Some(position) = best.index {
        log!(
            "Search for {} picked position {} (score {})",
            mover, position, best.score
        );
    }

    best.index
}

pub fn minimax(board: &mut Board, player_to_move: Player) -> ScoredMove {
    let previous_mover = player_to_move.other();
    if board.check_win(previous_mover).is_some() {
        return ScoredMove::terminal(terminal_score(previous_mover));
    }
    if board.check_win(player_to_move).is_some() {
        return ScoredMove::terminal(terminal_score(player_to_move));
    }

    let available_moves = board.empty_positions();
    if available_moves.is_empty() {
        return ScoredMove::terminal(0);
    }

    let maximizing = player_to_move == Player::Opponent;
    let mut best: Option<ScoredMove> = None;

    for position in available_moves {
        board.set(position, Mark::from(player_to_move));
        let score = minimax(board, previous_mover).score;
        board.set(position, Mark::Empty);

        // Strict comparison keeps the first candidate among equal scores.
        let improves = match best {
            None => true,
            Some(current) if maximizing => score > current.score,
            Some(current) => score < current.score,
        };

        if improves {
            best = Some(ScoredMove {
                score,
                index: Some(position),
            });
        }
    }

    best.unwrap_or(ScoredMove::terminal(0))
}

fn terminal_score(winner: Player) -> i32 {
    match winner {
        Player::Opponent => WIN_SCORE,
        Player::Human => -WIN_SCORE,
    }
}
