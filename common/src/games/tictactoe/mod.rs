mod board;
mod bot_controller;
mod display;
mod game_controller;
mod types;
mod win_detector;

pub use board::{Board, MoveError};
pub use bot_controller::{ScoredMove, WIN_SCORE, calculate_best_move, minimax};
pub use display::GameDisplay;
pub use game_controller::GameController;
pub use types::{BOARD_SIZE, GameStatus, Mark, Outcome, Player, Turn, WinningLine};
pub use win_detector::{WIN_COMBINATIONS, check_any_win, check_win};
