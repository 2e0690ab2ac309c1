use crate::log;
use super::board::Board;
use super::bot_controller::calculate_best_move;
use super::display::GameDisplay;
use super::types::{GameStatus, Outcome, Player, Turn};

/// Owns the board for one human-versus-opponent match and drives turn order.
/// The human always opens; the opponent answers every accepted human move
/// exactly once unless that move ended the game.
#[derive(Debug, Clone)]
pub struct GameController<D: GameDisplay> {
    board: Board,
    status: GameStatus,
    turn: Turn,
    display: D,
}

impl<D: GameDisplay> GameController<D> {
    pub fn new(display: D) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::NotStarted,
            turn: Turn::AwaitingHumanInput,
            display,
        }
    }

    #[cfg(test)]
    pub(crate) fn resume(display: D, board: Board) -> Self {
        Self {
            board,
            status: GameStatus::InProgress,
            turn: Turn::AwaitingHumanInput,
            display,
        }
    }

    pub fn start_game(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        self.turn = Turn::AwaitingHumanInput;
        self.display.on_game_reset();
        log!("New game started");
    }

    /// Handles one human selection. Returns `false` and changes nothing when
    /// no game is running or the position cannot be marked.
    pub fn on_human_select(&mut self, position: usize) -> bool {
        if self.status != GameStatus::InProgress {
            log!("Ignoring selection {}: game is {:?}", position, self.status);
            return false;
        }

        if let Err(e) = self.board.apply_move(position, Player::Human) {
            log!("Ignoring selection: {}", e);
            return false;
        }

        log!("Human placed a mark at {}", position);
        self.display.on_mark_placed(position, Player::Human);

        if self.finish_if_terminal(Player::Human) {
            return true;
        }

        self.turn = Turn::AwaitingOpponentMove;
        self.play_opponent_turn();
        true
    }

    fn play_opponent_turn(&mut self) {
        let Some(position) = calculate_best_move(&mut self.board, Player::Opponent) else {
            log!("Opponent has no move on board {:?}", self.board.cells());
            self.finish(self.board.outcome());
            return;
        };

        if let Err(e) = self.board.apply_move(position, Player::Opponent) {
            log!("Opponent move rejected: {}", e);
            return;
        }

        log!("Opponent placed a mark at {}", position);
        self.display.on_mark_placed(position, Player::Opponent);

        if !self.finish_if_terminal(Player::Opponent) {
            self.turn = Turn::AwaitingHumanInput;
        }
    }

    fn finish_if_terminal(&mut self, mover: Player) -> bool {
        if let Some(line) = self.board.check_win(mover) {
            self.finish(Outcome::Win(line));
            return true;
        }

        if self.board.is_full() {
            self.finish(Outcome::Tie);
            return true;
        }

        false
    }

    fn finish(&mut self, outcome: Outcome) {
        self.status = GameStatus::Finished(outcome);

        match outcome {
            Outcome::Win(line) => {
                log!(
                    "{} won on combination {} {:?}",
                    line.player, line.combo_index, line.positions
                );
                self.display.on_game_won(line.positions, line.player);
            }
            Outcome::Tie => {
                log!("Game tied");
                self.display.on_game_tied();
            }
            Outcome::InProgress => {}
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whose input the game is waiting for, or `None` outside a running game.
    pub fn turn(&self) -> Option<Turn> {
        match self.status {
            GameStatus::InProgress => Some(self.turn),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }
}
