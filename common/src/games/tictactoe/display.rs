use super::types::Player;

/// Receives every visible change the controller makes to a game.
pub trait GameDisplay {
    /// Clear all marks and accept input again.
    fn on_game_reset(&mut self);

    fn on_mark_placed(&mut self, position: usize, player: Player);

    /// Highlight the line, stop accepting input and announce the winner.
    fn on_game_won(&mut self, winning_positions: [usize; 3], winner: Player);

    fn on_game_tied(&mut self);
}

impl GameDisplay for () {
    fn on_game_reset(&mut self) {}

    fn on_mark_placed(&mut self, _position: usize, _player: Player) {}

    fn on_game_won(&mut self, _winning_positions: [usize; 3], _winner: Player) {}

    fn on_game_tied(&mut self) {}
}
