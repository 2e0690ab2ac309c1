use colored::{ColoredString, Colorize};
use common::games::tictactoe::Player;

/// Background used for the highlighted cells once a game is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    HumanWin,
    OpponentWin,
    Tie,
}

impl Highlight {
    pub fn for_winner(winner: Player) -> Self {
        match winner {
            Player::Human => Highlight::HumanWin,
            Player::Opponent => Highlight::OpponentWin,
        }
    }

    fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Highlight::HumanWin => (0x00, 0x77, 0xb6),
            Highlight::OpponentWin => (0xf9, 0x41, 0x44),
            Highlight::Tie => (0x76, 0xc8, 0x93),
        }
    }
}

pub fn paint_mark(text: &str, player: Player) -> ColoredString {
    match player {
        Player::Human => text.bright_blue().bold(),
        Player::Opponent => text.bright_red().bold(),
    }
}

pub fn paint_hint(text: &str) -> ColoredString {
    text.dimmed()
}

pub fn paint_highlight(cell: ColoredString, highlight: Highlight) -> ColoredString {
    let (r, g, b) = highlight.rgb();
    cell.on_truecolor(r, g, b)
}

pub fn paint_banner(text: &str, highlight: Highlight) -> ColoredString {
    let (r, g, b) = highlight.rgb();
    text.truecolor(r, g, b).bold()
}
