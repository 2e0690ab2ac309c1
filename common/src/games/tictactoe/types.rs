use std::fmt;

pub const BOARD_SIZE: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    pub fn other(&self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Opponent => write!(f, "Opponent"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Opponent,
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Mark::Human,
            Player::Opponent => Mark::Opponent,
        }
    }
}

/// A fully marked win combination: who owns it, its index in the
/// combination table and the three board positions it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub combo_index: usize,
    pub positions: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, combo_index: usize, positions: [usize; 3]) -> Self {
        Self {
            player,
            combo_index,
            positions,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(WinningLine),
    Tie,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(line) => Some(line.player),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    AwaitingHumanInput,
    AwaitingOpponentMove,
}
