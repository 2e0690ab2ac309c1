use std::io::{self, Write};

use colored::ColoredString;
use common::games::tictactoe::{BOARD_SIZE, GameDisplay, Player};
use common::log;

use crate::colors::{Highlight, paint_banner, paint_highlight, paint_hint, paint_mark};
use crate::config::{BannerConfig, DisplayConfig};

const ROW_SEPARATOR: &str = "---+---+---";

/// Text rendering of the board. Keeps its own copy of the marks it was told
/// about and writes everything to `output`.
pub struct TerminalDisplay<W: Write> {
    output: W,
    display: DisplayConfig,
    banners: BannerConfig,
    marks: [Option<Player>; BOARD_SIZE],
    highlighted: [bool; BOARD_SIZE],
    highlight: Option<Highlight>,
    input_enabled: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(output: W, display: DisplayConfig, banners: BannerConfig) -> Self {
        Self {
            output,
            display,
            banners,
            marks: [None; BOARD_SIZE],
            highlighted: [false; BOARD_SIZE],
            highlight: None,
            input_enabled: false,
            error: None,
        }
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn board_text(&self) -> String {
        let rows: Vec<String> = (0..3)
            .map(|row| {
                (0..3)
                    .map(|col| self.cell_text(row * 3 + col))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        let mut text = rows.join(&format!("\n{}\n", ROW_SEPARATOR));
        text.push('\n');
        text
    }

    pub fn render_board(&mut self) {
        let text = self.board_text();
        self.emit(&text);
    }

    pub fn write_line(&mut self, text: &str) {
        self.emit(&format!("{}\n", text));
    }

    pub fn write_prompt(&mut self, text: &str) {
        self.emit(text);
    }

    /// First write failure since the last call, if any. Writes are skipped
    /// while an error is pending.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn symbol(&self, player: Player) -> char {
        match player {
            Player::Human => self.display.human_symbol,
            Player::Opponent => self.display.opponent_symbol,
        }
    }

    fn cell_text(&self, position: usize) -> String {
        let content = match self.marks[position] {
            Some(player) => self.symbol(player).to_string(),
            None if self.display.show_position_hints => (position + 1).to_string(),
            None => " ".to_string(),
        };

        let highlight = self.highlight.filter(|_| self.highlighted[position]);

        if !self.display.colors {
            return match highlight {
                Some(_) => format!("[{}]", content),
                None => format!(" {} ", content),
            };
        }

        let padded = format!(" {} ", content);
        let painted: ColoredString = match self.marks[position] {
            Some(player) => paint_mark(&padded, player),
            None if self.display.show_position_hints => paint_hint(&padded),
            None => ColoredString::from(padded.as_str()),
        };

        match highlight {
            Some(highlight) => paint_highlight(painted, highlight).to_string(),
            None => painted.to_string(),
        }
    }

    fn announce(&mut self, banner: String, highlight: Highlight) {
        self.highlight = Some(highlight);
        self.input_enabled = false;
        self.render_board();

        let banner = if self.display.colors {
            paint_banner(&banner, highlight).to_string()
        } else {
            banner
        };
        self.write_line(&banner);
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }

        let result = self
            .output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush());

        if let Err(e) = result {
            log!("Terminal write failed: {}", e);
            self.error = Some(e);
        }
    }
}

impl<W: Write> GameDisplay for TerminalDisplay<W> {
    fn on_game_reset(&mut self) {
        self.marks = [None; BOARD_SIZE];
        self.highlighted = [false; BOARD_SIZE];
        self.highlight = None;
        self.input_enabled = true;

        let intro = format!(
            "New game. You play {}, the opponent plays {}.",
            self.display.human_symbol, self.display.opponent_symbol
        );
        self.write_line(&intro);
        self.render_board();
    }

    fn on_mark_placed(&mut self, position: usize, player: Player) {
        self.marks[position] = Some(player);

        if player == Player::Opponent {
            self.write_line(&format!("Opponent takes cell {}.", position + 1));
        }
    }

    fn on_game_won(&mut self, winning_positions: [usize; 3], winner: Player) {
        for position in winning_positions {
            self.highlighted[position] = true;
        }

        let banner = match winner {
            Player::Human => self.banners.win.clone(),
            Player::Opponent => self.banners.lose.clone(),
        };
        self.announce(banner, Highlight::for_winner(winner));
    }

    fn on_game_tied(&mut self) {
        self.highlighted = [true; BOARD_SIZE];
        let banner = self.banners.tie.clone();
        self.announce(banner, Highlight::Tie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_display() -> TerminalDisplay<Vec<u8>> {
        let display = DisplayConfig {
            colors: false,
            ..DisplayConfig::default()
        };
        TerminalDisplay::new(Vec::new(), display, BannerConfig::default())
    }

    fn output_of(display: TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_board_shows_hints() {
        let display = plain_display();
        assert_eq!(
            display.board_text(),
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_board_without_hints() {
        let mut display = TerminalDisplay::new(
            Vec::new(),
            DisplayConfig {
                colors: false,
                show_position_hints: false,
                ..DisplayConfig::default()
            },
            BannerConfig::default(),
        );
        display.on_mark_placed(4, Player::Human);
        assert_eq!(
            display.board_text(),
            "   |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   |   \n"
        );
    }

    #[test]
    fn test_reset_clears_marks_and_enables_input() {
        let mut display = plain_display();
        assert!(!display.input_enabled());

        display.on_mark_placed(0, Player::Opponent);
        display.on_game_tied();
        assert!(!display.input_enabled());

        display.on_game_reset();
        assert!(display.input_enabled());
        assert!(display.board_text().starts_with(" 1 |"));
    }

    #[test]
    fn test_opponent_move_is_announced() {
        let mut display = plain_display();
        display.on_mark_placed(4, Player::Human);
        display.on_mark_placed(0, Player::Opponent);

        let output = output_of(display);
        assert_eq!(output, "Opponent takes cell 1.\n");
    }

    #[test]
    fn test_win_highlights_line_and_shows_banner() {
        let mut display = plain_display();
        for position in [6, 7, 8] {
            display.on_mark_placed(position, Player::Opponent);
        }
        display.on_game_won([6, 7, 8], Player::Opponent);

        assert!(!display.input_enabled());
        let output = output_of(display);
        assert!(output.contains(" 4 | 5 | 6 \n---+---+---\n[X]|[X]|[X]\n"));
        assert!(output.ends_with("You Lose\n"));
    }

    #[test]
    fn test_human_win_uses_win_banner() {
        let mut display = plain_display();
        display.on_game_won([0, 4, 8], Player::Human);
        assert!(output_of(display).ends_with("You Win!!\n"));
    }

    #[test]
    fn test_tie_highlights_every_cell() {
        let mut display = plain_display();
        display.on_game_tied();

        let output = output_of(display);
        assert!(output.contains("[1]|[2]|[3]"));
        assert!(output.ends_with("Game Tied!!\n"));
    }

    #[test]
    fn test_write_failure_is_kept_until_taken() {
        let mut display =
            TerminalDisplay::new(FailingWriter, DisplayConfig::default(), BannerConfig::default());
        display.on_game_reset();

        let error = display.take_error().unwrap();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(display.take_error().is_none());
    }
}
