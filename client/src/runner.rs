use std::io::{self, BufRead, Write};

use common::games::tictactoe::{GameController, GameStatus};
use common::log;

use crate::config::Config;
use crate::input::{InputCommand, InputError, parse_command};
use crate::terminal_display::TerminalDisplay;

const HELP_TEXT: &str = "Enter 1-9 to mark a cell (1 is top-left, 9 is bottom-right), \
'new' to start over, 'quit' to leave.";

/// Plays games on a line-based terminal until the player quits or input ends.
/// Returns the output writer so callers can inspect what was rendered.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    mut input: R,
    output: W,
    config: &Config,
) -> io::Result<W> {
    let display = TerminalDisplay::new(output, config.display.clone(), config.banners.clone());
    let mut controller = GameController::new(display);
    controller.start_game();

    let mut line = String::new();
    loop {
        prompt(&mut controller);
        if let Some(e) = controller.display_mut().take_error() {
            return Err(e);
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log!("Input closed");
            break;
        }

        match parse_command(&line) {
            Ok(InputCommand::Select(position)) => select(&mut controller, position),
            Ok(InputCommand::NewGame) => controller.start_game(),
            Ok(InputCommand::Help) => controller.display_mut().write_line(HELP_TEXT),
            Ok(InputCommand::Quit) => break,
            Err(InputError::Empty) => {}
            Err(e) => {
                let message = format!("{}. Type 'help' for commands.", e);
                controller.display_mut().write_line(&message);
            }
        }
    }

    let mut display = controller.into_display();
    display.write_line("Goodbye!");
    match display.take_error() {
        Some(e) => Err(e),
        None => Ok(display.into_inner()),
    }
}

fn select<W: Write>(controller: &mut GameController<TerminalDisplay<W>>, position: usize) {
    if controller.on_human_select(position) {
        if controller.status() == GameStatus::InProgress {
            controller.display_mut().render_board();
        }
        return;
    }

    let message = match controller.status() {
        GameStatus::InProgress => format!("Cell {} is already taken.", position + 1),
        _ => "The game is over.".to_string(),
    };
    controller.display_mut().write_line(&message);
}

fn prompt<W: Write>(controller: &mut GameController<TerminalDisplay<W>>) {
    let text = if controller.display().input_enabled() {
        "Your move (1-9): "
    } else {
        "Type 'new' to play again or 'quit' to leave: "
    };
    controller.display_mut().write_prompt(text);
}
