use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Board position 0..=8, entered by the player as cell 1..=9.
    Select(usize),
    NewGame,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    CellOutOfRange(u32),
    Unknown(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Nothing entered"),
            InputError::CellOutOfRange(cell) => {
                write!(f, "Cell {} does not exist, cells are numbered 1-9", cell)
            }
            InputError::Unknown(text) => write!(f, "Unknown command '{}'", text),
        }
    }
}

impl std::error::Error for InputError {}

pub fn parse_command(line: &str) -> Result<InputCommand, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    if let Ok(cell) = trimmed.parse::<u32>() {
        return match cell {
            1..=9 => Ok(InputCommand::Select((cell - 1) as usize)),
            _ => Err(InputError::CellOutOfRange(cell)),
        };
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "n" | "new" => Ok(InputCommand::NewGame),
        "h" | "help" | "?" => Ok(InputCommand::Help),
        "q" | "quit" | "exit" => Ok(InputCommand::Quit),
        _ => Err(InputError::Unknown(trimmed.to_string())),
    }
}
