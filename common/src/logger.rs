use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
    File(PathBuf),
    Off,
}

enum Sink {
    Stdout,
    Stderr,
    File(Mutex<File>),
    Off,
}

pub struct Logger {
    prefix: Option<String>,
    sink: Sink,
}

impl Logger {
    fn new(prefix: Option<String>, target: &LogTarget) -> io::Result<Self> {
        let sink = match target {
            LogTarget::Stdout => Sink::Stdout,
            LogTarget::Stderr => Sink::Stderr,
            LogTarget::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Sink::File(Mutex::new(file))
            }
            LogTarget::Off => Sink::Off,
        };

        Ok(Self { prefix, sink })
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}] {}", timestamp, prefix, message)
        } else {
            format!("[{}] {}", timestamp, message)
        }
    }

    pub fn log(&self, message: &str) {
        match &self.sink {
            Sink::Off => {}
            Sink::Stdout => println!("{}", self.format_line(message)),
            Sink::Stderr => eprintln!("{}", self.format_line(message)),
            Sink::File(file) => {
                let line = self.format_line(message);
                // Write failures are dropped.
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", line);
                }
            }
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>, target: &LogTarget) -> io::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let logger = Logger::new(prefix, target)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Messages logged before `init_logger` are dropped.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_log_{}.log", random_number))
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()), &LogTarget::Off).unwrap();
        let line = logger.format_line("hello");
        assert!(line.starts_with('['));
        assert!(line.ends_with("][Client] hello"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, &LogTarget::Off).unwrap();
        let line = logger.format_line("hello");
        assert!(line.ends_with("] hello"));
        assert!(!line.contains("]["));
    }

    #[test]
    fn test_file_sink_appends_lines() {
        let path = get_temp_file_path();
        let logger = Logger::new(None, &LogTarget::File(path.clone())).unwrap();
        logger.log("first");
        logger.log("second");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_file_sink_in_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("tictactoe_missing_log_dir_for_test")
            .join("nested")
            .join("game.log");
        assert!(Logger::new(None, &LogTarget::File(path)).is_err());
    }
}
