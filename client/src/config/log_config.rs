use common::config::Validate;
use common::logger::LogTarget;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum LogTargetKind {
    #[default]
    Off,
    Stdout,
    Stderr,
    File,
}

/// Log lines go to `Off` by default so they never interleave with the board.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub target: LogTargetKind,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn to_target(&self) -> LogTarget {
        match (self.target, &self.file) {
            (LogTargetKind::Off, _) => LogTarget::Off,
            (LogTargetKind::Stdout, _) => LogTarget::Stdout,
            (LogTargetKind::Stderr, _) => LogTarget::Stderr,
            (LogTargetKind::File, Some(path)) => LogTarget::File(path.clone()),
            (LogTargetKind::File, None) => LogTarget::Off,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.target == LogTargetKind::File {
            match &self.file {
                Some(path) if !path.as_os_str().is_empty() => {}
                _ => return Err("log.file is required when log.target is File".to_string()),
            }
        }
        Ok(())
    }
}
