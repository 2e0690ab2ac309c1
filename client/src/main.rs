mod colors;
mod config;
mod input;
mod runner;
mod terminal_display;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};

use config::{ConfigManager, LogTargetKind, get_config_manager};
use runner::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a perfect opponent")]
struct Args {
    /// YAML config file, defaults to the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let mut config = config_manager.get_config()?;

    if let Some(path) = args.log_file {
        config.log.target = LogTargetKind::File;
        config.log.file = Some(path);
    }
    if args.no_color {
        config.display.colors = false;
    }
    if !config.display.colors {
        colored::control::set_override(false);
    }

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, &config.log.to_target())?;

    log!("Tic-tac-toe client started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_tictactoe_game(stdin.lock(), stdout.lock(), &config)?;

    log!("Tic-tac-toe client exited");
    Ok(())
}
