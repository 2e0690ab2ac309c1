mod banner_config;
mod config;
mod display_config;
mod log_config;

pub(crate) use common::config::ConfigManager;

pub use banner_config::BannerConfig;
pub use config::{Config, get_config_manager};
pub use display_config::DisplayConfig;
pub use log_config::{LogConfig, LogTargetKind};
