use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BannerConfig {
    pub win: String,
    pub lose: String,
    pub tie: String,
}

impl Validate for BannerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.win.trim().is_empty() || self.lose.trim().is_empty() || self.tie.trim().is_empty()
        {
            return Err("Banner texts must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            win: "You Win!!".to_string(),
            lose: "You Lose".to_string(),
            tie: "Game Tied!!".to_string(),
        }
    }
}
