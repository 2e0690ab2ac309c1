use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub human_symbol: char,
    pub opponent_symbol: char,
    pub colors: bool,
    pub show_position_hints: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        for symbol in [self.human_symbol, self.opponent_symbol] {
            if symbol.is_whitespace() || symbol.is_ascii_digit() || symbol.is_control() {
                return Err(format!(
                    "Mark symbol {:?} must be a visible character other than a digit",
                    symbol
                ));
            }
        }
        if self.human_symbol == self.opponent_symbol {
            return Err("Human and opponent must use different mark symbols".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            human_symbol: 'O',
            opponent_symbol: 'X',
            colors: true,
            show_position_hints: true,
        }
    }
}
