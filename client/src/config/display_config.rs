use common::GameError;
use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPUTER_MOVE_DELAY_MS: u64 = 800;
pub const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub computer_move_delay_ms: u64,
    pub player_symbol: char,
    pub computer_symbol: char,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), GameError> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(GameError::configuration(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            )));
        }
        for symbol in [self.player_symbol, self.computer_symbol] {
            if symbol.is_whitespace() || symbol.is_ascii_digit() {
                return Err(GameError::configuration(format!(
                    "'{}' cannot be used as a mark symbol",
                    symbol
                )));
            }
        }
        if self.player_symbol == self.computer_symbol {
            return Err(GameError::configuration(
                "player_symbol and computer_symbol must differ",
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            computer_move_delay_ms: DEFAULT_COMPUTER_MOVE_DELAY_MS,
            player_symbol: 'O',
            computer_symbol: 'X',
        }
    }
}
