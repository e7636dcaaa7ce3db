use common::GameError;
use common::config::Validate;
use common::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    // Unknown difficulty names are already rejected while parsing.
    fn validate(&self) -> Result<(), GameError> {
        Ok(())
    }
}
