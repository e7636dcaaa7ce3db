use derive_more::{Display, Error};

use crate::games::tictactoe::Position;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("Cell {} is already marked", _0)]
    InvalidMove(#[error(not(source))] Position),

    #[display("Configuration error: {}", _0)]
    Configuration(#[error(not(source))] String),

    #[display("No available positions to choose a move from")]
    EmptyMoveRequest,

    #[display("Position {} is out of bounds (expected 0..=8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    #[display("Game is already over")]
    GameOver,

    #[display("Not your turn")]
    NotPlayerTurn,

    #[display("It is not the computer's turn")]
    NotComputerTurn,

    #[display("'{}' is not a cell index (expected 0..=8)", _0)]
    InvalidPosition(#[error(not(source))] String),
}

impl GameError {
    pub fn configuration(message: impl Into<String>) -> Self {
        GameError::Configuration(message.into())
    }
}
