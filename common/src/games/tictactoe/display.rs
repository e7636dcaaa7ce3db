use std::fmt;

use super::board::Board;
use super::types::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    PlayerTurn,
    ComputerTurn,
    PlayerWins,
    ComputerWins,
    Draw,
}

impl StatusMessage {
    pub fn for_finished(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::PlayerWon => Some(StatusMessage::PlayerWins),
            GameStatus::ComputerWon => Some(StatusMessage::ComputerWins),
            GameStatus::Draw => Some(StatusMessage::Draw),
            GameStatus::InProgress => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusMessage::PlayerTurn => "player's turn",
            StatusMessage::ComputerTurn => "computer's turn",
            StatusMessage::PlayerWins => "player wins",
            StatusMessage::ComputerWins => "computer wins",
            StatusMessage::Draw => "draw",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation side of a game. The game state pushes every change through this trait
/// and never reads anything back from it.
pub trait BoardDisplay {
    fn render(&mut self, board: &Board);

    fn announce_status(&mut self, message: StatusMessage);

    fn set_interactable(&mut self, interactable: bool);
}
