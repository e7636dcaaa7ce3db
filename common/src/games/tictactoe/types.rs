use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A cell index on the 3x3 grid, row-major, always in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    pub const ALL: [Position; CELL_COUNT] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
    ];

    pub fn new(index: usize) -> Result<Self, GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::OutOfBounds(index));
        }
        Ok(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / BOARD_SIDE
    }

    pub fn col(self) -> usize {
        self.index() % BOARD_SIDE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let index: usize = text
            .parse()
            .map_err(|_| GameError::InvalidPosition(text.to_string()))?;
        Position::new(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Computer,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Player => Some(Mark::Computer),
            Mark::Computer => Some(Mark::Player),
            Mark::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Computer,
}

impl Turn {
    pub fn mark(self) -> Mark {
        match self {
            Turn::Player => Mark::Player,
            Turn::Computer => Mark::Computer,
        }
    }

    pub fn other(self) -> Turn {
        match self {
            Turn::Player => Turn::Computer,
            Turn::Computer => Turn::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == normalized)
            .ok_or_else(|| {
                GameError::configuration(format!(
                    "unknown difficulty '{}', expected one of: easy, normal, hard",
                    s.trim()
                ))
            })
    }
}

/// Three cells that win the game when held by the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub cells: [Position; 3],
}

impl WinningLine {
    const fn new(a: u8, b: u8, c: u8) -> Self {
        Self {
            cells: [Position(a), Position(b), Position(c)],
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new(0, 1, 2),
    WinningLine::new(3, 4, 5),
    WinningLine::new(6, 7, 8),
    WinningLine::new(0, 3, 6),
    WinningLine::new(1, 4, 7),
    WinningLine::new(2, 5, 8),
    WinningLine::new(0, 4, 8),
    WinningLine::new(2, 4, 6),
];
